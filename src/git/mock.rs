use crate::error::{MkVersionError, Result};
use crate::git::{BranchListing, Repository};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    branches: Vec<String>,
    current: Option<String>,
    has_upstream: bool,
    fail_branches: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            branches: Vec::new(),
            current: None,
            has_upstream: false,
            fail_branches: false,
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add a remote branch name
    pub fn add_branch(&mut self, name: impl Into<String>) {
        self.branches.push(name.into());
    }

    /// Set the checked-out branch as already resolved to its upstream
    pub fn set_current(&mut self, name: impl Into<String>, has_upstream: bool) {
        self.current = Some(name.into());
        self.has_upstream = has_upstream;
    }

    /// Make branch listing fail, as a broken repository would
    pub fn fail_branch_listing(&mut self) {
        self.fail_branches = true;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn list_branches(&self) -> Result<BranchListing> {
        if self.fail_branches {
            return Err(MkVersionError::repository("branch listing unavailable"));
        }
        Ok(BranchListing {
            branches: self.branches.clone(),
            current: self.current.clone(),
            has_upstream: self.has_upstream,
        })
    }
}
