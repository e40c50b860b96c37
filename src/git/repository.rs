use crate::error::Result;
use crate::git::BranchListing;
use git2::{BranchType, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Name of the checked-out branch, or `None` for a detached or unborn HEAD
    fn head_branch(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }

        Ok(head.shorthand().map(|name| name.to_string()))
    }

    /// Upstream of a local branch, e.g. `1.next` -> `origin/1.next`
    fn upstream_of(&self, local_name: &str) -> Result<Option<String>> {
        let branch = self.repo.find_branch(local_name, BranchType::Local)?;

        match branch.upstream() {
            Ok(upstream) => Ok(upstream.name()?.map(|name| name.to_string())),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn list_branches(&self) -> Result<BranchListing> {
        let mut branches = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Remote))? {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                branches.push(name.to_string());
            }
        }

        let (current, has_upstream) = match self.head_branch()? {
            Some(local) => match self.upstream_of(&local)? {
                Some(upstream) => (Some(upstream), true),
                None => (Some(local), false),
            },
            None => (None, false),
        };

        Ok(BranchListing {
            branches,
            current,
            has_upstream,
        })
    }
}
