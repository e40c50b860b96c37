//! Version resolution for the current branch
//!
//! Given the repository's tag names, branch names and the branch being built,
//! [`Resolver::resolve`] decides which version the build should carry:
//!
//! 1. The current branch is parsed with the branch grammar. The trunk alias
//!    is special-cased to the configured trunk version and always counts as
//!    a development line.
//! 2. Tags are parsed, recording which versions are GA.
//! 3. A branch that is neither a development line nor GA-tagged is terminal:
//!    its own version is final and branches are never read.
//! 4. Otherwise branch names join the tags as candidates, sorted ascending,
//!    and the last candidate in the first contiguous run of matches decides
//!    the successor.

use crate::config::TrunkConfig;
use crate::domain::{is_same_base_version, BranchContext, VersionRegistry, VersionTuple};
use crate::error::{MkVersionError, Result};
use std::fmt;

/// How the resolved version was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionKind {
    /// The branch is not a development line and carries no GA tag
    Terminal,
    /// A tag or branch sharing the base version determined the successor
    Successor,
    /// Nothing shared the base version, so the branch version stands
    Fallback,
}

/// Outcome of resolving a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The version to stamp the build with
    pub version: VersionTuple,
    /// The version the current branch name denotes
    pub branch_version: VersionTuple,
    pub kind: ResolutionKind,
    /// Tags and branches that parsed into candidates
    pub candidates: usize,
    pub ignored_tags: usize,
    pub ignored_branches: usize,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Computes the version for a branch against the repository's tags and branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    trunk_branch: String,
    trunk_version: VersionTuple,
}

impl Resolver {
    pub fn new(trunk_branch: impl Into<String>, trunk_version: VersionTuple) -> Self {
        Resolver {
            trunk_branch: trunk_branch.into(),
            trunk_version,
        }
    }

    /// Build a resolver from the `[trunk]` configuration section
    pub fn from_config(trunk: &TrunkConfig) -> Result<Self> {
        Ok(Resolver::new(trunk.branch.clone(), trunk.version_tuple()?))
    }

    /// Resolve the version for `current_branch`
    ///
    /// `branches` is only iterated when the current branch is not terminal.
    ///
    /// # Errors
    /// * [`MkVersionError::Branch`] - if `current_branch` is neither the trunk
    ///   nor a versioned branch name
    ///
    /// # Example
    /// ```
    /// # use mkversion::resolver::Resolver;
    /// # use mkversion::domain::VersionTuple;
    /// let resolver = Resolver::new("master", VersionTuple::from_parts(&[3]).unwrap());
    /// let resolution = resolver
    ///     .resolve("origin/1.next", ["v1.2GA"], ["origin/1.next"])
    ///     .unwrap();
    /// assert_eq!(resolution.to_string(), "1.3");
    /// ```
    pub fn resolve<T, B>(&self, current_branch: &str, tags: T, branches: B) -> Result<Resolution>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let mut registry = VersionRegistry::new();

        let context = BranchContext::new(current_branch, &self.trunk_branch);
        let branch_version = if context.is_trunk() {
            registry.mark_development(self.trunk_version);
            self.trunk_version
        } else {
            registry
                .branch(&context.name)
                .ok_or_else(|| MkVersionError::branch(current_branch))?
        };

        let mut candidates = Vec::new();
        let mut ignored_tags = 0;
        for tag in tags {
            match registry.tag(tag.as_ref()) {
                Some(version) => candidates.push(version),
                None => ignored_tags += 1,
            }
        }

        if !registry.is_development(&branch_version) && !registry.is_ga_tag(&branch_version) {
            return Ok(Resolution {
                version: branch_version,
                branch_version,
                kind: ResolutionKind::Terminal,
                candidates: candidates.len(),
                ignored_tags,
                ignored_branches: 0,
            });
        }

        let mut ignored_branches = 0;
        for branch in branches {
            match registry.branch(branch.as_ref()) {
                Some(version) => candidates.push(version),
                None => ignored_branches += 1,
            }
        }

        candidates.sort();
        let successor = highest_successor(&registry, &branch_version, &candidates);

        let (version, kind) = match successor {
            Some(version) => (version, ResolutionKind::Successor),
            None => (branch_version, ResolutionKind::Fallback),
        };

        Ok(Resolution {
            version,
            branch_version,
            kind,
            candidates: candidates.len(),
            ignored_tags,
            ignored_branches,
        })
    }
}

/// Scan sorted candidates for the last successor in the first run of matches
///
/// Non-matching candidates before the run are skipped; the first one after it
/// ends the scan.
fn highest_successor(
    registry: &VersionRegistry,
    branch_version: &VersionTuple,
    sorted_candidates: &[VersionTuple],
) -> Option<VersionTuple> {
    let mut found = None;
    for candidate in sorted_candidates {
        match is_same_base_version(registry, branch_version, candidate) {
            Some(next) => found = Some(next),
            None if found.is_some() => break,
            None => continue,
        }
    }
    found
}
