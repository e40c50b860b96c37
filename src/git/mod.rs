//! Repository query abstraction layer
//!
//! The resolver only needs names: every tag, every remote branch, and the
//! branch being built. This module provides a trait-based abstraction over
//! where those names come from.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: reads a real checkout using the `git2` crate
//! - [listing::FileRepository]: reads saved `git tag` / `git branch --all` output
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use mkversion::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags()?;
//! let listing = repo.list_branches()?;
//! println!("{} tags, building {:?}", tags.len(), listing.current);
//! # Ok(())
//! # }
//! ```

pub mod listing;
pub mod mock;
pub mod repository;

pub use listing::FileRepository;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Branch names visible to the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchListing {
    /// Remote branch names, e.g. `origin/1.next`
    pub branches: Vec<String>,
    /// The checked-out branch, resolved to its upstream when it tracks one
    pub current: Option<String>,
    /// Whether `current` was resolved through an upstream
    pub has_upstream: bool,
}

/// Common repository query trait for abstraction
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error` or I/O failures) to the appropriate
/// [crate::error::MkVersionError] variants.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Names that are not release tags are returned too; the resolver skips
    /// them.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get the remote branch names and the current branch
    ///
    /// # Returns
    /// * `Ok(BranchListing)` - Remote branches plus the current branch, if any
    /// * `Err` - If the repository cannot be read
    fn list_branches(&self) -> Result<BranchListing>;
}
