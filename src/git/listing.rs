//! Saved repository listings
//!
//! Builds can capture `git tag` and `git branch --all` output up front and
//! hand the files to mkversion instead of a live checkout. In the branch
//! listing, the line starting with `*` is the checked-out branch and only
//! lines containing `/` (remote branches) are candidates.

use crate::error::Result;
use crate::git::BranchListing;
use std::fs;
use std::path::Path;

const CURRENT_MARKER: char = '*';

/// Repository backed by saved tag and branch listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRepository {
    tags: Vec<String>,
    listing: BranchListing,
}

impl FileRepository {
    /// Read a tag listing and a branch listing from disk
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(tags_path: P, branches_path: Q) -> Result<Self> {
        let tags = fs::read_to_string(tags_path)?;
        let branches = fs::read_to_string(branches_path)?;
        Ok(Self::from_listings(&tags, &branches))
    }

    /// Build from listing contents already in memory
    pub fn from_listings(tags: &str, branches: &str) -> Self {
        FileRepository {
            tags: parse_tag_listing(tags),
            listing: parse_branch_listing(branches),
        }
    }
}

/// One tag per line; blank lines are dropped
pub fn parse_tag_listing(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `git branch --all` output
pub fn parse_branch_listing(contents: &str) -> BranchListing {
    let mut listing = BranchListing::default();

    for line in contents.lines() {
        if let Some(current) = line.strip_prefix(CURRENT_MARKER) {
            let current = current.trim();
            if !current.is_empty() {
                listing.current = Some(current.to_string());
            }
        } else if line.contains('/') {
            listing.branches.push(line.trim().to_string());
        }
    }

    listing
}

impl super::Repository for FileRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn list_branches(&self) -> Result<BranchListing> {
        Ok(self.listing.clone())
    }
}
