//! Main workflow orchestration logic
//!
//! This module contains the version workflow behind the `mkversion` binary.
//! It provides a clean separation between CLI argument parsing and the
//! repository queries plus resolution that produce the version.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::MkVersionError;
use crate::git::{FileRepository, Git2Repository, Repository};
use crate::resolver::{Resolution, ResolutionKind, Resolver};

/// Saved `git tag` and `git branch --all` output to read instead of a checkout
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFiles {
    pub tags: PathBuf,
    pub branches: PathBuf,
}

/// Arguments for the version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionWorkflowArgs {
    /// Repository to open; discovered from the current directory when absent
    pub repo_path: Option<PathBuf>,

    /// Read saved listings instead of opening a repository
    pub listing: Option<ListingFiles>,

    /// Branch to resolve instead of the checked-out one
    pub branch: Option<String>,
}

/// Result of a successful version workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The rendered version
    pub version: String,

    /// The branch name the version was resolved for
    pub branch: String,

    pub resolution: Resolution,

    /// Non-fatal conditions worth reporting
    pub warnings: Vec<BoundaryWarning>,
}

/// Main version workflow
///
/// 1. Build the resolver from the trunk configuration
/// 2. Open the repository, or the saved listings
/// 3. Resolve the version for the current (or given) branch
///
/// # Arguments
///
/// * `args` - Workflow arguments (repository, listing files, branch)
/// * `config` - mkversion configuration
pub fn run_version_workflow(args: &VersionWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let resolver = Resolver::from_config(&config.trunk)?;

    match &args.listing {
        Some(files) => {
            let repo = FileRepository::open(&files.tags, &files.branches).with_context(|| {
                format!(
                    "Failed to read listings '{}' and '{}'",
                    files.tags.display(),
                    files.branches.display()
                )
            })?;
            resolve_with_repository(&repo, &resolver, args.branch.as_deref())
        }
        None => {
            let path = args.repo_path.clone().unwrap_or_else(|| PathBuf::from("."));
            let repo = Git2Repository::open(&path)
                .with_context(|| format!("Not in a git repository: {}", path.display()))?;
            resolve_with_repository(&repo, &resolver, args.branch.as_deref())
        }
    }
}

/// Resolve the version using any [Repository] implementation
///
/// `branch_override` replaces the repository's current branch.
pub fn resolve_with_repository<R: Repository>(
    repo: &R,
    resolver: &Resolver,
    branch_override: Option<&str>,
) -> Result<WorkflowResult> {
    let tags = repo.list_tags().context("Failed to list tags")?;
    let listing = repo.list_branches().context("Failed to list branches")?;

    let mut warnings = Vec::new();

    let branch = match (branch_override, listing.current) {
        (Some(name), _) => name.trim().to_string(),
        (None, Some(current)) => {
            if !listing.has_upstream {
                warnings.push(BoundaryWarning::NoUpstream {
                    branch: current.clone(),
                });
            }
            current
        }
        (None, None) => {
            return Err(MkVersionError::repository(
                "No current branch: HEAD is detached or unborn",
            )
            .into())
        }
    };

    let resolution = resolver.resolve(&branch, &tags, &listing.branches)?;

    if resolution.ignored_tags > 0 {
        warnings.push(BoundaryWarning::IgnoredNames {
            kind: "tag",
            count: resolution.ignored_tags,
        });
    }
    if resolution.ignored_branches > 0 {
        warnings.push(BoundaryWarning::IgnoredNames {
            kind: "branch",
            count: resolution.ignored_branches,
        });
    }
    if resolution.kind == ResolutionKind::Fallback {
        warnings.push(BoundaryWarning::NoMatchingCandidates {
            version: resolution.branch_version.to_string(),
        });
    }

    Ok(WorkflowResult {
        version: resolution.to_string(),
        branch,
        resolution,
        warnings,
    })
}
