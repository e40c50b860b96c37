use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mkversion::cli::orchestration::{self, ListingFiles, VersionWorkflowArgs};
use mkversion::{config, ui, ResolutionKind};

#[derive(clap::Parser)]
#[command(
    name = "mkversion",
    about = "Compute the build version of a checkout from its tag and branch names",
    disable_version_flag = true
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Repository to inspect (defaults to the current directory)")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Name of the trunk branch")]
    trunk_branch: Option<String>,

    #[arg(long, help = "Version assumed by the trunk branch, e.g. 3")]
    trunk_version: Option<String>,

    #[arg(short, long, help = "Report progress and warnings on stderr")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,

    #[arg(
        value_name = "TAGS_FILE",
        requires = "branches_file",
        help = "Saved `git tag` output to read instead of the repository"
    )]
    tags_file: Option<PathBuf>,

    #[arg(
        value_name = "BRANCHES_FILE",
        requires = "tags_file",
        help = "Saved `git branch --all` output"
    )]
    branches_file: Option<PathBuf>,

    #[arg(
        value_name = "BRANCH",
        requires = "branches_file",
        help = "Branch to resolve instead of the current one"
    )]
    branch: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("mkversion {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(branch) = args.trunk_branch {
        config.trunk.branch = branch;
    }
    if let Some(version) = args.trunk_version {
        config.trunk.version = version;
    }

    let listing = match (args.tags_file, args.branches_file) {
        (Some(tags), Some(branches)) => Some(ListingFiles { tags, branches }),
        _ => None,
    };

    let workflow_args = VersionWorkflowArgs {
        repo_path: args.repo,
        listing,
        branch: args.branch,
    };

    let result = match orchestration::run_version_workflow(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if args.verbose {
        for warning in &result.warnings {
            ui::display_boundary_warning(warning);
        }

        let resolution = &result.resolution;
        let how = match resolution.kind {
            ResolutionKind::Terminal => "terminal branch, version taken from its name",
            ResolutionKind::Successor => "next version after existing tags and branches",
            ResolutionKind::Fallback => "no conflicting tags or branches",
        };
        ui::display_status(&format!(
            "Branch '{}' is version {} ({} candidates)",
            result.branch, resolution.branch_version, resolution.candidates
        ));
        ui::display_status(&format!("Resolved {}: {}", result.version, how));
    }

    ui::display_version(&result.version);
    Ok(())
}
