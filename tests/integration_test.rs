// tests/integration_test.rs
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::Repository;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the binary isolated from any user or working-directory configuration
fn mkversion(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Could not create temp dir");
    Command::new(env!("CARGO_BIN_EXE_mkversion"))
        .args(args)
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .output()
        .expect("Failed to execute mkversion")
}

fn run_with_listings(extra: &[&str]) -> Output {
    let tags = fixture("tags.txt");
    let branches = fixture("branches.txt");
    let mut args = vec![tags.to_str().unwrap(), branches.to_str().unwrap()];
    args.extend_from_slice(extra);
    mkversion(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_help() {
    let output = mkversion(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("tag and branch names"));
}

#[test]
fn test_version_flag() {
    let output = mkversion(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("mkversion "));
}

#[test]
fn test_current_branch_from_listing() {
    let output = run_with_listings(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1.3\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_explicit_branches() {
    let cases = [
        ("origin/2.x", "2.1\n"),
        ("origin/1.2-patch", "1.2.1\n"),
        ("origin/master", "3\n"),
        ("origin/1.5", "1.5\n"),
    ];

    for (branch, expected) in cases {
        let output = run_with_listings(&[branch]);
        assert!(output.status.success(), "branch {}: {}", branch, stderr(&output));
        assert_eq!(stdout(&output), expected, "branch {}", branch);
    }
}

#[test]
fn test_trunk_overrides() {
    let output = run_with_listings(&[
        "--trunk-branch",
        "main",
        "--trunk-version",
        "4.1",
        "origin/main",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "4.1\n");
}

#[test]
fn test_config_file() {
    let config = fixture("trunk_main.toml");
    let output = run_with_listings(&["--config", config.to_str().unwrap(), "origin/main"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn test_invalid_config_version() {
    let config = fixture("bad_trunk_version.toml");
    let output = run_with_listings(&["--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("not-a-version"));
}

#[test]
fn test_bad_branch_exits_nonzero() {
    let output = run_with_listings(&["origin/feature-login"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Bad branch: origin/feature-login"));
}

#[test]
fn test_missing_listing_file() {
    let tags = fixture("tags.txt");
    let output = mkversion(&[tags.to_str().unwrap(), "/nonexistent/branches.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_verbose_reports_on_stderr_only() {
    let output = run_with_listings(&["--verbose"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.3\n");

    let diagnostics = stderr(&output);
    assert!(diagnostics.contains("Ignored 2 tag names"));
    assert!(diagnostics.contains("has no upstream"));
    assert!(diagnostics.contains("Resolved 1.3"));
}

#[cfg(test)]
mod git_operations_tests {
    use super::*;

    // Repository with tag v1.2GA and a local 1.next tracking origin/1.next
    fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        std::fs::write(temp_dir.path().join("README.md"), b"Initial content\n")
            .expect("Could not write initial file");
        let mut index = repo.index().expect("Could not get index");
        index
            .add_path(Path::new("README.md"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");
        let tree_id = index.write_tree().expect("Could not write tree");

        {
            let tree = repo.find_tree(tree_id).expect("Could not find tree");
            let sig = repo.signature().expect("Could not get sig");
            let commit_id = repo
                .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("Could not create commit");
            let commit = repo.find_commit(commit_id).unwrap();

            repo.tag_lightweight("v1.2GA", commit.as_object(), false)
                .expect("Could not create tag");
            repo.tag_lightweight("nightly", commit.as_object(), false)
                .expect("Could not create tag");

            repo.remote("origin", "https://example.invalid/project.git")
                .expect("Could not add remote");
            for name in ["1.next", "1.2-patch", "master"] {
                repo.reference(
                    &format!("refs/remotes/origin/{}", name),
                    commit_id,
                    true,
                    "test setup",
                )
                .expect("Could not create remote branch");
            }

            let mut local = repo
                .branch("1.next", &commit, false)
                .expect("Could not create branch");
            local
                .set_upstream(Some("origin/1.next"))
                .expect("Could not set upstream");
        }

        repo.set_head("refs/heads/1.next")
            .expect("Could not switch branch");
        temp_dir
    }

    #[test]
    fn test_resolves_from_repository() {
        let temp_dir = setup_test_repo();
        let output = mkversion(&["--repo", temp_dir.path().to_str().unwrap()]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "1.3\n");
    }

    #[test]
    fn test_not_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        let output = mkversion(&["--repo", temp_dir.path().to_str().unwrap()]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).is_empty());
    }
}
