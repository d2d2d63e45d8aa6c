use std::path::{Path, PathBuf};
use std::process::Command;

use crate::shell::SystemShell;

/// A temporary git repository for testing.
pub struct TestRepo {
    dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a git Command with isolated config (ignores global/system settings).
    fn git_command(dir: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir);
        // Ignore global/system git config to ensure tests are isolated from
        // local settings (e.g., GPG signing, aliases, hooks).
        cmd.env("GIT_CONFIG_GLOBAL", "/dev/null");
        cmd.env("GIT_CONFIG_SYSTEM", "/dev/null");
        cmd
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Self::git_command(dir)
            .args(args)
            .status()
            .unwrap_or_else(|e| panic!("Failed to run git {args:?}: {e}"));
        assert!(status.success(), "git {args:?} failed");
    }

    fn configure_user(dir: &Path) {
        Self::git(dir, &["config", "user.email", "test@example.com"]);
        Self::git(dir, &["config", "user.name", "Test User"]);
    }

    /// Create a new test repository on branch `main` with an initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        Self::git(dir.path(), &["init", "--quiet"]);
        // Independent of init.defaultBranch and the git version
        Self::git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        Self::configure_user(dir.path());
        Self::git(
            dir.path(),
            &["commit", "--quiet", "--allow-empty", "-m", "Initial commit"],
        );

        Self { dir }
    }

    /// Clone this repository; the clone has it as `origin`.
    pub fn clone_repo(&self) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = self.path();

        Self::git(
            dir.path(),
            &[
                "clone",
                "--quiet",
                source.to_str().expect("non UTF-8 temp path"),
                ".",
            ],
        );
        Self::configure_user(dir.path());

        Self { dir }
    }

    /// Get the canonicalized path to the repository.
    /// This resolves symlinks (e.g., /var -> /private/var on macOS).
    pub fn path(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize path")
    }

    /// Shell running in this repository with the same config isolation.
    pub fn shell(&self) -> SystemShell {
        SystemShell::in_dir(self.path())
            .with_env("GIT_CONFIG_GLOBAL", "/dev/null")
            .with_env("GIT_CONFIG_SYSTEM", "/dev/null")
    }

    /// Create a branch at HEAD without switching to it.
    pub fn create_branch(&self, name: &str) {
        Self::git(&self.path(), &["branch", name]);
    }

    pub fn checkout(&self, name: &str) {
        Self::git(&self.path(), &["checkout", "--quiet", name]);
    }

    /// Add an empty commit on the current branch.
    pub fn commit(&self, message: &str) {
        Self::git(
            &self.path(),
            &["commit", "--quiet", "--allow-empty", "-m", message],
        );
    }
}
