//! Branch queries and commands against the repository in the working
//! directory, via the `git` executable.

use crate::shell::{CallStatus, Result, Shell, quote};

use super::parse::{count_log_lines, parse_branch_listing, parse_remote_listing};

/// Default remote for pushing and tracking.
pub const DEFAULT_REMOTE: &str = "origin";

/// Read and modify branches through a [`Shell`].
pub struct BranchRepo<S> {
    shell: S,
    remote: String,
}

impl<S: Shell> BranchRepo<S> {
    pub fn new(shell: S, remote: impl Into<String>) -> Self {
        Self {
            shell,
            remote: remote.into(),
        }
    }

    /// Remote used by push and tracking commands.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Abbreviated ref name of HEAD ("HEAD" when detached).
    pub fn current_branch_name(&self) -> Result<String> {
        let output = self.shell.run("git rev-parse --abbrev-ref HEAD")?;
        Ok(output.trim().to_string())
    }

    /// Every local branch, including the current one.
    pub fn all_local_branch_names(&self) -> Result<Vec<String>> {
        let output = self.shell.run("git branch")?;
        Ok(parse_branch_listing(&output)
            .into_iter()
            .map(|line| line.name)
            .collect())
    }

    /// Local branches other than the checked out one.
    pub fn unselected_local_branch_names(&self) -> Result<Vec<String>> {
        let output = self.shell.run("git branch")?;
        Ok(parse_branch_listing(&output)
            .into_iter()
            .filter(|line| !line.is_current)
            .map(|line| line.name)
            .collect())
    }

    /// Branches of the configured remote, with the remote name stripped.
    pub fn remote_branch_names(&self) -> Result<Vec<String>> {
        let output = self.shell.run("git branch --remote")?;
        Ok(parse_remote_listing(&output, &self.remote))
    }

    pub fn has_upstream(&self, branch: &str) -> Result<bool> {
        let command = format!(
            "git for-each-ref --format=%(upstream:short) {}",
            quote(&format!("refs/heads/{branch}"))?
        );
        let output = self.shell.run(&command)?;
        Ok(!output.trim().is_empty())
    }

    /// Commits reachable from the right side of `range` but not the left,
    /// e.g. `main..dev` counts commits on `dev` missing from `main`.
    pub fn commit_count_between(&self, range: &str) -> Result<usize> {
        let command = format!("git --no-pager log --oneline {}", quote(range)?);
        let output = self.shell.run(&command)?;
        Ok(count_log_lines(&output))
    }

    pub fn git_version(&self) -> Result<String> {
        let output = self.shell.run("git --version")?;
        Ok(output.trim().to_string())
    }

    pub fn checkout_command(&self, branch: &str) -> Result<String> {
        Ok(format!("git checkout {}", quote(branch)?))
    }

    /// Directory diff with `left` on the left and `right` on the right.
    pub fn dir_diff_command(&self, left: &str, right: &str) -> Result<String> {
        Ok(format!(
            "git difftool --dir-diff {}",
            quote(&format!("{left}..{right}"))?
        ))
    }

    pub fn push_set_upstream_command(&self, branch: &str) -> Result<String> {
        Ok(format!(
            "git push --set-upstream {} {}",
            quote(&self.remote)?,
            quote(branch)?
        ))
    }

    /// Create local `branch` tracking `<remote>/<branch>`.
    pub fn checkout_tracking_command(&self, branch: &str) -> Result<String> {
        Ok(format!(
            "git checkout -b {} --track {}",
            quote(branch)?,
            quote(&format!("{}/{branch}", self.remote))?
        ))
    }

    /// Run a mutating command attached to the terminal.
    pub fn execute(&self, command_line: &str) -> Result<CallStatus> {
        tracing::info!(command = command_line, "executing");
        self.shell.call(command_line)
    }
}

/// Range expression for commits on `to` that are not on `from`.
pub fn commit_range(from: &str, to: &str) -> String {
    format!("{from}..{to}")
}
