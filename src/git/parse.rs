//! Parsing of `git` text output.

use std::collections::HashSet;

use lazy_regex::regex_captures;

/// One recognised line of `git branch` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLine {
    pub name: String,
    /// Marked with `*`, i.e. the checked out branch.
    pub is_current: bool,
}

/// Parse `git branch` / `git branch --remote` output.
///
/// A line is a branch token after leading whitespace, optionally preceded by
/// a marker (`*` for HEAD, `+` for a branch checked out in another
/// worktree). Lines that do not have this shape, such as
/// `* (HEAD detached at 1a2b3c4)` or `origin/HEAD -> origin/main`, are
/// skipped.
pub fn parse_branch_listing(output: &str) -> Vec<BranchLine> {
    output
        .lines()
        .filter_map(|line| {
            let (_, marker, name) = regex_captures!(r"^([*+])?\s+(\S+)\s*$", line)?;
            Some(BranchLine {
                name: name.to_string(),
                is_current: marker == "*",
            })
        })
        .collect()
}

/// Branch names of `remote` from `git branch --remote`, with the remote
/// segment removed. Branches of other remotes are skipped.
pub fn parse_remote_listing(output: &str, remote: &str) -> Vec<String> {
    parse_branch_listing(output)
        .iter()
        .filter_map(|line| strip_remote(&line.name, remote))
        .map(str::to_string)
        .collect()
}

/// `origin/feature/x` -> `feature/x` when `remote` is `origin`.
pub fn strip_remote<'a>(name: &'a str, remote: &str) -> Option<&'a str> {
    name.strip_prefix(remote)?
        .strip_prefix('/')
        .filter(|branch| !branch.is_empty())
}

/// Number of commits in `git log --oneline` output.
pub fn count_log_lines(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Remote branches without a local branch of the same name, in remote order
/// and without duplicates.
pub fn untracked_remote_branches(remote: &[String], local: &[String]) -> Vec<String> {
    let local: HashSet<&str> = local.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    remote
        .iter()
        .filter(|name| !local.contains(name.as_str()))
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
