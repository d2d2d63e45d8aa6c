//! Git branch access by shelling out to the `git` executable.
//!
//! Everything here parses git's human-readable output, so the line formats
//! in [`parse`] are the contract with git.

pub mod parse;
mod repo;

pub use parse::untracked_remote_branches;
pub use repo::{BranchRepo, DEFAULT_REMOTE, commit_range};
