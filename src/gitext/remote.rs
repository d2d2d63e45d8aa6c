use std::io::{BufRead, Write};

use super::error::Result;
use super::{cancelled, execute_and_finish};
use crate::git::{BranchRepo, untracked_remote_branches};
use crate::prompt::{Console, Selection};
use crate::shared::outcome::Outcome;
use crate::shell::Shell;

pub(super) fn push_remote<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let current = repo.current_branch_name()?;
    if repo.has_upstream(&current)? {
        console.say(format_args!(
            "Current branch '{current}' already has a remote tracking branch."
        ))?;
        console.say("Done.")?;
        return Ok(Outcome::Success);
    }

    let question = format!(
        "Add remote tracking branch '{}/{current}'? (y/n): ",
        repo.remote()
    );
    if !console.confirm(&question)? {
        return cancelled(console);
    }

    let command = repo.push_set_upstream_command(&current)?;
    console.say(format_args!("Running command: '{command}'"))?;
    execute_and_finish(repo, console, &command)
}

pub(super) fn has_remote<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let current = repo.current_branch_name()?;
    if repo.has_upstream(&current)? {
        console.say(format_args!(
            "Current branch '{current}' has a remote tracking branch."
        ))?;
    } else {
        console.say(format_args!(
            "Current branch '{current}' does NOT have a remote tracking branch."
        ))?;
    }
    Ok(Outcome::Success)
}

pub(super) fn pull_remote<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let remote_branches = repo.remote_branch_names()?;
    let local_branches = repo.all_local_branch_names()?;
    let candidates = untracked_remote_branches(&remote_branches, &local_branches);

    let Selection::Chosen { value: branch, .. } =
        console.select_from(&candidates, "Remote branches:")?
    else {
        return cancelled(console);
    };

    let question = format!(
        "Check out '{}/{branch}' as new local branch '{branch}'? (y/n): ",
        repo.remote()
    );
    if !console.confirm(&question)? {
        return cancelled(console);
    }

    let command = repo.checkout_tracking_command(&branch)?;
    console.say(format_args!("Running command: '{command}'"))?;
    execute_and_finish(repo, console, &command)
}
