use std::io::{BufRead, Write};

use super::error::Result;
use super::{cancelled, execute_and_finish};
use crate::git::BranchRepo;
use crate::prompt::{Console, Selection};
use crate::shared::outcome::Outcome;
use crate::shell::Shell;

/// Let the user pick one of the local branches other than HEAD.
pub(super) fn select_other_branch<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Result<Option<String>>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let branches = repo.unselected_local_branch_names()?;
    match console.select_from(&branches, "Branches:")? {
        Selection::Chosen { value, .. } => Ok(Some(value)),
        Selection::Cancelled => Ok(None),
    }
}

pub(super) fn checkout<S, R, W>(repo: &BranchRepo<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let current = repo.current_branch_name()?;
    console.say(format_args!("Current: {current}"))?;

    let Some(target) = select_other_branch(repo, console)? else {
        return cancelled(console);
    };

    console.say(format_args!("Checkout branch: {target}\n"))?;
    let command = repo.checkout_command(&target)?;
    execute_and_finish(repo, console, &command)
}

pub(super) fn diff_branch<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let current = repo.current_branch_name()?;
    console.say(format_args!("Diff: {current} <--> ?"))?;
    console.say("Select target branch.\n")?;

    let Some(target) = select_other_branch(repo, console)? else {
        return cancelled(console);
    };

    console.say(format_args!(
        "Running diff: {current} (left) <--> {target} (right)"
    ))?;
    let command = repo.dir_diff_command(&current, &target)?;
    execute_and_finish(repo, console, &command)
}
