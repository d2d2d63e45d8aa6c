use std::io::{BufRead, Write};

use super::cancelled;
use super::checkout::select_other_branch;
use super::error::Result;
use crate::git::{BranchRepo, commit_range};
use crate::prompt::Console;
use crate::shared::outcome::Outcome;
use crate::shell::Shell;

/// Report commits each side has that the other lacks.
pub(super) fn in_sync<S, R, W>(repo: &BranchRepo<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let current = repo.current_branch_name()?;
    console.say(format_args!(
        "Current branch: {current}. Please select branch to compare."
    ))?;

    let Some(other) = select_other_branch(repo, console)? else {
        return cancelled(console);
    };

    let ahead = repo.commit_count_between(&commit_range(&other, &current))?;
    let behind = repo.commit_count_between(&commit_range(&current, &other))?;

    console.say("")?;
    console.say(format_args!(
        "Changes on '{current}' that are NOT on '{other}': {ahead}"
    ))?;
    console.say(format_args!(
        "Changes on '{other}' that are NOT on '{current}': {behind}"
    ))?;
    console.say("")?;
    console.say("Done.")?;
    Ok(Outcome::Success)
}
