//! `gitext`: interactive helpers around local and remote branches.
//!
//! One verb per invocation. Each verb reads repository state through
//! [`BranchRepo`], asks the user through [`Console`] and finally runs at
//! most one mutating git command.

mod checkout;
mod error;
mod remote;
mod sync;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub use error::{GitExtError, Result};

use crate::git::BranchRepo;
use crate::prompt::{Console, PromptError};
use crate::shared::cli::{Invocation, parse_invocation, write_command_listing};
use crate::shared::config::load_config_when;
use crate::shared::outcome::Outcome;
use crate::shell::{Shell, SystemShell};

pub const TOOL_NAME: &str = "gitext";

#[derive(Parser)]
#[command(
    name = "gitext",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub verb: Option<Verb>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// Interactively checkout a different branch
    Checkout,

    /// Diff the current branch against a target branch
    #[command(name = "diffbranch")]
    DiffBranch,

    /// Push the current (local only) branch and set its upstream
    #[command(name = "pushremote", alias = "addremote")]
    PushRemote,

    /// Check if the current branch has a remote tracking branch
    #[command(name = "hasremote")]
    HasRemote,

    /// Check out a remote branch that has no local branch yet
    #[command(name = "pullremote")]
    PullRemote,

    /// Show commits that differ between the current and a target branch
    #[command(name = "insync")]
    InSync,

    /// Show supported commands
    Help,

    /// Show version information
    Version,
}

/// Entry point for the `gitext` binary.
pub fn main_with_args<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = parse_invocation(args, |cli: Cli| cli.verb);

    let config = match load_config_when(needs_config(&invocation)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let repo = BranchRepo::new(SystemShell::new(), config.git.remote);
    let mut console = Console::stdio();
    dispatch(invocation, &repo, &mut console).into()
}

/// Help, version and the fallbacks never read the config file.
fn needs_config(invocation: &Invocation<Verb>) -> bool {
    matches!(invocation, Invocation::Verb(verb) if !matches!(verb, Verb::Help | Verb::Version))
}

/// Run one invocation to completion and report how it ended.
pub fn dispatch<S, R, W>(
    invocation: Invocation<Verb>,
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
) -> Outcome
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let result = match invocation {
        Invocation::Missing => print_help(console),
        Invocation::Unrecognized => console
            .say("Unrecognized command.")
            .map_err(GitExtError::from)
            .and_then(|()| print_help(console)),
        Invocation::Verb(verb) => {
            tracing::debug!(?verb, "dispatching");
            run_verb(verb, repo, console)
        }
    };
    settle(result, console)
}

fn run_verb<S, R, W>(verb: Verb, repo: &BranchRepo<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    match verb {
        Verb::Checkout => checkout::checkout(repo, console),
        Verb::DiffBranch => checkout::diff_branch(repo, console),
        Verb::PushRemote => remote::push_remote(repo, console),
        Verb::HasRemote => remote::has_remote(repo, console),
        Verb::PullRemote => remote::pull_remote(repo, console),
        Verb::InSync => sync::in_sync(repo, console),
        Verb::Help => print_help(console),
        Verb::Version => print_version(repo, console),
    }
}

/// Turn an error into the terminal line the user sees.
fn settle<R: BufRead, W: Write>(result: Result<Outcome>, console: &mut Console<R, W>) -> Outcome {
    match result {
        Ok(outcome) => outcome,
        Err(GitExtError::Shell(e)) => {
            // git has already printed its own diagnostic.
            if !e.is_command_failure() {
                eprintln!("Error: {e}");
            }
            tracing::debug!(error = %e, "command failed");
            console.say("Done.").ok();
            Outcome::Fatal
        }
        Err(GitExtError::Prompt(PromptError::InputClosed)) => {
            console.say("").ok();
            console.say("Cancelled.").ok();
            Outcome::Cancelled
        }
        Err(GitExtError::Prompt(e)) => {
            eprintln!("Error: {e}");
            Outcome::Fatal
        }
    }
}

fn print_help<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome> {
    write_command_listing::<Cli, _, _>(console)?;
    Ok(Outcome::Success)
}

fn print_version<S, R, W>(repo: &BranchRepo<S>, console: &mut Console<R, W>) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    console.say(format_args!("{TOOL_NAME} {}", env!("CARGO_PKG_VERSION")))?;
    match repo.git_version() {
        Ok(version) => console.say(version)?,
        Err(e) => {
            tracing::debug!(error = %e, "git version unavailable");
            console.say("git: unavailable")?;
        }
    }
    Ok(Outcome::Success)
}

/// Run a mutating command, then close the operation with `Done.`.
fn execute_and_finish<S, R, W>(
    repo: &BranchRepo<S>,
    console: &mut Console<R, W>,
    command: &str,
) -> Result<Outcome>
where
    S: Shell,
    R: BufRead,
    W: Write,
{
    let status = repo.execute(command)?;
    console.say("Done.")?;
    if status.success() {
        Ok(Outcome::Success)
    } else {
        tracing::debug!(command, code = ?status.code, "command exited non-zero");
        Ok(Outcome::Fatal)
    }
}

fn cancelled<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome> {
    console.say("Cancelled.")?;
    Ok(Outcome::Cancelled)
}
