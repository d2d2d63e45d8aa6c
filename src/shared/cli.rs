//! Single-verb command lines.
//!
//! The helpers take exactly one verb. A missing or unknown verb is not an
//! error: the caller prints its command listing and exits cleanly.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser};

use crate::prompt::{self, Console};

/// Result of reading the process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation<V> {
    Verb(V),
    Missing,
    Unrecognized,
}

/// Parse `args` (including the program name) with the clap parser `C`.
pub fn parse_invocation<C, V, I, T>(args: I, verb_of: impl FnOnce(C) -> Option<V>) -> Invocation<V>
where
    C: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match C::try_parse_from(args) {
        Ok(cli) => verb_of(cli).map_or(Invocation::Missing, Invocation::Verb),
        Err(e) => {
            tracing::debug!(error = %e, "unrecognized arguments");
            Invocation::Unrecognized
        }
    }
}

/// Print `Supported commands:` followed by each subcommand of `C` and its
/// one-line description.
pub fn write_command_listing<C, R, W>(console: &mut Console<R, W>) -> prompt::Result<()>
where
    C: CommandFactory,
    R: BufRead,
    W: Write,
{
    console.say("Supported commands:")?;
    let command = C::command();
    for sub in command.get_subcommands() {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        console.say(format_args!("\t {} - {}", sub.get_name(), about))?;
    }
    Ok(())
}
