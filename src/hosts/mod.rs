//! `sshext`: a small registry of remote hosts addressed by nickname.

mod commands;
mod error;
pub mod registry;


use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

pub use error::{RegistryError, Result, SshExtError};
pub use registry::{HostEntry, HostRegistry};

use crate::prompt::{Console, PromptError};
use crate::shared::cli::{Invocation, parse_invocation, write_command_listing};
use crate::shared::config::{HostsConfig, load_config_when};
use crate::shared::dirs::expand_home;
use crate::shared::env_var::EnvVars;
use crate::shared::outcome::Outcome;
use crate::shell::{Shell, SystemShell};

pub const TOOL_NAME: &str = "sshext";

/// Registry file name used when neither the environment nor config names one.
pub const DEFAULT_REGISTRY_FILE: &str = ".hostslist.txt";

#[derive(Parser)]
#[command(
    name = "sshext",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub verb: Option<Verb>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Verb {
    /// Register a host (IP address or hostname) for SSH or SCP
    Register,

    /// List all registered hosts
    List,

    /// Connect to a host
    Connect {
        /// Nickname of the host; prompts for a selection when omitted
        nickname: Option<String>,
    },

    /// Show supported commands
    Help,

    /// Show version information
    Version,
}

/// Where the registry lives and how hosts are reached.
pub struct HostTool<S> {
    pub shell: S,
    pub registry_path: PathBuf,
    pub connect_command: String,
}

/// Entry point for the `sshext` binary.
pub fn main_with_args<I, T>(args: I, env: &EnvVars) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = parse_invocation(args, |cli: Cli| cli.verb);
    let registry_verb = needs_registry(&invocation);

    let config = match load_config_when(registry_verb) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let registry_path = match resolve_registry_path(&config.hosts, env) {
        Ok(path) => path,
        Err(e) if registry_verb => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        Err(_) => PathBuf::from(DEFAULT_REGISTRY_FILE),
    };
    tracing::debug!(path = %registry_path.display(), "using host registry");

    let tool = HostTool {
        shell: SystemShell::new(),
        registry_path,
        connect_command: config.hosts.connect_command,
    };
    let mut console = Console::stdio();
    dispatch(invocation, &tool, &mut console).into()
}

/// Only the registry verbs read config and locate the registry file.
fn needs_registry(invocation: &Invocation<Verb>) -> bool {
    matches!(
        invocation,
        Invocation::Verb(Verb::Register | Verb::List | Verb::Connect { .. })
    )
}

/// Pick the registry file: `DEVKIT_HOSTS_FILE`, then config, then
/// [`DEFAULT_REGISTRY_FILE`] next to the executable.
pub fn resolve_registry_path(
    config: &HostsConfig,
    env: &EnvVars,
) -> std::result::Result<PathBuf, RegistryError> {
    if let Some(path) = &env.hosts_file {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = &config.registry_path {
        return Ok(expand_home(path));
    }

    let exe = std::env::current_exe().map_err(|e| RegistryError::Location(e.to_string()))?;
    let dir = exe
        .parent()
        .ok_or_else(|| RegistryError::Location(format!("{} has no parent", exe.display())))?;
    Ok(dir.join(DEFAULT_REGISTRY_FILE))
}

/// Run one invocation to completion and report how it ended.
pub fn dispatch<S, R, W>(
    invocation: Invocation<Verb>,
    tool: &HostTool<S>,
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
            .map_err(SshExtError::from)
            .and_then(|()| print_help(console)),
        Invocation::Verb(verb) => {
            tracing::debug!(?verb, "dispatching");
            match verb {
                Verb::Register => commands::register(tool, console),
                Verb::List => commands::list(tool, console),
                Verb::Connect { nickname } => commands::connect(tool, console, nickname.as_deref()),
                Verb::Help => print_help(console),
                Verb::Version => print_version(console),
            }
        }
    };
    settle(result, console)
}

fn settle<R: BufRead, W: Write>(result: Result<Outcome>, console: &mut Console<R, W>) -> Outcome {
    match result {
        Ok(outcome) => outcome,
        Err(SshExtError::Prompt(PromptError::InputClosed)) => {
            console.say("").ok();
            console.say("Cancelled.").ok();
            Outcome::Cancelled
        }
        Err(SshExtError::Shell(e)) => {
            if !e.is_command_failure() {
                eprintln!("Error: {e}");
            }
            tracing::debug!(error = %e, "command failed");
            console.say("Done.").ok();
            Outcome::Fatal
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Outcome::Fatal
        }
    }
}

fn print_help<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome> {
    write_command_listing::<Cli, _, _>(console)?;
    Ok(Outcome::Success)
}

fn print_version<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome> {
    console.say(format_args!("{TOOL_NAME} {}", env!("CARGO_PKG_VERSION")))?;
    Ok(Outcome::Success)
}
