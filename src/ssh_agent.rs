//! Rewrite the `sh` output of `ssh-agent -s` as a Windows batch file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use lazy_regex::regex_captures;
use thiserror::Error;

pub const AUTH_SOCK: &str = "SSH_AUTH_SOCK";
pub const AGENT_PID: &str = "SSH_AGENT_PID";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} not found in agent output")]
    MissingVariable(&'static str),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert an ssh-agent environment dump into a batch file.
#[derive(Parser, Debug)]
#[command(name = "ssh-agent-bat", version)]
pub struct ConvertArgs {
    /// File written by `ssh-agent -s`
    pub input: PathBuf,

    /// Where to write the batch file (default: overwrite the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEnv {
    pub auth_sock: String,
    pub agent_pid: String,
}

/// Extract both agent variables. A value runs from `=` to the next `;`.
pub fn parse_agent_env(content: &str) -> Result<AgentEnv> {
    let (_, auth_sock) = regex_captures!(r"(?m)(?:^|[\s;])SSH_AUTH_SOCK=([^;\n]+);", content)
        .ok_or(ConvertError::MissingVariable(AUTH_SOCK))?;
    let (_, agent_pid) = regex_captures!(r"(?m)(?:^|[\s;])SSH_AGENT_PID=([^;\n]+);", content)
        .ok_or(ConvertError::MissingVariable(AGENT_PID))?;

    Ok(AgentEnv {
        auth_sock: auth_sock.to_string(),
        agent_pid: agent_pid.to_string(),
    })
}

/// `set` lines with CRLF endings, socket first.
pub fn render_batch(env: &AgentEnv) -> String {
    format!(
        "set {AUTH_SOCK}={}\r\nset {AGENT_PID}={}\r\n",
        env.auth_sock, env.agent_pid
    )
}

/// Read `input`, convert, and write the result to `output`.
/// Nothing is written when the input lacks a variable.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let env = parse_agent_env(&content)?;
    tracing::debug!(?env, "parsed agent environment");

    fs::write(output, render_batch(&env)).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Run the converter and return the path written.
pub fn run(args: &ConvertArgs) -> Result<PathBuf> {
    let output = args.output.clone().unwrap_or_else(|| args.input.clone());
    convert_file(&args.input, &output)?;
    Ok(output)
}
