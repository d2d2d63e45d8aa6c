//! Running external commands.
//!
//! Commands are passed around as complete command lines. A line is split
//! with POSIX shell rules and the program is spawned directly, so quoting
//! is honored but nothing is expanded by an intermediate shell. Use
//! [`quote`] for every interpolated value.

mod error;
#[cfg(test)]
pub mod mock;

use std::borrow::Cow;
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub use error::{Result, ShellError};

/// Exit status of a command run with [`Shell::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CallStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Shell {
    /// Run a command line and return everything it wrote to stdout.
    ///
    /// stderr goes straight to the terminal. A non-zero exit is reported as
    /// [`ShellError::CommandFailed`].
    fn run(&self, command_line: &str) -> Result<String>;

    /// Run a command line attached to the terminal and report how it exited.
    ///
    /// A non-zero exit is not an error here; callers decide what it means.
    fn call(&self, command_line: &str) -> Result<CallStatus>;
}

impl<S: Shell + ?Sized> Shell for &S {
    fn run(&self, command_line: &str) -> Result<String> {
        (**self).run(command_line)
    }

    fn call(&self, command_line: &str) -> Result<CallStatus> {
        (**self).call(command_line)
    }
}

/// Quote a single argument for inclusion in a command line.
pub fn quote(arg: &str) -> Result<Cow<'_, str>> {
    shlex::try_quote(arg).map_err(|_| ShellError::Quote(arg.to_string()))
}

/// Split a command line into its program and arguments.
pub fn split_command_line(command_line: &str) -> Result<(String, Vec<String>)> {
    let mut words = shlex::split(command_line)
        .filter(|words| !words.is_empty())
        .ok_or_else(|| ShellError::InvalidCommandLine(command_line.to_string()))?;
    let program = words.remove(0);
    Ok((program, words))
}

/// [`Shell`] backed by real processes.
#[derive(Debug, Clone, Default)]
pub struct SystemShell {
    current_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl SystemShell {
    /// Run commands in the process's working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands in `dir` instead of the process's working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: Some(dir.into()),
            envs: Vec::new(),
        }
    }

    /// Set an extra environment variable for every spawned command.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    fn command(&self, command_line: &str) -> Result<Command> {
        let (program, args) = split_command_line(command_line)?;
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        Ok(command)
    }
}

impl Shell for SystemShell {
    fn run(&self, command_line: &str) -> Result<String> {
        tracing::debug!(command = command_line, "running");
        let output = self
            .command(command_line)?
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ShellError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            tracing::debug!(command = command_line, status = ?output.status, "command failed");
            Err(ShellError::CommandFailed {
                command: command_line.to_string(),
                code: output.status.code(),
            })
        }
    }

    fn call(&self, command_line: &str) -> Result<CallStatus> {
        tracing::debug!(command = command_line, "calling");
        let status = self
            .command(command_line)?
            .status()
            .map_err(|source| ShellError::Spawn {
                command: command_line.to_string(),
                source,
            })?;
        tracing::debug!(command = command_line, ?status, "finished");
        Ok(CallStatus {
            code: status.code(),
        })
    }
}
