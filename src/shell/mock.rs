//! Scripted shell for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{CallStatus, Result, Shell, ShellError};

/// Exit code reported for command lines that were never scripted.
pub const UNSCRIPTED_EXIT_CODE: i32 = 127;

/// Answers `run` with canned stdout per command line and records every
/// command line it receives, in order.
#[derive(Default)]
pub struct ScriptedShell {
    outputs: HashMap<String, std::result::Result<String, i32>>,
    call_codes: HashMap<String, i32>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the stdout of a successful `run`.
    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Script a `run` that exits with `code`.
    pub fn with_failure(mut self, command_line: &str, code: i32) -> Self {
        self.outputs.insert(command_line.to_string(), Err(code));
        self
    }

    /// Script the exit code of a `call`. Unscripted calls exit with 0.
    pub fn with_call_code(mut self, command_line: &str, code: i32) -> Self {
        self.call_codes.insert(command_line.to_string(), code);
        self
    }

    /// Every command line received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many received command lines start with `prefix`.
    pub fn count_calls_starting_with(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }

    fn record(&self, command_line: &str) {
        self.calls.lock().unwrap().push(command_line.to_string());
    }
}

impl Shell for ScriptedShell {
    fn run(&self, command_line: &str) -> Result<String> {
        self.record(command_line);
        match self.outputs.get(command_line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(code)) => Err(ShellError::CommandFailed {
                command: command_line.to_string(),
                code: Some(*code),
            }),
            None => Err(ShellError::CommandFailed {
                command: command_line.to_string(),
                code: Some(UNSCRIPTED_EXIT_CODE),
            }),
        }
    }

    fn call(&self, command_line: &str) -> Result<CallStatus> {
        self.record(command_line);
        let code = self.call_codes.get(command_line).copied().unwrap_or(0);
        Ok(CallStatus { code: Some(code) })
    }
}
