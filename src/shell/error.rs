use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("'{command}' exited with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid command line: {0:?}")]
    InvalidCommandLine(String),

    #[error("cannot quote argument {0:?}")]
    Quote(String),
}

impl ShellError {
    /// True when the external program ran and reported failure itself.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Self::CommandFailed { .. })
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
