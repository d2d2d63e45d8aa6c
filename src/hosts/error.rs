use std::path::PathBuf;

use thiserror::Error;

use crate::prompt::PromptError;
use crate::shell::ShellError;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read host registry {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write host registry {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed entry in {path} on line {line}: expected <nickname>=<hostname>")]
    Malformed { path: PathBuf, line: usize },

    #[error("Nickname '{0}' is already registered")]
    DuplicateNickname(String),

    #[error("Invalid nickname {0:?}: must be non-empty without '=' or line breaks")]
    InvalidNickname(String),

    #[error("Invalid hostname {0:?}: must be non-empty without line breaks")]
    InvalidHostname(String),

    #[error("Cannot locate the host registry: {0}")]
    Location(String),
}

#[derive(Error, Debug)]
pub enum SshExtError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("No host registered as '{0}'")]
    UnknownNickname(String),

    #[error("Connect command '{0}' was not found")]
    ClientNotFound(String),
}

pub type Result<T> = std::result::Result<T, SshExtError>;
