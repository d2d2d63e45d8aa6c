use thiserror::Error;

use crate::prompt::PromptError;
use crate::shell::ShellError;

#[derive(Error, Debug)]
pub enum GitExtError {
    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

pub type Result<T> = std::result::Result<T, GitExtError>;
