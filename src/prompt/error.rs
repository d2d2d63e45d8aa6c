use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PromptError>;
