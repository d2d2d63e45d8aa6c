use std::process::ExitCode;

/// How a single verb ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Cancelled,
    /// An external command failed or the operation could not continue.
    Fatal,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success | Outcome::Cancelled => ExitCode::SUCCESS,
            Outcome::Fatal => ExitCode::FAILURE,
        }
    }
}
