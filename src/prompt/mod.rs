//! Line-based interaction with the user.
//!
//! [`Console`] reads answers from any [`BufRead`] and writes to any
//! [`Write`], so the prompt loops run the same against a terminal and
//! against in-memory buffers.

mod error;

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use lazy_regex::regex_is_match;

pub use error::{PromptError, Result};

/// Typing this at a selection prompt cancels it.
pub const CANCEL_SENTINEL: &str = "q";

/// Outcome of [`Console::select_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen { index: usize, value: String },
    Cancelled,
}

impl Selection {
    pub fn chosen(&self) -> Option<&str> {
        match self {
            Self::Chosen { value, .. } => Some(value),
            Self::Cancelled => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` and read one line of free text, without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like [`ask`](Self::ask), but asks again until the answer is not blank.
    /// The answer is returned trimmed.
    pub fn ask_non_empty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            self.say("Value cannot be empty.")?;
        }
    }

    /// Show `options` numbered from 0 and let the user pick one.
    ///
    /// Asks again on anything that is not a valid index or the cancel
    /// sentinel. An empty option list is cancelled without prompting.
    pub fn select_from<T: AsRef<str>>(&mut self, options: &[T], title: &str) -> Result<Selection> {
        if options.is_empty() {
            self.say("Nothing to select.")?;
            return Ok(Selection::Cancelled);
        }

        self.say(title)?;
        for (index, option) in options.iter().enumerate() {
            self.say(format_args!("\t{index}: {}", option.as_ref()))?;
        }

        loop {
            let answer = self.ask("\nSelect (q to cancel): ")?.to_lowercase();
            if answer == CANCEL_SENTINEL {
                return Ok(Selection::Cancelled);
            }

            let answer = answer.trim();
            let index = match answer.parse::<i64>() {
                Ok(index) => usize::try_from(index).ok(),
                // Integers too wide for i64 are still integers
                Err(_) if regex_is_match!(r"^[+-]?[0-9]+$", answer) => None,
                Err(_) => {
                    self.say("Invalid selection.")?;
                    continue;
                }
            };

            match index.and_then(|i| options.get(i).map(|o| (i, o))) {
                Some((index, option)) => {
                    return Ok(Selection::Chosen {
                        index,
                        value: option.as_ref().to_string(),
                    });
                }
                None => self.say("Selection out of range.")?,
            }
        }
    }

    /// Ask a yes/no question until the answer is `y` or `n`.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid input.")?,
            }
        }
    }
}
