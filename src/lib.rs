pub mod git;
pub mod gitext;
pub mod hosts;
pub mod prompt;
pub mod shared;
pub mod shell;
pub mod ssh_agent;

#[cfg(test)]
mod testing;
