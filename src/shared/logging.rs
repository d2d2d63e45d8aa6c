//! Diagnostic logging to stderr.
//!
//! stdout carries the interactive conversation, so log lines never go there.

use tracing_subscriber::EnvFilter;

use super::env_var::EnvVars;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `DEVKIT_LOG`, falling back to warnings only when
/// the variable is unset or not a valid directive.
pub fn env_filter(env: &EnvVars) -> EnvFilter {
    env.log
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(env: &EnvVars) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(env))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
