//! Centralized reader for DEVKIT_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const LOG: &str = "DEVKIT_LOG";
const HOSTS_FILE: &str = "DEVKIT_HOSTS_FILE";

/// Snapshot of all DEVKIT_* environment variables at load time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// `tracing` filter directive, e.g. "debug" or "devkit=trace".
    pub log: Option<String>,

    /// Path of the host registry file, overriding config and default.
    pub hosts_file: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all DEVKIT_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            log: non_empty_var(LOG),
            hosts_file: non_empty_var(HOSTS_FILE),
        }
    }
}
