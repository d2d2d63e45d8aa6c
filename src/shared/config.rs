use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::dirs;
use crate::git::DEFAULT_REMOTE;

/// Top-level configuration for devkit.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch helper settings.
    #[serde(default)]
    pub git: GitConfig,

    /// Host registry settings.
    #[serde(default)]
    pub hosts: HostsConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Remote used by pushremote and pullremote (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HostsConfig {
    /// Registry file. `~/` is expanded. Defaults to `.hostslist.txt`
    /// next to the executable.
    #[serde(default)]
    pub registry_path: Option<String>,

    /// Command line the hostname is appended to by `connect` (default: "ssh").
    #[serde(default = "default_connect_command")]
    pub connect_command: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            registry_path: None,
            connect_command: default_connect_command(),
        }
    }
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

fn default_connect_command() -> String {
    "ssh".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/devkit/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir.join("devkit"))
}

/// Like [`load_config`], but only touches the file when `needed`.
/// Invocations that never read settings run on `Config::default()`.
pub fn load_config_when(needed: bool) -> anyhow::Result<Config> {
    if needed {
        load_config()
    } else {
        Ok(Config::default())
    }
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading config");
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    // An empty file is a valid "everything default" config.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}
