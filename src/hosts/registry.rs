//! Nickname → hostname registry persisted as a flat text file.
//!
//! One entry per line, `<nickname>=<hostname>`, in insertion order. The
//! file is read whole and rewritten whole; there is no locking.

use std::fs;
use std::path::Path;

use super::error::RegistryError;

pub const SEPARATOR: char = '=';

type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub nickname: String,
    pub hostname: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostRegistry {
    entries: Vec<HostEntry>,
}

impl HostRegistry {
    /// Load the registry at `path`. A missing file is an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no registry file yet");
                Ok(Self::default())
            }
            Err(source) => Err(RegistryError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse registry file content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut registry = Self::default();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || RegistryError::Malformed {
                path: path.to_path_buf(),
                line: index + 1,
            };
            let (nickname, hostname) = line.split_once(SEPARATOR).ok_or_else(malformed)?;
            if nickname.is_empty() || hostname.is_empty() {
                return Err(malformed());
            }
            registry.insert(nickname, hostname)?;
        }
        Ok(registry)
    }

    /// Rewrite the file at `path` with every entry, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_error = |source| RegistryError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, self.render()).map_err(write_error)?;
        tracing::debug!(path = %path.display(), entries = self.len(), "registry saved");
        Ok(())
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}{SEPARATOR}{}\n", e.nickname, e.hostname))
            .collect()
    }

    /// Append an entry. Nicknames are unique.
    pub fn insert(&mut self, nickname: &str, hostname: &str) -> Result<()> {
        if nickname.is_empty() || nickname.contains([SEPARATOR, '\n', '\r']) {
            return Err(RegistryError::InvalidNickname(nickname.to_string()));
        }
        if hostname.is_empty() || hostname.contains(['\n', '\r']) {
            return Err(RegistryError::InvalidHostname(hostname.to_string()));
        }
        if self.get_by_nickname(nickname).is_some() {
            return Err(RegistryError::DuplicateNickname(nickname.to_string()));
        }

        self.entries.push(HostEntry {
            nickname: nickname.to_string(),
            hostname: hostname.to_string(),
        });
        Ok(())
    }

    pub fn get_by_nickname(&self, nickname: &str) -> Option<&HostEntry> {
        self.entries.iter().find(|e| e.nickname == nickname)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&HostEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
