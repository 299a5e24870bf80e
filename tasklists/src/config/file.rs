//! The optional TOML config file.

use std::path::{Path, PathBuf};

use super::ConfigError;

/// Parsed `config.toml`. Every field is optional; absent fields keep
/// whatever the lower layer set.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ConfigFile {
    pub(super) storage: StorageSection,
    pub(super) ui: UiSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct StorageSection {
    pub(super) data_dir: Option<PathBuf>,
    pub(super) key: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct UiSection {
    pub(super) poll_timeout_ms: Option<u64>,
    pub(super) placeholder: Option<String>,
}

impl ConfigFile {
    /// Reads the file at `explicit`, which must exist, or else the default
    /// location, where a missing file counts as empty.
    pub(super) fn read(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::parse_at(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::parse_at(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn parse_at(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file = toml::from_str(&text)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(file)
    }
}

/// `~/.config/tasklists/config.toml` on Linux, the platform equivalent
/// elsewhere.
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklists").join("config.toml"))
}
