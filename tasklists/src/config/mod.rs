//! Layered configuration.
//!
//! Each layer overrides the one below it:
//! compiled defaults, then `config.toml`, then environment variables and
//! command-line flags (clap reads both into [`CliArgs`]).

mod file;

use std::path::PathBuf;
use std::time::Duration;

use crate::presentation::PLACEHOLDER_HEADER;
use crate::storage::DEFAULT_KEY;

use file::ConfigFile;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read, or an explicit
    /// `--config` path does not exist.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Settings the binary runs with once every layer is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory the `FileStore` writes to.
    pub data_dir: PathBuf,
    /// Key the collection is stored under.
    pub storage_key: String,
    /// How long the event loop waits for a key before redrawing.
    pub poll_timeout: Duration,
    /// Header shown while no list is selected.
    pub placeholder: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("tasklists"),
            storage_key: DEFAULT_KEY.to_string(),
            poll_timeout: Duration::from_millis(50),
            placeholder: PLACEHOLDER_HEADER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds the configuration for `cli`, reading the config file it names
    /// or the default one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = ConfigFile::read(cli.config.as_deref())?;
        Ok(Self::default().with_file(file).with_cli(cli))
    }

    fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(dir) = file.storage.data_dir {
            self.data_dir = dir;
        }
        if let Some(key) = file.storage.key {
            self.storage_key = key;
        }
        if let Some(ms) = file.ui.poll_timeout_ms {
            self.poll_timeout = Duration::from_millis(ms);
        }
        if let Some(placeholder) = file.ui.placeholder {
            self.placeholder = placeholder;
        }
        self
    }

    fn with_cli(mut self, cli: &CliArgs) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir.clone_from(dir);
        }
        if let Some(key) = &cli.storage_key {
            self.storage_key.clone_from(key);
        }
        self
    }
}

/// Command-line flags. Flags with an `env` name also read that variable.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal-native multi-list to-do manager")]
pub struct CliArgs {
    /// Directory holding the stored lists.
    #[arg(long, env = "TASKLISTS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key the lists are stored under (file name without extension).
    #[arg(long, env = "TASKLISTS_KEY")]
    pub storage_key: Option<String>,

    /// Config file to read instead of `~/.config/tasklists/config.toml`.
    #[arg(short, long, env = "TASKLISTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tasklists=trace`.
    #[arg(long, default_value = "info", env = "TASKLISTS_LOG")]
    pub log_level: String,

    /// Log file (default: `$TMPDIR/tasklists.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
