//! Configuration management for the timer application.
//!
//! The configuration lives in `~/.timer/config.json` and holds a single key:
//!
//! ```json
//! { "data_path": "/home/user/.timer/data" }
//! ```
//!
//! `data_path` is where the active-timer and entries documents are stored.
//! When it is not set, the data directory defaults to `~/.timer/data`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timer::libs::config::Config;
//! use timer::libs::data_storage::DataStorage;
//!
//! let storage = DataStorage::new();
//! let config = Config::read_from(&storage)?;
//! println!("Data path: {}", config.data_path(&storage).display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::{home_dir, DataStorage};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Data directory name used when no `data_path` is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Root configuration object.
///
/// Unset keys are omitted from the saved file, keeping it minimal.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Directory holding `active.json` and `entries.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the user's home directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`.
    ///
    /// A missing file yields the default configuration. A file that exists
    /// but cannot be parsed is an error.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::debug!(path = %config_file_path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %config_file_path.display(), "configuration saved");
        Ok(())
    }

    /// The configured data directory, or the default one under `storage`.
    pub fn data_path(&self, storage: &DataStorage) -> PathBuf {
        self.data_path.clone().unwrap_or_else(|| storage.base_path().join(DEFAULT_DATA_DIR))
    }

    /// Sets the data directory and saves the configuration.
    ///
    /// A leading `~` is expanded to the home directory and relative paths are
    /// made absolute. The directory is created if it does not exist.
    ///
    /// # Returns
    ///
    /// The resolved absolute data path.
    pub fn set_data_path(&mut self, storage: &DataStorage, path: &str) -> Result<PathBuf> {
        let expanded = expand_home(path, &home_dir());
        fs::create_dir_all(&expanded)?;
        let resolved = fs::canonicalize(&expanded)?;

        self.data_path = Some(resolved.clone());
        self.save_to(storage)?;
        Ok(resolved)
    }
}

/// Replaces a leading `~` with `home`.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
