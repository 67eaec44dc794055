//! JSON documents in the data directory.
//!
//! - `active.json`: present only while a timer is running or paused
//! - `entries.json`: the array of completed entries
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so a failed write leaves the previous document in place.

use super::TimerStore;
use crate::libs::entry::Entry;
use crate::libs::error::TimerError;
use crate::libs::timer::ActiveTimer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const ACTIVE_FILE_NAME: &str = "active.json";
pub const ENTRIES_FILE_NAME: &str = "entries.json";

#[derive(Debug, Clone)]
pub struct JsonStore {
    data_path: PathBuf,
}

impl JsonStore {
    /// Opens the store rooted at `data_path`, creating the directory if needed.
    pub fn new(data_path: impl Into<PathBuf>) -> Result<Self, TimerError> {
        let data_path = data_path.into();
        fs::create_dir_all(&data_path)?;
        Ok(Self { data_path })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn active_path(&self) -> PathBuf {
        self.data_path.join(ACTIVE_FILE_NAME)
    }

    pub fn entries_path(&self) -> PathBuf {
        self.data_path.join(ENTRIES_FILE_NAME)
    }
}

/// Reads and parses a document, `None` if the file does not exist.
fn read_document<T: DeserializeOwned>(path: &Path, document: &str) -> Result<Option<T>, TimerError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    // serde_json surfaces the TimerError raised by try_from conversions as a
    // message, so both syntax and invariant failures land here.
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| TimerError::malformed(document, format!("{} ({})", e, path.display())))
}

fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), TimerError> {
    let content = serde_json::to_string_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "document written");
    Ok(())
}

impl TimerStore for JsonStore {
    fn load_active(&self) -> Result<Option<ActiveTimer>, TimerError> {
        read_document(&self.active_path(), "active-timer document")
    }

    fn save_active(&self, timer: &ActiveTimer) -> Result<(), TimerError> {
        write_document(&self.active_path(), timer)
    }

    fn clear_active(&self) -> Result<(), TimerError> {
        match fs::remove_file(self.active_path()) {
            Ok(()) => {
                tracing::debug!("active timer cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load_entries(&self) -> Result<Vec<Entry>, TimerError> {
        Ok(read_document(&self.entries_path(), "entries document")?.unwrap_or_default())
    }

    fn save_entries(&self, entries: &[Entry]) -> Result<(), TimerError> {
        write_document(&self.entries_path(), entries)
    }
}
