use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".timer";

/// The user's home directory, or the working directory if it is unknown.
pub fn home_dir() -> PathBuf {
    let home = if cfg!(windows) {
        var("USERPROFILE").or_else(|_| var("HOME"))
    } else {
        var("HOME")
    };
    PathBuf::from(home.unwrap_or_else(|_| ".".into()))
}

/// Locates the application directory under the user's home directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        Self::with_base_path(home_dir().join(APP_DIR))
    }

    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the application directory, which is created
    /// if it does not exist yet.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
