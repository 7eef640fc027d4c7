//! File-backed storage.
//!
//! Each key is stored as its own file at `<dir>/<key>.json`. Writes are
//! atomic via a temp-rename pattern so a crash mid-write never leaves a
//! truncated value behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::StorageError;
use crate::storage::Storage;

/// Directory-backed storage surviving process restarts.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage rooted at `dir`. The directory is created on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a FileStorage rooted at the configured directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.storage_dir.clone())
    }

    /// Root directory of this storage.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Compute the filesystem path for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` unless the key is non-empty and made
    /// only of ASCII letters, digits, `_` and `-`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value.as_bytes())?;
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "wrote storage entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
