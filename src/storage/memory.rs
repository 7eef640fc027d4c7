//! Memory Storage Module
//!
//! In-process key-value backend with size limits and access statistics.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::StorageError;
use crate::storage::{
    Storage, StorageEntry, StorageStats, DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_VALUE_SIZE,
};

// == Memory Storage ==
/// HashMap-backed storage that lives as long as the process.
#[derive(Debug)]
pub struct MemoryStorage {
    /// Key-value storage
    entries: HashMap<String, StorageEntry>,
    /// Access statistics
    stats: StorageStats,
    /// Maximum key length in bytes
    max_key_length: usize,
    /// Maximum value size in bytes
    max_value_size: usize,
}

impl MemoryStorage {
    // == Constructor ==
    /// Creates an empty MemoryStorage with the default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_VALUE_SIZE)
    }

    /// Creates an empty MemoryStorage with explicit limits.
    ///
    /// # Arguments
    /// * `max_key_length` - Maximum key length in bytes
    /// * `max_value_size` - Maximum value size in bytes
    pub fn with_limits(max_key_length: usize, max_value_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: StorageStats::new(),
            max_key_length,
            max_value_size,
        }
    }

    /// Creates a MemoryStorage using the limits from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(config.max_key_length, config.max_value_size)
    }

    // == Entry ==
    /// Returns the raw entry for `key` without touching statistics.
    pub fn entry(&self, key: &str) -> Option<&StorageEntry> {
        self.entries.get(key)
    }

    // == Stats ==
    /// Returns current storage statistics.
    pub fn stats(&self) -> StorageStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
        }
        if key.len() > self.max_key_length {
            return Err(StorageError::InvalidKey(format!(
                "key exceeds maximum length of {} bytes",
                self.max_key_length
            )));
        }
        if value.len() > self.max_value_size {
            return Err(StorageError::ValueTooLarge {
                size: value.len(),
                limit: self.max_value_size,
            });
        }
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_read();
                Ok(Some(entry.value.clone()))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.validate(key, &value)?;

        match self.entries.get_mut(key) {
            Some(entry) => entry.overwrite(value),
            None => {
                self.entries.insert(key.to_string(), StorageEntry::new(value));
            }
        }

        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_removal();
            self.stats.set_total_entries(self.entries.len());
        }
        Ok(removed)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_new() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.len(), 0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_storage_set_and_get() {
        let mut storage = MemoryStorage::new();

        storage.set("cart", "[]".to_string()).unwrap();
        let value = storage.get("cart").unwrap();

        assert_eq!(value.as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_storage_get_absent() {
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.get("cart").unwrap(), None);
        assert_eq!(storage.stats().misses, 1);
    }

    #[test]
    fn test_storage_overwrite() {
        let mut storage = MemoryStorage::new();

        storage.set("cart", "[]".to_string()).unwrap();
        let created = storage.entry("cart").unwrap().created_at;
        storage.set("cart", r#"[{"id":"p1"}]"#.to_string()).unwrap();

        assert_eq!(storage.get("cart").unwrap().as_deref(), Some(r#"[{"id":"p1"}]"#));
        assert_eq!(storage.entry("cart").unwrap().created_at, created);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_storage_remove() {
        let mut storage = MemoryStorage::new();

        storage.set("cart", "[]".to_string()).unwrap();
        assert!(storage.remove("cart").unwrap());
        assert!(!storage.remove("cart").unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_storage_stats() {
        let mut storage = MemoryStorage::new();

        storage.set("cart", "[]".to_string()).unwrap();
        storage.get("cart").unwrap();
        storage.get("other").unwrap();

        let stats = storage.stats();
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.reads, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_storage_empty_key() {
        let mut storage = MemoryStorage::new();

        let result = storage.set("", "[]".to_string());
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_storage_key_too_long() {
        let mut storage = MemoryStorage::new();
        let long_key = "x".repeat(DEFAULT_MAX_KEY_LENGTH + 1);

        let result = storage.set(&long_key, "[]".to_string());
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_storage_value_too_large() {
        let mut storage = MemoryStorage::with_limits(16, 8);

        let result = storage.set("cart", "x".repeat(9));
        assert!(matches!(
            result,
            Err(StorageError::ValueTooLarge { size: 9, limit: 8 })
        ));
        assert!(storage.is_empty());
        assert_eq!(storage.stats().writes, 0);
    }
}
