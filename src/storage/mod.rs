//! Storage Module
//!
//! Key-value persistence backends the cart writes through.
//!
//! A backend only has to hold opaque string values under string keys; the
//! cart owns the encoding of what it stores.

mod entry;
mod file;
mod memory;
mod stats;

pub use entry::StorageEntry;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use stats::StorageStats;

use crate::error::StorageError;

// == Public Constants ==
/// Default maximum key length in bytes
pub const DEFAULT_MAX_KEY_LENGTH: usize = 256;

/// Default maximum value size in bytes
pub const DEFAULT_MAX_VALUE_SIZE: usize = 5 * 1024 * 1024; // 5 MiB

// == Storage Trait ==
/// A synchronous string key-value store.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        (**self).remove(key)
    }
}
