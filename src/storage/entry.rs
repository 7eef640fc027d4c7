//! Storage Entry Module
//!
//! Defines a single stored value with its write metadata.

use chrono::{DateTime, Utc};

// == Storage Entry ==
/// Represents a single stored value with write timestamps.
#[derive(Debug, Clone)]
pub struct StorageEntry {
    /// The stored value
    pub value: String,
    /// When the key was first written
    pub created_at: DateTime<Utc>,
    /// When the value was last overwritten
    pub updated_at: DateTime<Utc>,
}

impl StorageEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: String) -> Self {
        let now = Utc::now();
        Self {
            value,
            created_at: now,
            updated_at: now,
        }
    }

    // == Overwrite ==
    /// Replaces the value, keeping `created_at` and bumping `updated_at`.
    pub fn overwrite(&mut self, value: String) {
        self.value = value;
        self.updated_at = Utc::now();
    }
}
