//! Configuration Module
//!
//! Handles loading cart storage configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cart::CART_STORAGE_KEY;
use crate::storage::{DEFAULT_MAX_KEY_LENGTH, DEFAULT_MAX_VALUE_SIZE};

/// Default directory for the file-backed storage.
pub const DEFAULT_STORAGE_DIR: &str = ".cart";

/// Cart storage configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key the cart is persisted under
    pub storage_key: String,
    /// Directory holding file-backed storage entries
    pub storage_dir: PathBuf,
    /// Maximum key length in bytes for in-memory storage
    pub max_key_length: usize,
    /// Maximum value size in bytes for in-memory storage
    pub max_value_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CART_STORAGE_KEY` - Persistence key (default: "cart")
    /// - `CART_STORAGE_DIR` - File storage directory (default: ".cart")
    /// - `CART_MAX_KEY_LENGTH` - Key length limit in bytes (default: 256)
    /// - `CART_MAX_VALUE_SIZE` - Value size limit in bytes (default: 5 MiB)
    pub fn from_env() -> Self {
        Self {
            storage_key: env::var("CART_STORAGE_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| CART_STORAGE_KEY.to_string()),
            storage_dir: env::var("CART_STORAGE_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
            max_key_length: env::var("CART_MAX_KEY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_KEY_LENGTH),
            max_value_size: env::var("CART_MAX_VALUE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_VALUE_SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
        }
    }
}
