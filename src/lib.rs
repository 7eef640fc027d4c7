//! Cart Store - Stock-aware shopping cart state
//!
//! Tracks the products a shopper intends to buy, bounds quantities by the
//! stock supplied on each call, and mirrors every change into a key-value
//! storage so the cart survives reloads.

pub mod cart;
pub mod config;
pub mod error;
pub mod format;
pub mod storage;

pub use cart::{CartStore, CartSummary, LineItem, Product};
pub use config::Config;
pub use error::{CartError, StorageError};
pub use format::format_currency;
pub use storage::{FileStorage, MemoryStorage, Storage};
