//! Persisted cart encoding.
//!
//! The cart is stored as a JSON array of line items in cart order. Prices
//! are written as decimal strings; numeric prices are accepted on read.

use std::collections::HashSet;

use crate::cart::{is_valid_price, LineItem, MAX_UNIT_PRICE};
use crate::error::{CartError, Result, StorageError};

/// Encodes the full item list for storage.
pub fn encode_items(items: &[LineItem]) -> std::result::Result<String, StorageError> {
    Ok(serde_json::to_string(items)?)
}

/// Decodes and validates a persisted item list.
///
/// # Errors
///
/// Returns `CartError::MalformedPersistedState` if the payload is not a JSON
/// array of line items, or if any item has a zero quantity, a price outside
/// `0..=MAX_UNIT_PRICE`, or an id already seen earlier in the list.
pub fn decode_items(raw: &str) -> Result<Vec<LineItem>> {
    let items: Vec<LineItem> = serde_json::from_str(raw)
        .map_err(|e| CartError::MalformedPersistedState(e.to_string()))?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(CartError::MalformedPersistedState(format!(
                "item {} has zero quantity",
                item.id
            )));
        }
        if !is_valid_price(item.price) {
            return Err(CartError::MalformedPersistedState(format!(
                "item {} has price outside 0..={}",
                item.id, MAX_UNIT_PRICE
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CartError::MalformedPersistedState(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }

    Ok(items)
}
