//! Error types for the cart store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cart Error Enum ==
/// Outcome of a rejected cart operation.
///
/// Stock and lookup failures are expected conditions the presentation layer
/// turns into a user-facing message; none of them change the cart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Requested increment exceeds the supplied stock
    #[error("Out of stock: {id} (in cart: {quantity}, stock: {stock})")]
    OutOfStock {
        id: String,
        quantity: u32,
        stock: u32,
    },

    /// No line item with this id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Product carries a negative unit price
    #[error("Invalid price for product: {0}")]
    InvalidPrice(String),

    /// Persisted payload failed to parse or validate
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),
}

impl CartError {
    /// Returns true for the `OutOfStock` variant.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }
}

// == Storage Error Enum ==
/// Failures raised by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key is empty, too long, or contains characters the backend rejects
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Value exceeds the backend's size limit
    #[error("Value too large: {size} bytes (limit {limit})")]
    ValueTooLarge { size: usize, limit: usize },

    /// Underlying filesystem failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_message() {
        let err = CartError::OutOfStock {
            id: "p1".to_string(),
            quantity: 3,
            stock: 3,
        };
        assert!(err.is_out_of_stock());
        assert_eq!(err.to_string(), "Out of stock: p1 (in cart: 3, stock: 3)");
    }

    #[test]
    fn test_not_found_is_distinct() {
        let err = CartError::NotFound("p9".to_string());
        assert!(!err.is_out_of_stock());
        assert_eq!(err.to_string(), "Item not found: p9");
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
