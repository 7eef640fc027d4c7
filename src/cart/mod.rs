//! Cart Module
//!
//! Provides the stock-aware cart store and its persisted encoding.

mod codec;
mod item;
mod store;
mod summary;


// Re-export public types
pub use codec::{decode_items, encode_items};
pub use item::{is_valid_price, LineItem, Product, MAX_UNIT_PRICE};
pub use store::CartStore;
pub use summary::CartSummary;

// == Public Constants ==
/// Storage key the cart is persisted under
pub const CART_STORAGE_KEY: &str = "cart";
