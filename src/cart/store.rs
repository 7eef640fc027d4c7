//! Cart Store Module
//!
//! Owns the cart's line items, enforces stock limits on every mutation, and
//! writes the full list through to storage after each change.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::cart::{
    decode_items, encode_items, is_valid_price, CartSummary, LineItem, Product, CART_STORAGE_KEY,
};
use crate::config::Config;
use crate::error::{CartError, Result, StorageError};
use crate::storage::{FileStorage, Storage};

// == Cart Store ==
/// Stock-aware shopping cart backed by a key-value storage.
///
/// Items keep the order in which they were first added. Every mutation that
/// changes the items overwrites the persisted copy before returning; reads
/// never touch storage.
#[derive(Debug)]
pub struct CartStore<S> {
    /// Line items in insertion order
    items: Vec<LineItem>,
    /// Persistence backend
    storage: S,
    /// Key the cart is persisted under
    key: String,
}

impl<S: Storage> CartStore<S> {
    // == Constructor ==
    /// Creates an empty cart persisted under the default `"cart"` key.
    ///
    /// The cart starts empty; call [`CartStore::hydrate`] to restore a
    /// previous session.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Creates an empty cart persisted under `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    // == Hydrate ==
    /// Replaces the in-memory items with the persisted list.
    ///
    /// Absent, unreadable, or malformed state leaves the current items as
    /// they are. Calling this repeatedly re-reads storage each time.
    pub fn hydrate(&mut self) {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no persisted cart");
                return;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read persisted cart");
                return;
            }
        };

        match decode_items(&raw) {
            Ok(items) => {
                info!(key = %self.key, lines = items.len(), "cart hydrated");
                self.items = items;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding persisted cart");
            }
        }
    }

    // == Add Item ==
    /// Adds one unit of `product`, bounded by `current_stock`.
    ///
    /// An existing line is incremented; a new product is appended with a
    /// quantity of 1. Returns the line's resulting quantity.
    ///
    /// # Errors
    /// * `OutOfStock` - the line already holds `current_stock` units, or the
    ///   product is new and `current_stock` is 0
    /// * `InvalidPrice` - the product's price is negative or above
    ///   `MAX_UNIT_PRICE`
    pub fn add_item(&mut self, product: &Product, current_stock: u32) -> Result<u32> {
        let quantity = match self.position(&product.id) {
            Some(index) => self.increment(index, current_stock)?,
            None => {
                if current_stock == 0 {
                    debug!(id = %product.id, "rejected add: product out of stock");
                    return Err(CartError::OutOfStock {
                        id: product.id.clone(),
                        quantity: 0,
                        stock: 0,
                    });
                }
                if !is_valid_price(product.price) {
                    return Err(CartError::InvalidPrice(product.id.clone()));
                }
                self.items.push(LineItem::from_product(product));
                1
            }
        };

        debug!(id = %product.id, quantity, "added item");
        self.persist();
        Ok(quantity)
    }

    // == Increase Quantity ==
    /// Adds one unit to an existing line, bounded by `max_stock`.
    ///
    /// Returns the line's resulting quantity.
    ///
    /// # Errors
    /// * `NotFound` - no line has this id
    /// * `OutOfStock` - the line already holds `max_stock` units
    pub fn increase_quantity(&mut self, id: &str, max_stock: u32) -> Result<u32> {
        let index = self
            .position(id)
            .ok_or_else(|| CartError::NotFound(id.to_string()))?;
        let quantity = self.increment(index, max_stock)?;

        debug!(id, quantity, "increased quantity");
        self.persist();
        Ok(quantity)
    }

    // == Decrease Quantity ==
    /// Removes one unit from a line, dropping the line when it reaches zero.
    ///
    /// Returns false, without writing, when no line has this id.
    pub fn decrease_quantity(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let item = &mut self.items[index];
        if item.quantity > 1 {
            item.quantity -= 1;
            debug!(id, quantity = item.quantity, "decreased quantity");
        } else {
            self.items.remove(index);
            debug!(id, "removed item at zero quantity");
        }

        self.persist();
        true
    }

    // == Remove Item ==
    /// Removes the line with this id. Storage is rewritten either way.
    ///
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;

        debug!(id, removed, "remove item");
        self.persist();
        removed
    }

    // == Clear ==
    /// Empties the cart and persists the empty list.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
        self.persist();
    }

    // == Count ==
    /// Total number of units across all lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    // == Total ==
    /// Sum of `price * quantity` across all lines, saturating at
    /// `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    // == Summary ==
    /// Snapshot of the cart's aggregates for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.items.len(), self.count(), self.total())
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the line with this id, if any.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if a line has this id.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key the cart is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persistence backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the cart, returning its backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn increment(&mut self, index: usize, stock: u32) -> Result<u32> {
        let item = &mut self.items[index];
        if item.quantity >= stock {
            debug!(id = %item.id, quantity = item.quantity, stock, "rejected increment");
            return Err(CartError::OutOfStock {
                id: item.id.clone(),
                quantity: item.quantity,
                stock,
            });
        }
        item.quantity += 1;
        Ok(item.quantity)
    }

    // A failed write keeps the in-memory change.
    fn persist(&mut self) {
        let result = encode_items(&self.items).and_then(|raw| self.storage.set(&self.key, raw));
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }
}

impl CartStore<FileStorage> {
    /// Creates a file-backed cart using the storage directory and key from
    /// the Config.
    ///
    /// # Errors
    /// * `StorageError::InvalidKey` - the configured key cannot name a file
    pub fn from_config(config: &Config) -> std::result::Result<Self, StorageError> {
        let storage = FileStorage::from_config(config);
        storage.path_for(&config.storage_key)?;
        Ok(Self::with_key(storage, config.storage_key.clone()))
    }
}
