//! Line Item Module
//!
//! Defines catalog products and the cart entries built from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name reserved for the line item's own quantity.
const QUANTITY_FIELD: &str = "quantity";

/// Largest accepted unit price. Keeps `price * quantity` for any `u32`
/// quantity well inside `Decimal`'s range.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Returns true if `price` is within `0..=MAX_UNIT_PRICE`.
pub fn is_valid_price(price: Decimal) -> bool {
    (!price.is_sign_negative() || price.is_zero()) && price <= MAX_UNIT_PRICE
}

// == Product ==
/// A catalog product as supplied by the caller.
///
/// Stock is not part of the descriptor; every cart mutation receives the
/// current stock figure separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, unique within the cart
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Any other catalog fields, carried through unchanged
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    // == Constructor ==
    /// Creates a product with no extra attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            attributes: Map::new(),
        }
    }

    /// Adds a passthrough attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

// == Line Item ==
/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within the cart
    pub id: String,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Decimal,
    /// Units in the cart, always at least 1
    pub quantity: u32,
    /// Passthrough product fields
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    // == From Product ==
    /// Creates a line item holding a single unit of `product`.
    pub fn from_product(product: &Product) -> Self {
        let mut attributes = product.attributes.clone();
        attributes.remove(QUANTITY_FIELD);

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            attributes,
        }
    }

    // == Subtotal ==
    /// Returns `price * quantity`, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_product_starts_at_one() {
        let product = Product::new("p1", "Kopi Gayo", Decimal::from(10_000))
            .with_attribute("image", "/img/gayo.jpg");
        let item = LineItem::from_product(&product);

        assert_eq!(item.id, "p1");
        assert_eq!(item.name, "Kopi Gayo");
        assert_eq!(item.price, Decimal::from(10_000));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.attributes["image"], json!("/img/gayo.jpg"));
    }

    #[test]
    fn test_from_product_drops_foreign_quantity() {
        let product = Product::new("p1", "Kopi Gayo", Decimal::from(10_000))
            .with_attribute("quantity", 7);
        let item = LineItem::from_product(&product);

        assert_eq!(item.quantity, 1);
        assert!(!item.attributes.contains_key("quantity"));
    }

    #[test]
    fn test_subtotal() {
        let mut item = LineItem::from_product(&Product::new("p2", "Teh", Decimal::new(5_250, 1)));
        item.quantity = 4;

        assert_eq!(item.subtotal(), Decimal::from(2_100));
    }

    #[test]
    fn test_subtotal_saturates() {
        let mut item = LineItem::from_product(&Product::new("p1", "x", Decimal::MAX));
        item.quantity = 2;

        assert_eq!(item.subtotal(), Decimal::MAX);
    }

    #[test]
    fn test_price_bounds() {
        assert!(is_valid_price(Decimal::ZERO));
        assert!(is_valid_price(MAX_UNIT_PRICE));
        assert!(!is_valid_price(MAX_UNIT_PRICE + Decimal::ONE));
        assert!(!is_valid_price(Decimal::from(-1)));
        assert!(!is_valid_price(Decimal::MAX));
    }

    #[test]
    fn test_product_keeps_catalog_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": "p3",
            "name": "Gula Aren",
            "price": 15000,
            "stock": 4,
            "category": "pantry"
        }))
        .unwrap();

        assert_eq!(product.price, Decimal::from(15_000));
        assert_eq!(product.attributes["stock"], json!(4));
        assert_eq!(product.attributes["category"], json!("pantry"));
    }
}
