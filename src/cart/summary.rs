//! Cart summary for the presentation layer.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::format_currency;

/// Aggregates of a cart at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    /// Number of distinct lines
    pub lines: usize,
    /// Total units across all lines
    pub count: u64,
    /// Sum of line subtotals
    pub total: Decimal,
    /// `total` formatted for display
    pub formatted_total: String,
}

impl CartSummary {
    /// Creates a summary, formatting the total for display.
    pub fn new(lines: usize, count: u64, total: Decimal) -> Self {
        Self {
            lines,
            count,
            total,
            formatted_total: format_currency(total),
        }
    }
}
