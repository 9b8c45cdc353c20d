//! Cart order summary.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Values for the order summary panel.
///
/// Shipping is always free, so `total == subtotal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Sum of line quantities.
    pub item_count: i64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Amount due.
    pub total: Money,
}

impl CartSummary {
    pub(crate) fn new(item_count: i64, subtotal: Money) -> Self {
        Self {
            item_count,
            subtotal,
            shipping: Money::zero(subtotal.currency),
            total: subtotal,
        }
    }

    /// "Free" for zero shipping, otherwise the formatted amount.
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }

    /// Whether the cart badge should show a count.
    pub fn has_items(&self) -> bool {
        self.item_count > 0
    }
}
