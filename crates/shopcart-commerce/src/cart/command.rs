//! Cart transitions as values.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A requested change to the cart.
///
/// [`Cart::apply`](crate::cart::Cart::apply) is the only way cart state
/// changes; the convenience methods on `Cart` and `CartStore` build one of
/// these and apply it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CartCommand {
    /// Add `quantity` of a product, creating its line on first add.
    Add { product: Product, quantity: i64 },
    /// Replace the quantity of an existing line.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// Delete a line.
    Remove { product_id: ProductId },
    /// Delete every line.
    Clear,
}

impl CartCommand {
    /// Add one unit of a product.
    pub fn add_one(product: Product) -> Self {
        CartCommand::Add {
            product,
            quantity: 1,
        }
    }

    /// The product this command targets, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartCommand::Add { product, .. } => Some(&product.id),
            CartCommand::SetQuantity { product_id, .. } | CartCommand::Remove { product_id } => {
                Some(product_id)
            }
            CartCommand::Clear => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::Add { .. } => "add",
            CartCommand::SetQuantity { .. } => "set_quantity",
            CartCommand::Remove { .. } => "remove",
            CartCommand::Clear => "clear",
        }
    }
}

/// What a successful transition did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CartEvent {
    /// Units were added.
    Added {
        product_id: ProductId,
        /// Units added by this call.
        quantity: i64,
        /// Line quantity after the call.
        line_quantity: i64,
        /// Whether the line was created by this call.
        created: bool,
    },
    /// A line's quantity was replaced.
    QuantityChanged {
        product_id: ProductId,
        from: i64,
        to: i64,
    },
    /// A line was deleted.
    Removed { line: CartLine },
    /// The cart was emptied.
    Cleared { lines: usize },
}

impl CartEvent {
    /// The product this event concerns, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartEvent::Added { product_id, .. } | CartEvent::QuantityChanged { product_id, .. } => {
                Some(product_id)
            }
            CartEvent::Removed { line } => Some(&line.product_id),
            CartEvent::Cleared { .. } => None,
        }
    }
}
