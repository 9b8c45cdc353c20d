//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every error leaves the cart or catalog exactly as it was before the call.
/// Some of them are *soft*: the caller is told nothing happened, but nothing
/// went wrong either (see [`CommerceError::is_soft`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product has no usable identifier.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Requested quantity is below 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Product is not in the cart.
    #[error("Item not in cart: {0}")]
    NotFound(ProductId),

    /// Product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Catalog price is negative or not a number.
    #[error("Invalid price for product {product_id}: {price}")]
    InvalidPrice { product_id: String, price: f64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Catalog source could not be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl CommerceError {
    /// Whether this is a soft rejection.
    ///
    /// Soft rejections (`InvalidQuantity`, `NotFound`) are reported to the
    /// caller but need no handling beyond that.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_) | CommerceError::NotFound(_)
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Catalog(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Catalog(e.to_string())
    }
}
