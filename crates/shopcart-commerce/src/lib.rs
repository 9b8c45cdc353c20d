//! Storefront domain types and logic for ShopCart.
//!
//! This crate is the storefront core that a presentation layer calls into:
//!
//! - **Catalog**: products, catalog loading, category selection
//! - **Search**: free-text and category filtering over the catalog
//! - **Cart**: the shopping cart state machine, its commands, events and
//!   observers
//!
//! # Example
//!
//! ```rust
//! use shopcart_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id": 1, "title": "Red Shirt", "description": "cotton",
//!          "category": "clothing", "price": 10}]"#,
//!     Currency::USD,
//! )?;
//!
//! let shirts = catalog.filter("shirt", "all");
//! assert_eq!(shirts.len(), 1);
//!
//! let mut cart = Cart::new(catalog.currency());
//! cart.add(shirts.products()[0], 2)?;
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().display(), "$20.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        categories, category_label, Catalog, CategoryFilter, Product, ProductRecord, Rating,
        ALL_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartCommand, CartEvent, CartLine, CartObserver, CartStore, CartSummary,
        QuantityPicker, SharedCart,
    };

    // Search
    pub use crate::search::{filter, CatalogQuery, SearchResults};
}
