//! Product catalog module.
//!
//! Contains products, the catalog loader and category selection.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::{categories, category_label, CategoryFilter, ALL_CATEGORIES};
pub use product::{Product, ProductRecord, Rating};
