//! Search module.
//!
//! Free-text and category filtering over the catalog. Everything here is a
//! pure function of its inputs.

mod filter;
mod query;
mod results;

pub use filter::{filter, matches_text};
pub use query::CatalogQuery;
pub use results::SearchResults;
