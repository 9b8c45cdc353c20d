//! Search query builder.

use crate::catalog::{CategoryFilter, Product};
use crate::search::{filter, matches_text, SearchResults};
use serde::{Deserialize, Serialize};

/// A catalog query: free text plus a category selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    /// Free-text search (title or description).
    #[serde(default)]
    pub text: String,
    /// Selected category.
    #[serde(default)]
    pub category: CategoryFilter,
}

impl CatalogQuery {
    /// A query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether a single product passes this query.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category) && matches_text(product, &self.text)
    }

    /// Run the query against a product list.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<'a> {
        let matched = filter(products, &self.text, &self.category);
        tracing::debug!(
            text = %self.text,
            category = %self.category,
            matched = matched.len(),
            total = products.len(),
            "catalog filtered"
        );
        SearchResults::new(self.clone(), matched, products.len())
    }
}
