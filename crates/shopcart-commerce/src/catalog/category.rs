//! Category selection for product browsing.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category name that selects every product.
pub const ALL_CATEGORIES: &str = "all";

/// The category a shopper has selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly this category name.
    Named(String),
}

impl CategoryFilter {
    /// Parse a category name; `"all"` is the sentinel.
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    /// Whether the given product category is selected.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(c: CategoryFilter) -> Self {
        match c {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Derive the category list shown to shoppers.
///
/// `"all"` first, then each distinct product category in order of first
/// occurrence. A product category literally named `"all"` is folded into the
/// sentinel.
pub fn categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out.iter().any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// Display label for a category: first character upper-cased.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
