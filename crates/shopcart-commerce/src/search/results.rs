//! Search results.

use crate::catalog::Product;
use crate::search::CatalogQuery;
use serde::Serialize;

/// Products matching a [`CatalogQuery`], in catalog order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults<'a> {
    /// The query that produced these results.
    pub query: CatalogQuery,
    products: Vec<&'a Product>,
    catalog_size: usize,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn new(query: CatalogQuery, products: Vec<&'a Product>, catalog_size: usize) -> Self {
        Self {
            query,
            products,
            catalog_size,
        }
    }

    /// Matching products.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// No product matched; storefronts show "No products found".
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products the query ran against.
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }
}
