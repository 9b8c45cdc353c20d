//! The loaded, immutable product catalog.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::{categories, CategoryFilter, Product, ProductRecord};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::{CatalogQuery, SearchResults};
use serde::Serialize;

/// An ordered, read-only list of products in a single currency.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

impl Catalog {
    /// Build a catalog from products.
    ///
    /// Returns an error if an id is blank, ids repeat, a price is negative or
    /// a price is in another currency.
    pub fn new(products: Vec<Product>, currency: Currency) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.is_blank() {
                return Err(CommerceError::InvalidProduct(format!(
                    "product '{}' has a blank id",
                    product.title
                )));
            }
            if !seen.insert(&product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.clone()));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    price: product.price.to_decimal(),
                });
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }

        Ok(Self { products, currency })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products, currency)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>, currency: Currency) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&json, currency)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            currency = %currency,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `"all"` followed by the distinct categories in first-occurrence order.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.products)
    }

    /// Filter by search text and category, preserving catalog order.
    pub fn filter(&self, text: &str, category: impl Into<CategoryFilter>) -> SearchResults<'_> {
        CatalogQuery::new()
            .with_text(text)
            .with_category(category)
            .run(&self.products)
    }
}
