//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Customer rating summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Current catalog price.
    pub price: Money,
    /// Category name, matched exactly by the catalog filter.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Rating summary.
    pub rating: Rating,
}

impl Product {
    /// Create a product with empty description, category and image.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating { rate, count };
        self
    }
}

/// A product as it appears in a catalog source file.
///
/// Prices are decimals in major units (`109.95`); ids may be integers or
/// strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl ProductRecord {
    /// Convert into a [`Product`] priced in `currency`.
    ///
    /// Fails with `InvalidProduct` for a blank id and `InvalidPrice` for a
    /// negative or non-finite price, or one finer than the currency's minor
    /// unit. Prices are never rounded.
    pub fn into_product(self, currency: Currency) -> Result<Product, CommerceError> {
        if self.id.is_blank() {
            return Err(CommerceError::InvalidProduct(format!(
                "record '{}' has a blank id",
                self.title
            )));
        }

        let price = Money::from_decimal(self.price, currency)
            .filter(|m| !m.is_negative())
            .ok_or_else(|| CommerceError::InvalidPrice {
                product_id: self.id.to_string(),
                price: self.price,
            })?;

        Ok(Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price,
            category: self.category,
            image: self.image,
            rating: self.rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let product = Product::new(1u64, "Red Shirt", Money::new(1000, Currency::USD))
            .with_description("cotton")
            .with_category("clothing")
            .with_rating(4.5, 120);

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category, "clothing");
        assert_eq!(product.rating.count, 120);
        assert!(product.image.is_empty());
    }

    #[test]
    fn test_record_conversion() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id": 3, "title": "Backpack", "price": 109.95,
                "description": "Fits 15 inch laptops", "category": "men's clothing",
                "image": "https://example.com/1.jpg", "rating": {"rate": 3.9, "count": 120}}"#,
        )
        .unwrap();

        let product = record.into_product(Currency::USD).unwrap();
        assert_eq!(product.id, ProductId::new("3"));
        assert_eq!(product.price, Money::new(10995, Currency::USD));
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_record_optional_fields_default() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id": "a", "title": "Mug", "price": 5}"#).unwrap();
        let product = record.into_product(Currency::USD).unwrap();
        assert!(product.description.is_empty());
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_record_negative_price_rejected() {
        let record = ProductRecord {
            id: ProductId::new("1"),
            title: "Broken".into(),
            price: -1.0,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        };
        assert!(matches!(
            record.into_product(Currency::USD),
            Err(CommerceError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_record_sub_cent_price_rejected() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id": 1, "title": "Sticker", "price": 0.005}"#).unwrap();
        assert_eq!(
            record.into_product(Currency::USD),
            Err(CommerceError::InvalidPrice {
                product_id: "1".to_string(),
                price: 0.005,
            })
        );
    }

    #[test]
    fn test_record_blank_id_rejected() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id": " ", "title": "Ghost", "price": 1.0}"#).unwrap();
        assert!(matches!(
            record.into_product(Currency::USD),
            Err(CommerceError::InvalidProduct(_))
        ));
    }
}
