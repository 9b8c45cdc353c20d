//! Catalog filtering.

use crate::catalog::{CategoryFilter, Product};

/// Case-insensitive substring match against title or description.
///
/// Blank text matches every product. Non-blank text is used as typed,
/// surrounding whitespace included.
pub fn matches_text(product: &Product, text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Filter products by search text and category.
///
/// A product is kept iff it matches the text and the category; results keep
/// the input order.
pub fn filter<'a>(
    products: &'a [Product],
    text: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.matches(&p.category) && matches_text(p, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1u64, "Red Shirt", Money::new(1000, Currency::USD))
                .with_description("cotton")
                .with_category("clothing"),
            Product::new(2u64, "Blue Mug", Money::new(500, Currency::USD))
                .with_description("ceramic")
                .with_category("home"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_text_matches_title_case_insensitive() {
        let products = catalog();
        let result = filter(&products, "shirt", &CategoryFilter::All);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_text_matches_description() {
        let products = catalog();
        let result = filter(&products, "CERAMIC", &CategoryFilter::All);
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_category_only() {
        let products = catalog();
        let result = filter(&products, "", &CategoryFilter::parse("home"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_everything_in_order() {
        let products = catalog();
        let result = filter(&products, "", &CategoryFilter::All);
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_blank_text_matches_all() {
        let products = catalog();
        assert_eq!(filter(&products, "   ", &CategoryFilter::All).len(), 2);
    }

    #[test]
    fn test_text_and_category_must_both_hold() {
        let products = catalog();
        let result = filter(&products, "shirt", &CategoryFilter::parse("home"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category() {
        let products = catalog();
        assert!(filter(&products, "", &CategoryFilter::parse("toys")).is_empty());
    }
}
