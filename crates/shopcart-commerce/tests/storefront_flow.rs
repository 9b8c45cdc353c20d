//! End-to-end storefront flows: browse the catalog, fill the cart, read totals.

use shopcart_commerce::prelude::*;

const CATALOG: &str = r#"[
    {"id": 1, "title": "Red Shirt", "description": "cotton", "category": "clothing", "price": 10,
     "image": "https://example.com/red-shirt.png", "rating": {"rate": 4.1, "count": 259}},
    {"id": 2, "title": "Blue Mug", "description": "ceramic", "category": "home", "price": 5,
     "image": "https://example.com/blue-mug.png", "rating": {"rate": 3.6, "count": 14}}
]"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG, Currency::USD).unwrap()
}

fn ids(results: &SearchResults<'_>) -> Vec<String> {
    results.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn filter_by_text_category_and_everything() {
    let catalog = catalog();

    assert_eq!(ids(&catalog.filter("shirt", "all")), vec!["1"]);
    assert_eq!(ids(&catalog.filter("", "home")), vec!["2"]);
    assert_eq!(ids(&catalog.filter("", "all")), vec!["1", "2"]);
}

#[test]
fn no_products_found() {
    let catalog = catalog();
    let results = catalog.filter("lamp", "all");
    assert!(results.is_empty());
    assert_eq!(results.catalog_size(), 2);
}

#[test]
fn category_list() {
    let catalog = catalog();
    assert_eq!(catalog.categories(), vec!["all", "clothing", "home"]);

    let labels: Vec<String> = catalog
        .categories()
        .iter()
        .map(|c| category_label(c))
        .collect();
    assert_eq!(labels, vec!["All", "Clothing", "Home"]);
}

#[test]
fn end_to_end_cart_scenario() {
    let catalog = catalog();
    let shirt = catalog.get(&ProductId::new("1")).unwrap();
    let mut cart = Cart::new(catalog.currency());

    cart.add(shirt, 1).unwrap();
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), Money::new(1000, Currency::USD));

    cart.add(shirt, 2).unwrap();
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Money::new(3000, Currency::USD));

    let err = cart.set_quantity(&shirt.id, 0).unwrap_err();
    assert!(err.is_soft());
    assert_eq!(cart.total_items(), 3);

    cart.remove(&shirt.id).unwrap();
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), Money::zero(Currency::USD));
}

#[test]
fn remove_twice_is_soft() {
    let catalog = catalog();
    let mug = catalog.get(&ProductId::new("2")).unwrap();
    let mut cart = Cart::default();

    cart.add(mug, 1).unwrap();
    assert!(cart.remove(&mug.id).is_ok());

    let second = cart.remove(&mug.id).unwrap_err();
    assert_eq!(second, CommerceError::NotFound(mug.id.clone()));
    assert!(second.is_soft());
}

#[test]
fn product_page_adds_picked_quantity() {
    let catalog = catalog();
    let mug = catalog.get(&ProductId::new("2")).unwrap();
    let mut picker = QuantityPicker::new();
    picker.increment();
    picker.increment();
    picker.decrement();

    let mut store = CartStore::new(catalog.currency());
    store.add(mug, picker.get()).unwrap();

    let summary = store.cart().summary();
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.subtotal.display(), "$10.00");
    assert_eq!(summary.shipping_label(), "Free");
    assert_eq!(summary.total, summary.subtotal);
}

#[test]
fn unknown_product_detail() {
    let catalog = catalog();
    assert!(catalog.get(&ProductId::new("99")).is_none());
}

#[test]
fn lines_keep_display_snapshot() {
    let catalog = catalog();
    let mut cart = Cart::default();
    for product in catalog.products() {
        cart.add(product, 1).unwrap();
    }

    let line = &cart.lines()[1];
    assert_eq!(line.title, "Blue Mug");
    assert_eq!(line.image, "https://example.com/blue-mug.png");
    assert_eq!(line.line_total().display(), "$5.00");
}
