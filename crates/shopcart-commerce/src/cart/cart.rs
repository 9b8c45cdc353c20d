//! Cart and cart line types.

use crate::cart::{CartCommand, CartEvent, CartSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A shopping cart.
///
/// Holds at most one line per product, in the order products were first
/// added. State only changes through [`Cart::apply`]; every transition
/// validates first and mutates last, so a rejected command leaves the cart
/// untouched.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Apply a transition.
    ///
    /// Errors:
    /// - `InvalidProduct`: blank product id on add
    /// - `InvalidQuantity` (soft): quantity below 1
    /// - `NotFound` (soft): set/remove of a product not in the cart
    /// - `CurrencyMismatch`: product priced in another currency
    /// - `Overflow`: the resulting totals would not fit in an `i64`
    pub fn apply(&mut self, command: CartCommand) -> Result<CartEvent, CommerceError> {
        let op = command.name();
        let result = match command {
            CartCommand::Add { product, quantity } => self.apply_add(product, quantity),
            CartCommand::SetQuantity {
                product_id,
                quantity,
            } => self.apply_set_quantity(product_id, quantity),
            CartCommand::Remove { product_id } => self.apply_remove(product_id),
            CartCommand::Clear => Ok(self.apply_clear()),
        };

        match &result {
            Ok(event) => debug!(op, ?event, items = self.total_items(), "cart transition applied"),
            Err(e) if e.is_soft() => debug!(op, error = %e, "cart transition ignored"),
            Err(e) => warn!(op, error = %e, "cart transition rejected"),
        }
        result
    }

    /// Add `quantity` units of a product.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<CartEvent, CommerceError> {
        self.apply(CartCommand::Add {
            product: product.clone(),
            quantity,
        })
    }

    /// Replace the quantity of a line.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartEvent, CommerceError> {
        self.apply(CartCommand::SetQuantity {
            product_id: product_id.clone(),
            quantity,
        })
    }

    /// Nudge a line's quantity by `delta` (the cart page's -/+ buttons).
    ///
    /// Stepping below 1 is a soft `InvalidQuantity`; the line stays.
    pub fn step_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<CartEvent, CommerceError> {
        let command = self.step_command(product_id, delta)?;
        self.apply(command)
    }

    /// Remove a line.
    pub fn remove(&mut self, product_id: &ProductId) -> Result<CartEvent, CommerceError> {
        self.apply(CartCommand::Remove {
            product_id: product_id.clone(),
        })
    }

    /// Remove every line.
    pub fn clear(&mut self) -> CartEvent {
        // Clearing never fails.
        self.apply(CartCommand::Clear)
            .unwrap_or(CartEvent::Cleared { lines: 0 })
    }

    /// Build the `SetQuantity` command for a relative change.
    pub(crate) fn step_command(
        &self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<CartCommand, CommerceError> {
        let current = self
            .get(product_id)
            .ok_or_else(|| CommerceError::NotFound(product_id.clone()))?
            .quantity;
        let quantity = current.checked_add(delta).ok_or(CommerceError::Overflow)?;
        Ok(CartCommand::SetQuantity {
            product_id: product_id.clone(),
            quantity,
        })
    }

    fn apply_add(&mut self, product: Product, quantity: i64) -> Result<CartEvent, CommerceError> {
        if product.id.is_blank() {
            return Err(CommerceError::InvalidProduct(format!(
                "product '{}' has a blank id",
                product.title
            )));
        }
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(index) = self.position(&product.id) {
            let line = &self.lines[index];
            let new_quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            self.check_totals(Some(index), line.unit_price, new_quantity)?;

            // Price snapshot stays as first added.
            let line = &mut self.lines[index];
            line.quantity = new_quantity;
            return Ok(CartEvent::Added {
                product_id: product.id,
                quantity,
                line_quantity: new_quantity,
                created: false,
            });
        }

        self.check_totals(None, product.price, quantity)?;

        let line = CartLine::from_product(product, quantity);
        let product_id = line.product_id.clone();
        self.lines.push(line);
        Ok(CartEvent::Added {
            product_id,
            quantity,
            line_quantity: quantity,
            created: true,
        })
    }

    fn apply_set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartEvent, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        let index = self
            .position(&product_id)
            .ok_or_else(|| CommerceError::NotFound(product_id.clone()))?;
        self.check_totals(Some(index), self.lines[index].unit_price, quantity)?;

        let line = &mut self.lines[index];
        let from = line.quantity;
        line.quantity = quantity;
        Ok(CartEvent::QuantityChanged {
            product_id,
            from,
            to: quantity,
        })
    }

    fn apply_remove(&mut self, product_id: ProductId) -> Result<CartEvent, CommerceError> {
        let index = self
            .position(&product_id)
            .ok_or(CommerceError::NotFound(product_id))?;
        let line = self.lines.remove(index);
        Ok(CartEvent::Removed { line })
    }

    fn apply_clear(&mut self) -> CartEvent {
        let lines = self.lines.len();
        self.lines.clear();
        CartEvent::Cleared { lines }
    }

    /// Reject a change whose totals would overflow.
    ///
    /// `replacing` is the index of the line being changed, or `None` for a
    /// new line.
    fn check_totals(
        &self,
        replacing: Option<usize>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        let changed = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;

        self.lines
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != replacing)
            .try_fold((quantity, changed), |(items, total), (_, line)| {
                let line_total = line.unit_price.try_multiply(line.quantity)?;
                Some((items.checked_add(line.quantity)?, total.try_add(&line_total)?))
            })
            .map(|_| ())
            .ok_or(CommerceError::Overflow)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.product_id == product_id)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> i64 {
        // Transitions guarantee the sum fits.
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` across all lines, recomputed per call.
    pub fn total_price(&self) -> Money {
        let cents = self
            .lines
            .iter()
            .map(|l| l.unit_price.amount_cents.saturating_mul(l.quantity))
            .fold(0_i64, i64::saturating_add);
        Money::new(cents, self.currency)
    }

    /// Order summary panel values.
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.total_items(), self.total_price())
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product in this line.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Product image URL (denormalized for display).
    pub image: String,
    /// Price when the product was first added.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartLine {
    fn from_product(product: Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            title: product.title,
            image: product.image,
            unit_price: product.price,
            quantity,
        }
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.unit_price.amount_cents.saturating_mul(self.quantity),
            self.unit_price.currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product::new(1u64, "Red Shirt", Money::new(1000, Currency::USD))
            .with_image("https://example.com/shirt.png")
    }

    fn mug() -> Product {
        Product::new(2u64, "Blue Mug", Money::new(500, Currency::USD))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let event = cart.add(&shirt(), 2).unwrap();

        assert_eq!(
            event,
            CartEvent::Added {
                product_id: ProductId::new("1"),
                quantity: 2,
                line_quantity: 2,
                created: true,
            }
        );
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].image, "https://example.com/shirt.png");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 1).unwrap();
        let event = cart.add(&shirt(), 2).unwrap();

        assert!(matches!(
            event,
            CartEvent::Added {
                line_quantity: 3,
                created: false,
                ..
            }
        ));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_price_snapshot_kept() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 1).unwrap();

        let mut repriced = shirt();
        repriced.price = Money::new(1500, Currency::USD);
        cart.add(&repriced, 1).unwrap();

        let line = cart.get(&ProductId::new("1")).unwrap();
        assert_eq!(line.unit_price, Money::new(1000, Currency::USD));
        assert_eq!(cart.total_price(), Money::new(2000, Currency::USD));
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.add(&shirt(), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add(&shirt(), -3),
            Err(CommerceError::InvalidQuantity(-3))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invalid_product() {
        let mut cart = Cart::default();
        let ghost = Product::new("", "Ghost", Money::new(100, Currency::USD));
        let err = cart.add(&ghost, 1).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProduct(_)));
        assert!(!err.is_soft());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let euro = Product::new(3u64, "Croissant", Money::new(200, Currency::EUR));
        assert!(matches!(
            cart.add(&euro, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_currency_mismatch_on_existing_line() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&shirt(), 1).unwrap();
        let before = cart.clone();

        let repriced = Product {
            price: Money::new(900, Currency::EUR),
            ..shirt()
        };
        assert!(matches!(
            cart.add(&repriced, 2),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert_eq!(cart, before);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_clear_goes_through_apply() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 2).unwrap();
        assert_eq!(cart.clear(), CartEvent::Cleared { lines: 1 });
        assert!(cart.is_empty());
        assert_eq!(cart.clear(), CartEvent::Cleared { lines: 0 });
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 1).unwrap();

        let event = cart.set_quantity(&ProductId::new("1"), 5).unwrap();
        assert_eq!(
            event,
            CartEvent::QuantityChanged {
                product_id: ProductId::new("1"),
                from: 1,
                to: 5,
            }
        );
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_set_quantity_below_one_is_noop() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 3).unwrap();
        let before = cart.clone();

        let err = cart.set_quantity(&ProductId::new("1"), 0).unwrap_err();
        assert!(err.is_soft());
        assert!(cart.set_quantity(&ProductId::new("1"), -1).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_missing_line() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.set_quantity(&ProductId::new("404"), 2),
            Err(CommerceError::NotFound(ProductId::new("404")))
        );
    }

    #[test]
    fn test_step_quantity() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 1).unwrap();
        let id = ProductId::new("1");

        cart.step_quantity(&id, 1).unwrap();
        assert_eq!(cart.get(&id).unwrap().quantity, 2);

        cart.step_quantity(&id, -1).unwrap();
        assert_eq!(
            cart.step_quantity(&id, -1),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(cart.get(&id).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 2).unwrap();

        let event = cart.remove(&ProductId::new("1")).unwrap();
        match event {
            CartEvent::Removed { line } => assert_eq!(line.quantity, 2),
            other => panic!("expected Removed, got {other:?}"),
        }
        assert!(cart.is_empty());

        let again = cart.remove(&ProductId::new("1")).unwrap_err();
        assert!(again.is_soft());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::default();
        cart.add(&mug(), 1).unwrap();
        cart.add(&shirt(), 1).unwrap();
        cart.add(&mug(), 4).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 1).unwrap();
        cart.add(&mug(), 1).unwrap();

        assert_eq!(cart.clear(), CartEvent::Cleared { lines: 2 });
        assert!(cart.is_empty());
        assert_eq!(cart.clear(), CartEvent::Cleared { lines: 0 });
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::default();
        cart.add(&shirt(), 2).unwrap();
        cart.add(&mug(), 1).unwrap();

        assert_eq!(cart.total_price().amount_cents, 2500); // 2*1000 + 1*500
        assert_eq!(cart.lines()[0].line_total().amount_cents, 2000);
    }

    #[test]
    fn test_overflow_rejected_without_change() {
        let mut cart = Cart::default();
        let pricey = Product::new(9u64, "Yacht", Money::new(i64::MAX / 2, Currency::USD));
        cart.add(&pricey, 1).unwrap();
        let before = cart.clone();

        assert_eq!(cart.add(&pricey, 2), Err(CommerceError::Overflow));
        assert_eq!(
            cart.set_quantity(&ProductId::new("9"), 3),
            Err(CommerceError::Overflow)
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_free_items_quantity_overflow() {
        let mut cart = Cart::default();
        let freebie = Product::new(5u64, "Sticker", Money::zero(Currency::USD));
        cart.add(&freebie, i64::MAX).unwrap();
        assert_eq!(cart.add(&freebie, 1), Err(CommerceError::Overflow));
        assert_eq!(cart.add(&mug(), 1), Err(CommerceError::Overflow));
        assert_eq!(cart.total_items(), i64::MAX);
    }
}
