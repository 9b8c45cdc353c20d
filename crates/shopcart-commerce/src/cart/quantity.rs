//! Quantity selection before adding to the cart.

use serde::Serialize;

/// The product page's quantity selector. Never goes below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityPicker(i64);

impl QuantityPicker {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Set the quantity, clamped to at least 1.
    pub fn set(&mut self, quantity: i64) {
        self.0 = quantity.max(1);
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = (self.0 - 1).max(1);
    }
}

impl Default for QuantityPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(QuantityPicker::default().get(), 1);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut picker = QuantityPicker::new();
        picker.increment();
        picker.increment();
        assert_eq!(picker.get(), 3);
        picker.decrement();
        picker.decrement();
        picker.decrement();
        assert_eq!(picker.get(), 1);
    }

    #[test]
    fn test_set_clamps() {
        let mut picker = QuantityPicker::new();
        picker.set(-4);
        assert_eq!(picker.get(), 1);
        picker.set(12);
        assert_eq!(picker.get(), 12);
    }
}
