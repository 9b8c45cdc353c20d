//! Shopping cart module.
//!
//! Contains the cart state machine, its commands and events, the order
//! summary and observer-aware wrappers.

mod cart;
mod command;
mod quantity;
mod store;
mod summary;

pub use cart::{Cart, CartLine};
pub use command::{CartCommand, CartEvent};
pub use quantity::QuantityPicker;
pub use store::{CartObserver, CartStore, SharedCart};
pub use summary::CartSummary;
