//! Cart ownership, observers and serialized shared access.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cart::{Cart, CartCommand, CartEvent, CartLine, CartSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::Currency;

/// Receives every successful cart transition.
pub trait CartObserver: Send + Sync {
    /// Called after `event` was applied; `cart` is the new state.
    fn on_cart_event(&self, event: &CartEvent, cart: &Cart);
}

impl<F> CartObserver for F
where
    F: Fn(&CartEvent, &Cart) + Send + Sync,
{
    fn on_cart_event(&self, event: &CartEvent, cart: &Cart) {
        self(event, cart)
    }
}

/// A cart plus the observers watching it.
///
/// Observers are notified in subscription order after each successful
/// dispatch. Rejected commands notify nobody.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    observers: Vec<(SubscriptionId, Box<dyn CartObserver>)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self::with_cart(Cart::new(currency))
    }

    /// Wrap an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            cart,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() < len_before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Apply a command and notify observers on success.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<CartEvent, CommerceError> {
        let event = self.cart.apply(command)?;
        for (_, observer) in &self.observers {
            observer.on_cart_event(&event, &self.cart);
        }
        Ok(event)
    }

    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<CartEvent, CommerceError> {
        self.dispatch(CartCommand::Add {
            product: product.clone(),
            quantity,
        })
    }

    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartEvent, CommerceError> {
        self.dispatch(CartCommand::SetQuantity {
            product_id: product_id.clone(),
            quantity,
        })
    }

    pub fn step_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<CartEvent, CommerceError> {
        let command = self.cart.step_command(product_id, delta)?;
        self.dispatch(command)
    }

    pub fn remove(&mut self, product_id: &ProductId) -> Result<CartEvent, CommerceError> {
        self.dispatch(CartCommand::Remove {
            product_id: product_id.clone(),
        })
    }

    pub fn clear(&mut self) -> Result<CartEvent, CommerceError> {
        self.dispatch(CartCommand::Clear)
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A cloneable handle to one cart shared between threads.
///
/// Each dispatch holds the lock for the transition and its notifications, so
/// concurrent callers observe transitions one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<CartStore>>,
}

impl SharedCart {
    pub fn new(currency: Currency) -> Self {
        Self::from_store(CartStore::new(currency))
    }

    pub fn from_store(store: CartStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        // Transitions validate before mutating, so a poisoned cart is still
        // consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a command under the lock.
    pub fn dispatch(&self, command: CartCommand) -> Result<CartEvent, CommerceError> {
        self.lock().dispatch(command)
    }

    pub fn subscribe(&self, observer: impl CartObserver + 'static) -> SubscriptionId {
        self.lock().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    /// Read the current cart under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(self.lock().cart())
    }

    /// Copy of the current lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.read(|cart| cart.lines().to_vec())
    }

    pub fn summary(&self) -> CartSummary {
        self.read(Cart::summary)
    }
}
