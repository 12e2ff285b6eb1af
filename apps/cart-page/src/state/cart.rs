//! # Cart State
//!
//! Owns the page view's single cart instance.
//!
//! ## Ownership Boundary
//! The raw `Cart` never leaves this wrapper. Handlers pass closures in,
//! and anything they derive (totals, item snapshots, HTML) is computed
//! inside one lock scope, so every response reflects a consistent,
//! fully-updated state: no partially mutated cart is ever observable.
//!
//! ## Thread Safety
//! Handlers run on the server's worker threads, so the cart sits behind
//! `Arc<Mutex<_>>`: shared ownership, one writer at a time. Operations
//! are a field update or a retain over tens of items, so the lock is
//! held for nanoseconds and a plain mutex beats anything fancier.

use std::sync::{Arc, Mutex};

use oakline_core::{Cart, LineItem};

/// Mutex-guarded cart for the page view.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates an empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Creates cart state from the backend's item list.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::from_items(items))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.cart.with_cart(|c| CartTotals::derive(c, &adj));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.cart.with_cart_mut(|c| c.set_quantity(&id, qty));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakline_core::{Adjustments, CartTotals};

    fn item(id: &str, price_cents: i64, quantity: i64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Cabinet {}", id),
            sku: None,
            image_ref: format!("cabinet-{}.webp", id),
            unit_price_cents: price_cents,
            original_unit_price_cents: None,
            quantity,
            options: Vec::new(),
        }
    }

    #[test]
    fn test_mutation_and_derivation_in_one_scope() {
        let state = CartState::from_items(vec![item("1", 2000, 1), item("2", 101111, 1)]);

        // Mutate and derive under the same lock, the way handlers do
        let totals = state.with_cart_mut(|cart| {
            cart.set_quantity("1", 3);
            CartTotals::derive(cart, &Adjustments::default())
        });

        assert_eq!(totals.subtotal_cents, 3 * 2000 + 101111);
        assert_eq!(totals.total_quantity, 4);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let state = CartState::from_items(vec![item("1", 2000, 1)]);
        let alias = state.clone();

        alias.with_cart_mut(|cart| cart.remove_item("1"));
        assert!(state.with_cart(|cart| cart.is_empty()));
    }
}
