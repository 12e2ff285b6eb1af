//! # Cart Module
//!
//! The ordered line-item collection and its two mutation operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart State Operations                           │
//! │                                                                     │
//! │  Page Control            Operation              State Change        │
//! │  ────────────            ─────────              ────────────        │
//! │                                                                     │
//! │  Qty stepper ──────────► set_quantity() ──────► items[i].qty = n   │
//! │                                                 (clamped to >= 1)  │
//! │                                                                     │
//! │  Remove button ────────► remove_item() ───────► items.retain(..)   │
//! │                                                                     │
//! │  Every render ─────────► queries ─────────────► (read only)        │
//! │                                                                     │
//! │  There is deliberately no add operation: the cart is created once  │
//! │  from the backend's item list and only shrinks or requantifies.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both operations are total: an unknown id is a silent no-op, an
//! out-of-range quantity is clamped. Ids originate from the same state
//! being displayed, so a miss means a stale control, not a bug worth
//! failing the page over.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::types::LineItem;
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

// =============================================================================
// Cart
// =============================================================================

/// The cart for one page view.
///
/// ## Invariants
/// - Items are unique by `id`; insertion order is display order
/// - Every quantity is in `[MIN_LINE_QUANTITY, MAX_LINE_QUANTITY]`
/// - Unit prices are non-negative
///
/// Serialize-only: a cart is always materialized through
/// [`Cart::from_items`] so the invariants hold from birth.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in display order.
    items: Vec<LineItem>,

    /// When this page view's cart was materialized.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Builds a cart from the backend's item list.
    ///
    /// The seed stands in for a live cart service, so it is normalized
    /// rather than trusted:
    /// - an entry repeating an earlier id is dropped (first wins)
    /// - quantities are clamped into the valid range
    /// - negative prices are clamped to zero
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut normalized: Vec<LineItem> = Vec::with_capacity(items.len());
        for mut item in items {
            if normalized.iter().any(|existing| existing.id == item.id) {
                continue;
            }
            item.quantity = clamp_quantity(item.quantity);
            item.unit_price_cents = item.unit_price_cents.max(0);
            if let Some(original) = item.original_unit_price_cents {
                item.original_unit_price_cents = Some(original.max(0));
            }
            normalized.push(item);
        }
        Cart {
            items: normalized,
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Replaces the quantity of the matching item.
    ///
    /// The requested quantity is clamped into
    /// `[MIN_LINE_QUANTITY, MAX_LINE_QUANTITY]` here, so any caller
    /// (pre-clamped stepper post or raw script client) upholds the
    /// invariant. All other items and their order are untouched.
    ///
    /// Returns `true` if an item changed, `false` for an unknown id or
    /// a clamp that landed on the current quantity (both no-ops).
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        let quantity = clamp_quantity(quantity);
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes the matching entry, preserving the order of the rest.
    ///
    /// Unknown id is a no-op, which makes removal idempotent: the
    /// second click of a double-clicked remove button changes nothing.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != initial_len
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// When this page view's cart was materialized.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line entries.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines. This is the number on the header
    /// cart badge: it counts units, not distinct entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Subtotal: sum of unit price × quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.line_subtotal()).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Clamps a requested quantity into the valid range.
#[inline]
pub(crate) fn clamp_quantity(quantity: i64) -> i64 {
    quantity.clamp(MIN_LINE_QUANTITY, MAX_LINE_QUANTITY)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemOption;

    fn item(id: &str, price_cents: i64, quantity: i64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Cabinet {}", id),
            sku: Some(format!("OAK-{}", id)),
            image_ref: format!("cabinet-{}.webp", id),
            unit_price_cents: price_cents,
            original_unit_price_cents: None,
            quantity,
            options: vec![ItemOption::new("Finished End Panel", "1")],
        }
    }

    fn three_line_cart() -> Cart {
        // The reference scenario: 20.00×1 + 1,011.11×1 + 944.27×2
        Cart::from_items(vec![
            item("1", 2000, 1),
            item("2", 101111, 1),
            item("3", 94427, 2),
        ])
    }

    #[test]
    fn test_subtotal_and_unit_count() {
        let cart = three_line_cart();
        assert_eq!(cart.subtotal().cents(), 291965); // $2,919.65
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_set_quantity_changes_only_target() {
        let mut cart = three_line_cart();
        assert!(cart.set_quantity("2", 3));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]); // order preserved
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 3);
        assert_eq!(cart.items()[2].quantity, 2);
    }

    #[test]
    fn test_set_quantity_clamps_low_and_high() {
        let mut cart = three_line_cart();

        assert!(cart.set_quantity("3", 0));
        assert_eq!(cart.items()[2].quantity, 1);

        assert!(!cart.set_quantity("3", -5)); // already at the floor
        assert_eq!(cart.items()[2].quantity, 1);

        assert!(cart.set_quantity("3", 100_000));
        assert_eq!(cart.items()[2].quantity, MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = three_line_cart();
        let before = cart.clone();

        assert!(!cart.set_quantity("missing", 7));
        assert_eq!(cart.items(), before.items());
        assert_eq!(cart.subtotal(), before.subtotal());
    }

    #[test]
    fn test_remove_item_preserves_order_and_subtotal_delta() {
        let mut cart = three_line_cart();
        let removed_line = cart.items()[1].line_subtotal();
        let before = cart.subtotal();

        assert!(cart.remove_item("2"));
        assert_eq!(cart.line_count(), 2);
        assert!(cart.items().iter().all(|i| i.id != "2"));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(cart.subtotal(), before - removed_line);
    }

    #[test]
    fn test_remove_item_idempotent() {
        let mut cart = three_line_cart();
        assert!(cart.remove_item("1"));
        let after_first = cart.clone();

        assert!(!cart.remove_item("1"));
        assert_eq!(cart.items(), after_first.items());

        assert!(!cart.remove_item("never-existed"));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_from_items_drops_duplicate_ids() {
        let cart = Cart::from_items(vec![
            item("1", 2000, 1),
            item("1", 999999, 5), // repeat id, dropped
            item("2", 101111, 1),
        ]);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].unit_price_cents, 2000); // first wins
    }

    #[test]
    fn test_from_items_normalizes_out_of_range_fields() {
        let mut bad = item("1", -500, 0);
        bad.original_unit_price_cents = Some(-100);
        let cart = Cart::from_items(vec![bad]);

        let normalized = &cart.items()[0];
        assert_eq!(normalized.quantity, 1);
        assert_eq!(normalized.unit_price_cents, 0);
        assert_eq!(normalized.original_unit_price_cents, Some(0));
    }

    #[test]
    fn test_empty_cart_queries() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.subtotal().is_zero());
    }
}
