//! # Totals Derivation
//!
//! Pure function of (cart, adjustments) → the numbers the summary panel
//! and header display. Recomputed from scratch after every mutation;
//! the cart holds tens of items at most, so the O(n) fold is the entire
//! cost and nothing is cached.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Summary Panel Mapping                         │
//! │                                                                     │
//! │   You Saved              you_saved (display only, NOT subtracted)   │
//! │   Subtotal               Σ unit_price × qty                         │
//! │   Additional Discounts   - additional_discount  (+ coupon chips)    │
//! │   Shipping & Handling    + shipping   (0 renders as "Free")         │
//! │   Tax                    + tax                                      │
//! │   ─────────────────────────────────────────────────────────────     │
//! │   GRAND TOTAL            subtotal - discounts - points              │
//! │                                   + shipping + tax                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{Adjustments, AppliedCoupon};

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals snapshot for one render / API response.
///
/// All monetary fields are cents. Display strings are produced at the
/// edge via [`Money::grouped`]; the one display rule owned here is the
/// "Free" shipping label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct line entries.
    pub line_count: usize,

    /// Units across all lines (header badge number).
    pub total_quantity: i64,

    /// Σ unit price × quantity, before any adjustment.
    pub subtotal_cents: i64,

    /// Informational savings banner amount. Never subtracted.
    pub you_saved_cents: i64,

    /// Cart-rule / promo discounts, subtracted.
    pub additional_discount_cents: i64,

    /// Reward-points redemption, subtracted.
    pub redeem_points_cents: i64,

    /// Shipping & handling, added.
    pub shipping_cents: i64,

    /// Tax, added.
    pub tax_cents: i64,

    /// The number on the big line at the bottom.
    pub grand_total_cents: i64,

    /// Coupon chips shown under "Additional Discounts".
    pub coupons: Vec<AppliedCoupon>,
}

impl CartTotals {
    /// Derives totals from the cart and the externally supplied
    /// adjustments.
    ///
    /// Total over its domain: any cart (including empty) and any
    /// adjustment set produce a value. For an empty cart the subtotal
    /// and unit count are zero and the grand total is just the folded
    /// adjustments.
    pub fn derive(cart: &Cart, adjustments: &Adjustments) -> Self {
        let subtotal = cart.subtotal();
        let grand_total = subtotal - adjustments.additional_discount() - adjustments.redeem_points()
            + adjustments.shipping()
            + adjustments.tax();

        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: subtotal.cents(),
            you_saved_cents: adjustments.you_saved_cents,
            additional_discount_cents: adjustments.additional_discount_cents,
            redeem_points_cents: adjustments.redeem_points_cents,
            shipping_cents: adjustments.shipping_cents,
            tax_cents: adjustments.tax_cents,
            grand_total_cents: grand_total.cents(),
            coupons: adjustments.coupons.clone(),
        }
    }

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_cents(self.grand_total_cents)
    }

    /// Display string for the shipping row: the literal `Free` when the
    /// estimate is exactly zero, otherwise the grouped dollar amount
    /// with a `$`.
    pub fn shipping_display(&self) -> String {
        if self.shipping_cents == 0 {
            "Free".to_string()
        } else {
            format!("${}", Money::from_cents(self.shipping_cents).grouped())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

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

    fn reference_cart() -> Cart {
        Cart::from_items(vec![
            item("1", 2000, 1),
            item("2", 101111, 1),
            item("3", 94427, 2),
        ])
    }

    #[test]
    fn test_reference_scenario() {
        // 20.00 + 1,011.11 + 1,888.54 = 2,919.65 over 4 units
        let totals = CartTotals::derive(&reference_cart(), &Adjustments::default());
        assert_eq!(totals.subtotal_cents, 291965);
        assert_eq!(totals.total_quantity, 4);
        assert_eq!(totals.line_count, 3);
        assert_eq!(totals.grand_total_cents, 291965);
    }

    #[test]
    fn test_grand_total_formula() {
        // 2,919.65 - 225.92 + 299.00 + 0 = 2,992.73
        let adjustments = Adjustments {
            shipping_cents: 29900,
            tax_cents: 0,
            you_saved_cents: 43458,
            additional_discount_cents: 22592,
            redeem_points_cents: 0,
            coupons: vec![AppliedCoupon::new("TAKE10", "Take10")],
        };
        let totals = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(totals.grand_total_cents, 299273);
        assert_eq!(totals.grand_total().grouped(), "2,992.73");
    }

    #[test]
    fn test_you_saved_is_not_subtracted() {
        let mut adjustments = Adjustments::default();
        let base = CartTotals::derive(&reference_cart(), &adjustments);

        // Any you-saved figure leaves the grand total untouched: it is
        // an opaque display value, never reconciled with line items.
        adjustments.you_saved_cents = 43458;
        let with_banner = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(with_banner.grand_total_cents, base.grand_total_cents);
        assert_eq!(with_banner.you_saved_cents, 43458);
    }

    #[test]
    fn test_redeem_points_subtracted() {
        let adjustments = Adjustments {
            redeem_points_cents: 5000,
            ..Adjustments::default()
        };
        let totals = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(totals.grand_total_cents, 291965 - 5000);
    }

    #[test]
    fn test_empty_cart_totals_are_adjustments_only() {
        let adjustments = Adjustments {
            shipping_cents: 29900,
            tax_cents: 1234,
            ..Adjustments::default()
        };
        let totals = CartTotals::derive(&Cart::new(), &adjustments);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.total_quantity, 0);
        assert_eq!(totals.line_count, 0);
        assert_eq!(totals.grand_total_cents, 31134);
    }

    #[test]
    fn test_shipping_display_free_for_exact_zero() {
        let mut adjustments = Adjustments::default();
        let totals = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(totals.shipping_display(), "Free");

        adjustments.shipping_cents = 29900;
        let totals = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(totals.shipping_display(), "$299.00");

        adjustments.shipping_cents = 1;
        let totals = CartTotals::derive(&reference_cart(), &adjustments);
        assert_eq!(totals.shipping_display(), "$0.01");
    }

    #[test]
    fn test_removal_decreases_subtotal_by_line_subtotal() {
        let mut cart = reference_cart();
        let line = cart.items()[2].line_subtotal().cents();
        let before = CartTotals::derive(&cart, &Adjustments::default());

        cart.remove_item("3");
        let after = CartTotals::derive(&cart, &Adjustments::default());
        assert_eq!(after.subtotal_cents, before.subtotal_cents - line);
        assert_eq!(after.total_quantity, before.total_quantity - 2);
    }

    #[test]
    fn test_totals_wire_shape() {
        let totals = CartTotals::derive(&reference_cart(), &Adjustments::default());
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["subtotalCents"], 291965);
        assert_eq!(json["grandTotalCents"], 291965);
        assert_eq!(json["totalQuantity"], 4);
    }
}
