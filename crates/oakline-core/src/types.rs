//! # Domain Types
//!
//! Core domain types for the cart page.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────────┐   ┌──────────────────┐                    │
//! │  │      LineItem       │   │   Adjustments    │                    │
//! │  │  ─────────────────  │   │  ──────────────  │                    │
//! │  │  id (quote item)    │   │  shipping_cents  │                    │
//! │  │  name, sku, image   │   │  tax_cents       │                    │
//! │  │  unit_price_cents   │   │  you_saved_cents │                    │
//! │  │  original_.._cents  │   │  additional_..   │                    │
//! │  │  quantity           │   │  redeem_points.. │                    │
//! │  │  options[]          │   │  coupons[]       │                    │
//! │  └─────────────────────┘   └──────────────────┘                    │
//! │                                                                     │
//! │  LineItems are supplied by the catalog/pricing service.            │
//! │  Adjustments are supplied by coupon/shipping/rewards services.     │
//! │  Both are opaque inputs: this crate never computes or validates    │
//! │  the numbers inside them, only folds them into totals.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Option
// =============================================================================

/// One selected configurable/custom option on a line item, e.g.
/// `("Hinged", "Left")`. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemOption {
    pub label: String,
    pub value: String,
}

impl ItemOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ItemOption {
            label: label.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single cart entry. Pure data: display fields are frozen copies
/// supplied by the catalog/pricing service, prices are cents.
///
/// ## Invariants
/// - `quantity >= 1` (mutations clamp rather than going lower)
/// - `unit_price_cents >= 0`
/// - `original_unit_price_cents`, when present, is *compared* to the
///   unit price to decide discount display, never assumed greater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Quote-item identifier, stable for the item's lifetime in the cart.
    pub id: String,

    /// Product name shown in the row.
    pub name: String,

    /// Product SKU, when the catalog supplies one.
    pub sku: Option<String>,

    /// Opaque reference to the thumbnail asset.
    pub image_ref: String,

    /// Price charged per unit, after catalog-level discounts.
    pub unit_price_cents: i64,

    /// Regular price before discount. Drives strikethrough display only.
    pub original_unit_price_cents: Option<i64>,

    /// Units in the cart, always >= 1.
    pub quantity: i64,

    /// Selected configurable/custom options, in display order.
    pub options: Vec<ItemOption>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the regular (pre-discount) unit price, when present.
    #[inline]
    pub fn original_unit_price(&self) -> Option<Money> {
        self.original_unit_price_cents.map(Money::from_cents)
    }

    /// Line subtotal: unit price × quantity.
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Whether the row shows a discount: the regular price must be
    /// present AND strictly greater than the charged price.
    pub fn has_discount(&self) -> bool {
        match self.original_unit_price_cents {
            Some(original) => original > self.unit_price_cents,
            None => false,
        }
    }

    /// Regular-price line subtotal, for the strikethrough next to the
    /// sale subtotal. `None` unless the row is discounted; never summed
    /// into cart totals.
    pub fn original_line_subtotal(&self) -> Option<Money> {
        if self.has_discount() {
            self.original_unit_price()
                .map(|p| p.multiply_quantity(self.quantity))
        } else {
            None
        }
    }
}

// =============================================================================
// Applied Coupon
// =============================================================================

/// A coupon already applied by the (external) promotion engine.
/// Display-only: the discount amount it produced arrives separately in
/// [`Adjustments::additional_discount_cents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedCoupon {
    pub code: String,
    pub label: String,
}

impl AppliedCoupon {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        AppliedCoupon {
            code: code.into(),
            label: label.into(),
        }
    }
}

// =============================================================================
// Adjustments
// =============================================================================

/// Externally supplied pricing adjustments folded into the grand total.
///
/// Every field is opaque to this crate: shipping estimates, tax, coupon
/// and points amounts are computed by their own services. Missing
/// adjustments are zero, never errors.
///
/// `you_saved_cents` is informational display only. It restates
/// catalog discounts already baked into unit prices (and therefore into
/// the subtotal) and is NOT subtracted from the grand total. It is also
/// never cross-checked against line-item price gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    /// Shipping & handling estimate. Exactly zero displays as "Free".
    pub shipping_cents: i64,

    /// Tax estimate.
    pub tax_cents: i64,

    /// Informational "You Saved" banner amount. Not part of the total.
    pub you_saved_cents: i64,

    /// Cart-rule / promo-code discounts, subtracted from the total.
    pub additional_discount_cents: i64,

    /// Reward-points redemption, subtracted from the total.
    pub redeem_points_cents: i64,

    /// Coupons behind `additional_discount_cents`, for the chip row.
    pub coupons: Vec<AppliedCoupon>,
}

impl Adjustments {
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    #[inline]
    pub fn you_saved(&self) -> Money {
        Money::from_cents(self.you_saved_cents)
    }

    #[inline]
    pub fn additional_discount(&self) -> Money {
        Money::from_cents(self.additional_discount_cents)
    }

    #[inline]
    pub fn redeem_points(&self) -> Money {
        Money::from_cents(self.redeem_points_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn discounted_item() -> LineItem {
        LineItem {
            id: "2".to_string(),
            name: "12\" 2-Drawer Base Cabinet".to_string(),
            sku: Some("OAK-BC-1200".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 101111,
            original_unit_price_cents: Some(168518),
            quantity: 1,
            options: vec![ItemOption::new("Finished End Panel", "1")],
        }
    }

    #[test]
    fn test_line_subtotal() {
        let mut item = discounted_item();
        item.quantity = 2;
        assert_eq!(item.line_subtotal().cents(), 202222);
    }

    #[test]
    fn test_has_discount_requires_strictly_greater() {
        let mut item = discounted_item();
        assert!(item.has_discount());

        // Equal regular price is not a discount
        item.original_unit_price_cents = Some(item.unit_price_cents);
        assert!(!item.has_discount());

        // A regular price below the charged price is not a discount either
        item.original_unit_price_cents = Some(item.unit_price_cents - 1);
        assert!(!item.has_discount());

        item.original_unit_price_cents = None;
        assert!(!item.has_discount());
    }

    #[test]
    fn test_original_line_subtotal_only_when_discounted() {
        let mut item = discounted_item();
        item.quantity = 2;
        assert_eq!(item.original_line_subtotal().map(|m| m.cents()), Some(337036));

        item.original_unit_price_cents = None;
        assert_eq!(item.original_line_subtotal(), None);
    }

    #[test]
    fn test_adjustments_default_to_zero() {
        let adj = Adjustments::default();
        assert!(adj.shipping().is_zero());
        assert!(adj.tax().is_zero());
        assert!(adj.you_saved().is_zero());
        assert!(adj.additional_discount().is_zero());
        assert!(adj.redeem_points().is_zero());
        assert!(adj.coupons.is_empty());
    }

    #[test]
    fn test_line_item_wire_shape() {
        // The theme consumes camelCase JSON
        let json = serde_json::to_value(discounted_item()).unwrap();
        assert_eq!(json["unitPriceCents"], 101111);
        assert_eq!(json["originalUnitPriceCents"], 168518);
        assert_eq!(json["imageRef"], "base-cabinet.webp");
        assert_eq!(json["options"][0]["label"], "Finished End Panel");
    }
}
