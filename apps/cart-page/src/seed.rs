//! # Seed Data
//!
//! The fixed cart a page view starts from. In the full system these
//! rows come from the cart backend and the adjustment amounts from the
//! coupon/shipping/rewards services; the reference page seeds them so
//! the whole derivation pipeline runs against representative numbers.
//!
//! Several rows carry a regular price above the charged price (catalog
//! sale pricing) so the strikethrough path renders, and two rows carry
//! multi-option configurations.

use oakline_core::{Adjustments, AppliedCoupon, ItemOption, LineItem};

/// Demo line items: a cabinet order with sample doors, base cabinets
/// and wall cabinets.
pub fn demo_line_items() -> Vec<LineItem> {
    vec![
        LineItem {
            id: "1".to_string(),
            name: "Harbor Oak Sample Door".to_string(),
            sku: Some("OAK-SD-001".to_string()),
            image_ref: "sample-door.webp".to_string(),
            unit_price_cents: 2000,
            original_unit_price_cents: None,
            quantity: 1,
            options: Vec::new(),
        },
        LineItem {
            id: "2".to_string(),
            name: "Harbor Oak 12\" 2-Drawer Base Cabinet with 1 Inner Drawer".to_string(),
            sku: Some("OAK-BC-1200".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 101111,
            original_unit_price_cents: Some(168518),
            quantity: 1,
            options: vec![ItemOption::new(
                "Finished End Panel (required for exposed sides)",
                "1",
            )],
        },
        LineItem {
            id: "3".to_string(),
            name: "Harbor Oak 12\" 2-Drawer Base Cabinet".to_string(),
            sku: Some("OAK-BC-1201".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 94427,
            original_unit_price_cents: Some(157378),
            quantity: 2,
            options: vec![ItemOption::new(
                "Finished End Panel (required for exposed sides)",
                "2",
            )],
        },
        LineItem {
            id: "4".to_string(),
            name: "Slate Shaker 18x15 Wall Cabinet".to_string(),
            sku: Some("SLT-W1830".to_string()),
            image_ref: "wall-cabinet.webp".to_string(),
            unit_price_cents: 160371,
            original_unit_price_cents: Some(267285),
            quantity: 1,
            options: vec![
                ItemOption::new("Hinged", "Left"),
                ItemOption::new("Matching Interior", "Yes"),
                ItemOption::new("Prepped for Glass Door (Glass Not Included)", "Yes"),
                ItemOption::new("Finished Sides", "Right Side"),
                ItemOption::new("Decreased Depth", "Decrease to 9\""),
            ],
        },
        LineItem {
            id: "5".to_string(),
            name: "Harbor Oak 36\" Sink Base Cabinet".to_string(),
            sku: Some("OAK-SB-3600".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 113430,
            original_unit_price_cents: Some(189050),
            quantity: 1,
            options: vec![ItemOption::new(
                "Finished End Panel (required for exposed sides)",
                "1",
            )],
        },
        LineItem {
            id: "6".to_string(),
            name: "Slate Shaker 30x30 Wall Cabinet".to_string(),
            sku: Some("SLT-W3030".to_string()),
            image_ref: "wall-cabinet.webp".to_string(),
            unit_price_cents: 194700,
            original_unit_price_cents: Some(324500),
            quantity: 1,
            options: vec![
                ItemOption::new("Hinged", "Right"),
                ItemOption::new("Matching Interior", "No"),
            ],
        },
        LineItem {
            id: "7".to_string(),
            name: "Harbor Oak 18\" 3-Drawer Base Cabinet".to_string(),
            sku: Some("OAK-BC-1802".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 103500,
            original_unit_price_cents: Some(172500),
            quantity: 1,
            options: vec![ItemOption::new(
                "Finished End Panel (required for exposed sides)",
                "2",
            )],
        },
        LineItem {
            id: "8".to_string(),
            name: "Harbor Oak Sample Door - White Oak".to_string(),
            sku: Some("OAK-SD-002".to_string()),
            image_ref: "sample-door.webp".to_string(),
            unit_price_cents: 2500,
            original_unit_price_cents: None,
            quantity: 1,
            options: Vec::new(),
        },
    ]
}

/// Demo adjustments: ground shipping, a savings banner, and two stacked
/// coupons behind the additional-discount amount. Tax stays zero until
/// the estimator is wired to a real rate service.
pub fn demo_adjustments() -> Adjustments {
    Adjustments {
        shipping_cents: 29900,
        tax_cents: 0,
        you_saved_cents: 43458,
        additional_discount_cents: 22592,
        redeem_points_cents: 0,
        coupons: vec![
            AppliedCoupon::new("TAKE10", "Take10"),
            AppliedCoupon::new("CONTRACTOR10", "Contractor 10% Off"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakline_core::{Cart, CartTotals};

    #[test]
    fn test_seed_ids_are_unique() {
        let items = demo_line_items();
        let cart = Cart::from_items(items.clone());
        // from_items drops repeats; an intact seed loses nothing
        assert_eq!(cart.line_count(), items.len());
    }

    #[test]
    fn test_seed_quantities_and_prices_are_valid() {
        for item in demo_line_items() {
            assert!(item.quantity >= 1, "{} has bad quantity", item.id);
            assert!(item.unit_price_cents >= 0, "{} has bad price", item.id);
        }
    }

    #[test]
    fn test_seed_mixes_discounted_and_regular_rows() {
        let items = demo_line_items();
        assert!(items.iter().any(|i| i.has_discount()));
        assert!(items.iter().any(|i| !i.has_discount()));
    }

    #[test]
    fn test_seed_totals() {
        let cart = Cart::from_items(demo_line_items());
        let totals = CartTotals::derive(&cart, &demo_adjustments());

        // 20 + 1,011.11 + 1,888.54 + 1,603.71 + 1,134.30 + 1,947.00
        //    + 1,035.00 + 25 = 8,664.66
        assert_eq!(totals.subtotal_cents, 866466);
        assert_eq!(totals.total_quantity, 9);
        // 8,664.66 - 225.92 + 299.00 + 0 = 8,737.74
        assert_eq!(totals.grand_total_cents, 873774);
        assert_eq!(totals.coupons.len(), 2);
    }
}
