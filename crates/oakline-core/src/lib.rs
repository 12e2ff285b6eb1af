//! # oakline-core: Pure Business Logic for the Oakline Cart Page
//!
//! This crate is the **heart** of the cart page. It holds the line-item
//! list and derives every displayed number from it, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Oakline Cart Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Server-Rendered Theme (HTML)                │   │
//! │  │    Store Header ──► Item Rows ──► Summary ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ form posts / JSON                  │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 apps/cart-page (axum handlers)              │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ oakline-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐   │   │
//! │  │   │  types   │  │  money   │  │   cart   │  │  totals  │   │   │
//! │  │   │ LineItem │  │  Money   │  │   Cart   │  │CartTotals│   │   │
//! │  │   │ Adjustmts│  │ grouping │  │ mutations│  │ derive   │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, Adjustments, coupons)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart container and its two mutation operations
//! - [`totals`] - Totals derivation (subtotal, unit count, grand total)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic
//! 2. **Integer Money**: All monetary values are cents (i64)
//! 3. **Total Operations**: Mutations clamp and no-op instead of failing;
//!    totals derivation has no error path at all
//!
//! ## Example Usage
//!
//! ```rust
//! use oakline_core::{Adjustments, Cart, CartTotals, LineItem, Money};
//!
//! let cart = Cart::from_items(vec![LineItem {
//!     id: "1".into(),
//!     name: "Shaker Sample Door".into(),
//!     sku: Some("OAK-SD-001".into()),
//!     image_ref: "sample-door.webp".into(),
//!     unit_price_cents: 2000,
//!     original_unit_price_cents: None,
//!     quantity: 2,
//!     options: Vec::new(),
//! }]);
//!
//! let totals = CartTotals::derive(&cart, &Adjustments::default());
//! assert_eq!(totals.subtotal_cents, 4000);
//! assert_eq!(Money::from_cents(totals.grand_total_cents).grouped(), "40.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod money;
pub mod totals;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use oakline_core::Money` instead of
// `use oakline_core::money::Money`

pub use cart::Cart;
pub use money::Money;
pub use totals::CartTotals;
pub use types::{Adjustments, AppliedCoupon, ItemOption, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum quantity a line item can hold. Decrements clamp here instead
/// of removing the item; removal is its own explicit operation.
pub const MIN_LINE_QUANTITY: i64 = 1;

/// Maximum quantity of a single line item.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
