//! # State Module
//!
//! Page-view state for the cart page.
//!
//! Two mutable concerns, deliberately kept apart: the cart itself and
//! the collapsible summary flags. They never interact, so they never
//! share a lock.

mod cart;
mod summary;

pub use cart::CartState;
pub use summary::{SummarySection, SummarySections, SummaryState};
