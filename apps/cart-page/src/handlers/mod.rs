//! # Handlers Module
//!
//! The page's route table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Route Table                                │
//! │                                                                     │
//! │  GET  /                        render the cart page                 │
//! │  POST /cart/quantity           set_quantity, redirect back          │
//! │  POST /cart/remove             remove_item, redirect back           │
//! │  POST /summary/toggle          flip a collapsible flag, redirect    │
//! │  POST /checkout                hand off to the checkout flow        │
//! │                                                                     │
//! │  GET    /api/cart              JSON cart snapshot (theme badge)     │
//! │  PUT    /api/cart/items/{id}   set_quantity, return snapshot        │
//! │  DELETE /api/cart/items/{id}   remove_item, return snapshot         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form posts serve the rendered page; the `/api` routes serve the
//! theme's script clients. Both funnel into the same two state
//! operations.

pub mod cart;
pub mod page;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use crate::AppState;

/// Builds the page router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::show_cart))
        .route("/cart/quantity", post(page::update_quantity))
        .route("/cart/remove", post(page::remove_item))
        .route("/summary/toggle", post(page::toggle_section))
        .route("/checkout", post(page::checkout))
        .route("/api/cart", get(cart::get_cart))
        .route(
            "/api/cart/items/{id}",
            put(cart::update_item).delete(cart::remove_item),
        )
        .with_state(state)
}
