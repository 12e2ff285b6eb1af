//! # Cart API Handlers
//!
//! The JSON face of the cart, for the theme's script clients (badge
//! refresh, mini-cart sections). Every response is the full cart
//! snapshot, items plus derived totals, taken inside one lock scope,
//! so a client never sees a half-applied mutation.
//!
//! The mutation endpoints mirror the form posts: unknown ids are
//! no-ops that still return the (unchanged) snapshot, and quantities
//! clamp instead of erroring. Idempotent retries are therefore safe.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use oakline_core::{Adjustments, Cart, CartTotals, LineItem};

use crate::AppState;

/// Cart snapshot: items and the totals derived from them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl CartResponse {
    /// Builds a snapshot from the cart and the page's adjustments.
    fn snapshot(cart: &Cart, adjustments: &Adjustments) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::derive(cart, adjustments),
        }
    }
}

/// Quantity update request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Returns the current cart snapshot.
pub async fn get_cart(State(state): State<Arc<AppState>>) -> Json<CartResponse> {
    debug!("api get cart");
    Json(
        state
            .cart
            .with_cart(|cart| CartResponse::snapshot(cart, &state.adjustments)),
    )
}

/// Sets a line item's quantity and returns the updated snapshot.
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartResponse> {
    let response = state.cart.with_cart_mut(|cart| {
        let changed = cart.set_quantity(&id, request.quantity);
        debug!(item_id = %id, quantity = request.quantity, changed, "api quantity update");
        CartResponse::snapshot(cart, &state.adjustments)
    });
    Json(response)
}

/// Removes a line item and returns the updated snapshot.
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<CartResponse> {
    let response = state.cart.with_cart_mut(|cart| {
        let removed = cart.remove_item(&id);
        debug!(item_id = %id, removed, "api remove");
        CartResponse::snapshot(cart, &state.adjustments)
    });
    Json(response)
}
