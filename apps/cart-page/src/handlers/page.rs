//! # Page Handlers
//!
//! The server-rendered side of the cart: one GET that renders the whole
//! page from a consistent snapshot, form posts that run the two cart
//! mutations and the summary toggle, and the checkout exit action.
//!
//! Mutations redirect back to `/` so the browser lands on a freshly
//! derived page (post/redirect/get). Unknown item ids are silent
//! no-ops by design: ids come from the page's own markup, so a miss
//! means a stale form, and failing the request would only break the
//! back button.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use oakline_core::{CartTotals, LineItem};

use crate::error::ApiError;
use crate::render;
use crate::state::SummarySection;
use crate::AppState;

/// Quantity stepper form body.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub item_id: String,
    pub quantity: i64,
}

/// Remove-item form body.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub item_id: String,
}

/// Collapsible-section toggle form body.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub section: String,
}

/// What the checkout flow receives: the grand total plus the line-item
/// sequence, nothing more. The receiving side defines its own contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutHandoff {
    pub grand_total_cents: i64,
    pub items: Vec<LineItem>,
}

/// Renders the cart page.
pub async fn show_cart(State(state): State<Arc<AppState>>) -> Html<String> {
    debug!("render cart page");
    let sections = state.summary.snapshot();
    let html = state.cart.with_cart(|cart| {
        let totals = CartTotals::derive(cart, &state.adjustments);
        render::page(&state.config, cart.items(), &totals, &sections)
    });
    Html(html)
}

/// Applies a quantity change from the stepper and re-renders via
/// redirect. The state operation clamps, so a hand-crafted post with
/// quantity 0 lands on 1 instead of an error.
pub async fn update_quantity(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuantityForm>,
) -> Redirect {
    let changed = state
        .cart
        .with_cart_mut(|cart| cart.set_quantity(&form.item_id, form.quantity));
    debug!(
        item_id = %form.item_id,
        quantity = form.quantity,
        changed,
        "quantity post"
    );
    Redirect::to("/")
}

/// Removes a line item and re-renders via redirect.
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RemoveForm>,
) -> Redirect {
    let removed = state
        .cart
        .with_cart_mut(|cart| cart.remove_item(&form.item_id));
    debug!(item_id = %form.item_id, removed, "remove post");
    Redirect::to("/")
}

/// Flips one collapsible summary section. An unknown section name is a
/// real client error (the page only ever posts the three known slugs),
/// so it gets a 400 rather than a silent pass.
pub async fn toggle_section(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ToggleForm>,
) -> Result<Redirect, ApiError> {
    let section: SummarySection = form
        .section
        .parse()
        .map_err(|_| ApiError::validation(format!("unknown summary section: {}", form.section)))?;

    let open = state.summary.toggle(section);
    debug!(section = section.slug(), open, "summary toggle");
    Ok(Redirect::to("/"))
}

/// The single exit action: hands the grand total and the line items to
/// the external checkout flow.
pub async fn checkout(State(state): State<Arc<AppState>>) -> Json<CheckoutHandoff> {
    let handoff = state.cart.with_cart(|cart| {
        let totals = CartTotals::derive(cart, &state.adjustments);
        CheckoutHandoff {
            grand_total_cents: totals.grand_total_cents,
            items: cart.items().to_vec(),
        }
    });

    info!(
        grand_total_cents = handoff.grand_total_cents,
        lines = handoff.items.len(),
        "checkout handoff"
    );

    // TODO: forward the handoff to the hosted checkout once its endpoint
    // is provisioned; until then the payload is returned to the caller.
    Json(handoff)
}
