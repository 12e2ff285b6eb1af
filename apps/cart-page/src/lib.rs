//! # Cart Page Library
//!
//! The page container for the Oakline cart: it owns the one cart
//! instance of a page view and turns user interactions into the two
//! mutation operations the core exposes.
//!
//! ## Module Organization
//! ```text
//! cart_page/
//! ├── lib.rs          ◄─── You are here (router setup & run)
//! ├── config.rs       ◄─── Env-var page configuration
//! ├── error.rs        ◄─── API error type for handlers
//! ├── seed.rs         ◄─── Demo cart + adjustments (backend stand-in)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state behind a mutex
//! │   └── summary.rs  ◄─── Collapsible-section flags
//! ├── handlers/
//! │   ├── mod.rs      ◄─── Route table
//! │   ├── page.rs     ◄─── HTML page + form posts + checkout
//! │   └── cart.rs     ◄─── JSON cart API for the theme
//! └── render/         ◄─── HTML builders for the page pieces
//! ```
//!
//! ## State Management
//! Each concern gets its own focused state type instead of one grab-bag
//! struct: `CartState` (mutable, mutex-guarded), `SummaryState`
//! (mutable, independent of totals), and read-only `Adjustments` +
//! `PageConfig` shared by value inside the `Arc<AppState>`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod seed;
pub mod state;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use oakline_core::Adjustments;

use crate::config::PageConfig;
use crate::state::{CartState, SummaryState};

/// Everything the handlers need, registered once with the router.
///
/// ## Thread Safety
/// - `cart`: protected by a mutex inside `CartState`
/// - `summary`: protected by a mutex inside `SummaryState`
/// - `adjustments`, `config`: read-only after startup
pub struct AppState {
    pub cart: CartState,
    pub summary: SummaryState,
    pub adjustments: Adjustments,
    pub config: PageConfig,
}

impl AppState {
    /// Assembles the state for one page view.
    pub fn new(config: PageConfig, cart: CartState, adjustments: Adjustments) -> Arc<Self> {
        Arc::new(AppState {
            cart,
            summary: SummaryState::new(),
            adjustments,
            config,
        })
    }

    /// State seeded with the demo cart, as used by `run` and the tests.
    pub fn demo(config: PageConfig) -> Arc<Self> {
        AppState::new(
            config,
            CartState::from_items(seed::demo_line_items()),
            seed::demo_adjustments(),
        )
    }
}

/// Initializes tracing with an env-filter.
///
/// Default level is INFO; override with RUST_LOG (e.g.
/// `RUST_LOG=cart_page=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Runs the cart page server until the process is stopped.
///
/// ## Startup Sequence
/// 1. Load configuration from the environment
/// 2. Seed the cart (stand-in for the live cart backend)
/// 3. Build the router and bind the listener
/// 4. Serve
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = PageConfig::from_env()?;
    let bind_addr = config.bind_address();

    let state = AppState::demo(config);
    info!(
        lines = state.cart.with_cart(|c| c.line_count()),
        "Cart seeded"
    );

    let app = handlers::router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Cart page listening");
    axum::serve(listener, app).await?;

    Ok(())
}
