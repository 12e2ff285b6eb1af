//! # Render Module
//!
//! HTML builders for the cart page. Pure functions from view data to
//! markup strings; the downstream theme owns all styling, so the
//! markup carries stable class names and nothing else.
//!
//! ## Page Structure
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ store header (badge = unit count)               │
//! ├─────────────────────────────────────────────────┤
//! │ "Shopping Cart" page header                     │
//! ├──────────────────────┬──────────────────────────┤
//! │ action bar           │                          │
//! │ protection plan      │ price-match banner       │
//! │ item rows / empty    │ order summary            │
//! ├──────────────────────┴──────────────────────────┤
//! │ footer                                          │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! One canonical layout: the prototype's near-duplicate design
//! iterations collapse into this single presentation.

mod chrome;
mod items;
mod summary;

use oakline_core::{CartTotals, LineItem, Money};

use crate::config::PageConfig;
use crate::state::SummarySections;

pub use chrome::{cart_header, footer, price_match_banner, protection_plan, store_header};
pub use items::{empty_state, item_list};
pub use summary::summary_panel;

/// Renders the complete cart page from one consistent snapshot.
pub fn page(
    config: &PageConfig,
    items: &[LineItem],
    totals: &CartTotals,
    sections: &SummarySections,
) -> String {
    let main_column = if items.is_empty() {
        empty_state()
    } else {
        format!("{}{}", protection_plan(), item_list(items))
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Shopping Cart | {store}</title>\n\
         </head>\n\
         <body>\n\
         {header}\n\
         <main class=\"cart-page\">\n\
         {cart_header}\n\
         <div class=\"cart-columns\">\n\
         <section class=\"cart-items-column\" aria-label=\"Cart items\">\n\
         {action_bar}\n\
         {main_column}\n\
         </section>\n\
         <aside class=\"cart-summary-column\">\n\
         {price_match}\n\
         {summary}\n\
         </aside>\n\
         </div>\n\
         </main>\n\
         {footer}\n\
         </body>\n\
         </html>\n",
        store = escape_html(&config.store_name),
        header = store_header(&config.store_name, totals.total_quantity),
        cart_header = cart_header(),
        action_bar = chrome::action_bar(),
        main_column = main_column,
        price_match = price_match_banner(),
        summary = summary_panel(totals, sections, config.shipping_method.as_deref()),
        footer = footer(),
    )
}

/// Formats a cents amount the way the page displays money: `$` plus
/// the grouped two-decimal string.
pub(crate) fn dollars(cents: i64) -> String {
    format!("${}", Money::from_cents(cents).grouped())
}

/// Escapes a data-driven string for HTML text or attribute position.
/// Product names carry `"` inch marks, so this is not optional.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
