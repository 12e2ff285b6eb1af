//! Static page chrome: store header, cart title, banners, footer.
//!
//! In the downstream theme these are CMS blocks or header templates;
//! here they are fixed markup so the page reads like the real thing.
//! The one data-driven piece is the header badge, which shows the
//! cart's unit count (not distinct lines).

use super::escape_html;

/// Site-wide navigation bar with the cart badge.
pub fn store_header(store_name: &str, unit_count: i64) -> String {
    let badge = if unit_count > 0 {
        format!("<span class=\"cart-badge\">{}</span>", unit_count)
    } else {
        String::new()
    };

    format!(
        "<header class=\"store-header\">\n\
         <a class=\"store-logo\" href=\"/\">{}</a>\n\
         <nav class=\"store-nav\">\n\
         <a href=\"#\">Shop Now</a>\n\
         <a href=\"#\">Design &amp; Services</a>\n\
         <a href=\"#\">Deals &amp; Financing</a>\n\
         <a href=\"#\">Resources</a>\n\
         <a href=\"#\">About</a>\n\
         </nav>\n\
         <div class=\"store-utilities\">\n\
         <a href=\"#\" aria-label=\"Search\">Search</a>\n\
         <a href=\"#\" aria-label=\"Account\">Account</a>\n\
         <a href=\"/\" aria-label=\"Cart\" class=\"cart-link\">Cart{}</a>\n\
         </div>\n\
         </header>",
        escape_html(store_name),
        badge
    )
}

/// Cart page title block.
pub fn cart_header() -> String {
    "<div class=\"cart-header\"><h1>Shopping Cart</h1></div>".to_string()
}

/// Action bar above the item list. Continue-shopping is a plain link;
/// the save/refresh actions are inert placeholders, as in the
/// prototype.
pub fn action_bar() -> String {
    "<div class=\"cart-actions\">\n\
     <a class=\"continue-shopping\" href=\"#\">Continue Shopping</a>\n\
     <span class=\"cart-actions-secondary\">\n\
     <a href=\"#\">Update Shopping Cart</a>\n\
     <a href=\"#\">Save Cart</a>\n\
     </span>\n\
     </div>"
        .to_string()
}

/// Protection-plan upsell banner above the item list.
pub fn protection_plan() -> String {
    "<div class=\"protection-plan\">\n\
     <p class=\"protection-plan-title\">Accident Protection Plan</p>\n\
     <p class=\"protection-plan-copy\">Protect your purchase from everyday life for 5 years \
     with our <s>$229</s> <strong>$149</strong> Platinum Full Replacement Plan.</p>\n\
     <a href=\"#\">See what&#39;s covered</a>\n\
     <button type=\"button\" class=\"protection-plan-add\">Add Now</button>\n\
     </div>"
        .to_string()
}

/// Price-match guarantee banner above the summary.
pub fn price_match_banner() -> String {
    "<div class=\"price-match-banner\">\n\
     <p class=\"price-match-title\">Price Match <em>Guarantee</em></p>\n\
     <p class=\"price-match-copy\">We&#39;ll Match Pricing 15 Days After Purchase</p>\n\
     </div>"
        .to_string()
}

/// Footer with the reviews line.
pub fn footer() -> String {
    "<footer class=\"store-footer\">\n\
     <p><strong>4.9</strong> ResellerRatings &middot; 3,400+ Reviews &middot; Verified Store</p>\n\
     </footer>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_counts_units() {
        let html = store_header("Oakline Cabinet Co.", 9);
        assert!(html.contains("<span class=\"cart-badge\">9</span>"));
    }

    #[test]
    fn test_badge_hidden_when_cart_empty() {
        let html = store_header("Oakline Cabinet Co.", 0);
        assert!(!html.contains("cart-badge"));
    }

    #[test]
    fn test_store_name_escaped() {
        let html = store_header("Smith & Sons", 1);
        assert!(html.contains("Smith &amp; Sons"));
    }
}
