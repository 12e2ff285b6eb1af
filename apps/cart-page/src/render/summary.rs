//! Order summary panel: collapsible sections, totals rows, checkout
//! call-to-action, express options and trust badges.
//!
//! Row order matches the reference layout: You Saved, Subtotal,
//! Additional Discounts (with coupon chips), Shipping & Handling, Tax,
//! Grand Total. The You-Saved and Additional-Discounts rows only render
//! when their amounts are positive.

use oakline_core::CartTotals;

use crate::state::{SummarySection, SummarySections};

use super::{dollars, escape_html};

/// The full summary panel.
pub fn summary_panel(
    totals: &CartTotals,
    sections: &SummarySections,
    shipping_method: Option<&str>,
) -> String {
    format!(
        "<div class=\"cart-summary\">\n\
         <h2>Summary</h2>\n\
         {discount}\n\
         {points}\n\
         {estimate}\n\
         {totals}\n\
         <p class=\"cart-terms\">By placing your order, you agree to our \
         <a href=\"#\">terms and conditions</a>.</p>\n\
         <form method=\"post\" action=\"/checkout\">\n\
         <button type=\"submit\" class=\"checkout-button\">Checkout</button>\n\
         </form>\n\
         {express}\n\
         {trust}\n\
         </div>",
        discount = collapsible_section(
            SummarySection::DiscountCode,
            "Apply Discount Code",
            sections,
            "<input type=\"text\" name=\"discount_code\" placeholder=\"Enter discount code\">\n\
             <button type=\"button\">Apply</button>",
        ),
        points = collapsible_section(
            SummarySection::RedeemPoints,
            "Redeem Points",
            sections,
            "<p>Please login to use reward points.</p>",
        ),
        estimate = collapsible_section(
            SummarySection::ShippingEstimate,
            "Estimate Shipping and Tax",
            sections,
            "<p>Enter your destination to get a shipping estimate.</p>\n\
             <label>Country <select><option>United States</option><option>Canada</option>\
             </select></label>\n\
             <label>State/Province <select><option>Please select a region</option></select>\
             </label>\n\
             <label>Zip/Postal Code <input type=\"text\" placeholder=\"Enter zip code\">\
             </label>",
        ),
        totals = totals_rows(totals, shipping_method),
        express = express_options(),
        trust = trust_badges(),
    )
}

/// One collapsible section: a toggle form plus, when open, the body.
///
/// Each section's open flag is independent page state; the toggle posts
/// back and the page re-renders, the server-side analogue of the
/// prototype's click handler.
fn collapsible_section(
    section: SummarySection,
    title: &str,
    sections: &SummarySections,
    body: &str,
) -> String {
    let open = sections.is_open(section);
    let chevron = if open { "&#9650;" } else { "&#9660;" };
    let body = if open {
        format!("<div class=\"section-body\">{}</div>\n", body)
    } else {
        String::new()
    };

    format!(
        "<div class=\"summary-section\" id=\"section-{slug}\">\n\
         <form method=\"post\" action=\"/summary/toggle\">\n\
         <input type=\"hidden\" name=\"section\" value=\"{slug}\">\n\
         <button type=\"submit\" class=\"section-toggle\">{title} {chevron}</button>\n\
         </form>\n\
         {body}\
         </div>",
        slug = section.slug(),
        title = title,
        chevron = chevron,
        body = body,
    )
}

/// The totals block under the collapsible sections.
fn totals_rows(totals: &CartTotals, shipping_method: Option<&str>) -> String {
    let mut rows = String::from("<div class=\"summary-totals\">\n");

    if totals.you_saved_cents > 0 {
        rows.push_str(&format!(
            "<div class=\"summary-row you-saved\"><span>You Saved</span><span>{}</span></div>\n",
            dollars(totals.you_saved_cents)
        ));
    }

    rows.push_str(&format!(
        "<div class=\"summary-row subtotal\"><span>Subtotal</span><span>{}</span></div>\n",
        dollars(totals.subtotal_cents)
    ));

    if totals.additional_discount_cents > 0 {
        rows.push_str(&format!(
            "<div class=\"summary-row additional-discounts\">\
             <span>Additional Discounts</span><span>- {}</span></div>\n",
            dollars(totals.additional_discount_cents)
        ));
        if !totals.coupons.is_empty() {
            rows.push_str("<div class=\"coupon-chips\">\n");
            for coupon in &totals.coupons {
                rows.push_str(&format!(
                    "<span class=\"coupon-chip\" data-code=\"{}\">{}</span>\n",
                    escape_html(&coupon.code),
                    escape_html(&coupon.label)
                ));
            }
            rows.push_str("</div>\n");
        }
    }

    if totals.redeem_points_cents > 0 {
        rows.push_str(&format!(
            "<div class=\"summary-row redeem-points\">\
             <span>Redeemed Points</span><span>- {}</span></div>\n",
            dollars(totals.redeem_points_cents)
        ));
    }

    let method = match shipping_method {
        Some(method) => format!("<small>({})</small>", escape_html(method)),
        None => String::new(),
    };
    rows.push_str(&format!(
        "<div class=\"summary-row shipping\">\
         <span>Shipping &amp; Handling {}</span><span>{}</span></div>\n",
        method,
        totals.shipping_display()
    ));

    rows.push_str(&format!(
        "<div class=\"summary-row tax\"><span>Tax</span><span>{}</span></div>\n",
        dollars(totals.tax_cents)
    ));

    rows.push_str(&format!(
        "<div class=\"summary-row grand-total\"><span>Grand Total</span><span>{}</span></div>\n",
        dollars(totals.grand_total_cents)
    ));

    rows.push_str("</div>");
    rows
}

/// Express checkout placeholders. Each would initialize its provider's
/// flow in the full system.
fn express_options() -> String {
    let mut html = String::from(
        "<div class=\"express-checkout\">\n<p>Express Checkout Options</p>\n",
    );
    for option in [
        "Checkout with bread pay",
        "Checkout with Sezzle",
        "PayPal",
        "Check by mail",
        "Pay with multiple cards",
    ] {
        html.push_str(&format!(
            "<button type=\"button\" class=\"express-option\">{}</button>\n",
            option
        ));
    }
    html.push_str("</div>");
    html
}

/// Secure-checkout / verified-business badges.
fn trust_badges() -> String {
    "<div class=\"trust-badges\">\
     <span>Secure Checkout</span><span>Verified Business</span>\
     </div>"
        .to_string()
}
