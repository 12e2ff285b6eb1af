//! Item list rendering: column headers, one row per line item, and the
//! empty-cart state.
//!
//! Each row carries three small forms wired to the page's mutation
//! endpoints: decrement, increment, remove. The stepper posts
//! pre-clamped values (`max(1, qty-1)` on the minus side) exactly like
//! the prototype's controls; the state operation clamps again anyway.

use oakline_core::LineItem;

use super::{dollars, escape_html};

/// The whole item section: column headers plus one row per item.
pub fn item_list(items: &[LineItem]) -> String {
    let mut html = String::from(
        "<div class=\"cart-item-headers\">\n\
         <span>Item</span><span>Price</span><span>Qty</span><span>Subtotal</span>\n\
         </div>\n\
         <div class=\"cart-item-list\">\n",
    );
    for item in items {
        html.push_str(&item_row(item));
        html.push('\n');
    }
    html.push_str("</div>");
    html
}

/// Empty-cart state: no rows, no controls.
pub fn empty_state() -> String {
    "<div class=\"cart-empty\"><p>Your cart is empty.</p></div>".to_string()
}

/// One line-item row.
///
/// Discounted rows (regular price strictly above the charged price)
/// show the regular unit price and regular line subtotal struck
/// through, with the sale figures highlighted.
fn item_row(item: &LineItem) -> String {
    let sku = match &item.sku {
        Some(sku) => format!("<p class=\"cart-item-sku\">SKU: {}</p>\n", escape_html(sku)),
        None => String::new(),
    };

    let options: String = item
        .options
        .iter()
        .map(|opt| {
            format!(
                "<p class=\"cart-item-option\"><strong>{}:</strong> {}</p>\n",
                escape_html(&opt.label),
                escape_html(&opt.value)
            )
        })
        .collect();

    let unit_price = price_cell(
        item.has_discount(),
        item.original_unit_price().map(|m| m.cents()),
        item.unit_price_cents,
        "cart-item-price",
    );
    let line_subtotal = price_cell(
        item.has_discount(),
        item.original_line_subtotal().map(|m| m.cents()),
        item.line_subtotal().cents(),
        "cart-item-subtotal",
    );

    format!(
        "<div class=\"cart-item-row\" data-item-id=\"{id}\">\n\
         <div class=\"cart-item-details\">\n\
         <img src=\"/assets/{image}\" alt=\"{name}\" loading=\"lazy\">\n\
         <h3 class=\"cart-item-name\">{name}</h3>\n\
         {sku}{options}\
         </div>\n\
         {unit_price}\n\
         {stepper}\n\
         {line_subtotal}\n\
         {remove}\n\
         </div>",
        id = escape_html(&item.id),
        image = escape_html(&item.image_ref),
        name = escape_html(&item.name),
        sku = sku,
        options = options,
        unit_price = unit_price,
        stepper = quantity_stepper(item),
        line_subtotal = line_subtotal,
        remove = remove_button(&item.id),
    )
}

/// A price cell, with the strikethrough regular price above the sale
/// price when the row is discounted.
fn price_cell(discounted: bool, original_cents: Option<i64>, cents: i64, class: &str) -> String {
    let strikethrough = match (discounted, original_cents) {
        (true, Some(original)) => format!("<s class=\"regular-price\">{}</s>", dollars(original)),
        _ => String::new(),
    };
    let price_class = if discounted { "sale-price" } else { "price" };

    format!(
        "<div class=\"{}\">{}<span class=\"{}\">{}</span></div>",
        class,
        strikethrough,
        price_class,
        dollars(cents)
    )
}

/// The minus / count / plus stepper. Both buttons are forms posting the
/// next quantity; the minus side never posts below 1.
fn quantity_stepper(item: &LineItem) -> String {
    let id = escape_html(&item.id);
    let decremented = (item.quantity - 1).max(1);

    format!(
        "<div class=\"cart-item-qty\">\n\
         <form method=\"post\" action=\"/cart/quantity\">\n\
         <input type=\"hidden\" name=\"item_id\" value=\"{id}\">\n\
         <input type=\"hidden\" name=\"quantity\" value=\"{dec}\">\n\
         <button type=\"submit\" aria-label=\"Decrease quantity\">&minus;</button>\n\
         </form>\n\
         <span class=\"qty-value\">{qty}</span>\n\
         <form method=\"post\" action=\"/cart/quantity\">\n\
         <input type=\"hidden\" name=\"item_id\" value=\"{id}\">\n\
         <input type=\"hidden\" name=\"quantity\" value=\"{inc}\">\n\
         <button type=\"submit\" aria-label=\"Increase quantity\">+</button>\n\
         </form>\n\
         </div>",
        id = id,
        dec = decremented,
        qty = item.quantity,
        inc = item.quantity + 1,
    )
}

/// The remove-item form.
fn remove_button(id: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/cart/remove\" class=\"cart-item-remove\">\n\
         <input type=\"hidden\" name=\"item_id\" value=\"{}\">\n\
         <button type=\"submit\" aria-label=\"Remove item\">Remove</button>\n\
         </form>",
        escape_html(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakline_core::ItemOption;

    fn discounted_item() -> LineItem {
        LineItem {
            id: "2".to_string(),
            name: "Harbor Oak 12\" 2-Drawer Base Cabinet".to_string(),
            sku: Some("OAK-BC-1200".to_string()),
            image_ref: "base-cabinet.webp".to_string(),
            unit_price_cents: 101111,
            original_unit_price_cents: Some(168518),
            quantity: 1,
            options: vec![ItemOption::new("Finished End Panel", "1")],
        }
    }

    #[test]
    fn test_discounted_row_shows_strikethrough_and_sale_price() {
        let html = item_row(&discounted_item());
        assert!(html.contains("<s class=\"regular-price\">$1,685.18</s>"));
        assert!(html.contains("<span class=\"sale-price\">$1,011.11</span>"));
    }

    #[test]
    fn test_regular_row_has_no_strikethrough() {
        let mut item = discounted_item();
        item.original_unit_price_cents = None;
        let html = item_row(&item);
        assert!(!html.contains("regular-price"));
        assert!(html.contains("<span class=\"price\">$1,011.11</span>"));
    }

    #[test]
    fn test_equal_regular_price_is_not_a_discount() {
        let mut item = discounted_item();
        item.original_unit_price_cents = Some(item.unit_price_cents);
        let html = item_row(&item);
        assert!(!html.contains("regular-price"));
    }

    #[test]
    fn test_stepper_posts_clamped_decrement() {
        let mut item = discounted_item();
        item.quantity = 1;
        let html = item_row(&item);
        // At quantity 1 the minus side still posts 1, never 0
        assert!(html.contains("name=\"quantity\" value=\"1\""));
        assert!(html.contains("name=\"quantity\" value=\"2\""));
        assert!(!html.contains("name=\"quantity\" value=\"0\""));
    }

    #[test]
    fn test_line_subtotal_multiplies_quantity() {
        let mut item = discounted_item();
        item.quantity = 2;
        let html = item_row(&item);
        assert!(html.contains("$2,022.22")); // sale line subtotal
        assert!(html.contains("$3,370.36")); // regular line subtotal, struck
    }

    #[test]
    fn test_options_render_in_order() {
        let mut item = discounted_item();
        item.options = vec![
            ItemOption::new("Hinged", "Left"),
            ItemOption::new("Matching Interior", "Yes"),
        ];
        let html = item_row(&item);
        let hinged = html.find("Hinged").unwrap();
        let interior = html.find("Matching Interior").unwrap();
        assert!(hinged < interior);
    }

    #[test]
    fn test_sku_omitted_when_absent() {
        let mut item = discounted_item();
        item.sku = None;
        let html = item_row(&item);
        assert!(!html.contains("SKU:"));
    }
}
