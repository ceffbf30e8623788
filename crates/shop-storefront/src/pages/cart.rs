//! Cart page.

use super::PageView;
use crate::config::SiteConfig;
use crate::head::SeoHead;
use crate::html::escape_html;
use shop_commerce::cart::{CartLine, CartState};

/// Render the cart lines and the order summary.
///
/// The +/- buttons carry the quantity they set; a quantity of zero removes
/// the line.
pub fn render_cart(site: &SiteConfig, cart: &CartState) -> PageView {
    let seo = SeoHead::new(
        format!("Your Cart - {}", site.name),
        "Review items in your shopping cart",
    );

    let heading = format!("<h1>Shopping Cart ({} items)</h1>", cart.total_items());

    if cart.is_empty() {
        let body = format!(
            r#"{}
<div class="cart-empty">
    <p>Your cart is empty</p>
    <a href="/products" class="button">Continue Shopping</a>
</div>"#,
            heading
        );
        return PageView::ready(body, seo);
    }

    let lines: String = cart.lines().iter().map(render_line).collect();
    let total = cart.total_price().display();

    let body = format!(
        r#"{heading}
<div class="cart">
    <div class="cart-lines">{lines}</div>
    <div class="cart-summary">
        <div class="row"><span>Subtotal</span><span>{total}</span></div>
        <div class="row"><span>Shipping</span><span>Free</span></div>
        <div class="row total"><span>Total</span><span>{total}</span></div>
        <a href="/checkout" class="button">Proceed to Checkout</a>
    </div>
</div>"#,
        heading = heading,
        lines = lines,
        total = total
    );

    PageView::ready(body, seo)
}

fn render_line(line: &CartLine) -> String {
    let product = &line.product;
    let id = escape_html(product.id.as_str());
    format!(
        r#"<div class="cart-line" data-product-id="{id}">
    <img src="{image}" alt="{name}">
    <div class="line-info">
        <a href="/products/{id}">{name}</a>
        <p>{price} each</p>
    </div>
    <div class="quantity">
        <button data-action="update-quantity" data-product-id="{id}" data-quantity="{minus}">-</button>
        <span>{quantity}</span>
        <button data-action="update-quantity" data-product-id="{id}" data-quantity="{plus}">+</button>
    </div>
    <p class="line-total">{line_total}</p>
    <button data-action="remove-from-cart" data-product-id="{id}">&times;</button>
</div>"#,
        id = id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        price = product.price.display(),
        minus = line.quantity.saturating_sub(1),
        plus = line.quantity.saturating_add(1),
        quantity = line.quantity,
        line_total = line.total().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::catalog::Product;
    use shop_commerce::Money;

    #[test]
    fn test_empty_cart() {
        let view = render_cart(&SiteConfig::default(), &CartState::new());
        assert!(view.body.contains("Your cart is empty"));
        assert!(view.body.contains("Shopping Cart (0 items)"));
    }

    #[test]
    fn test_cart_lines_and_totals() {
        let mut cart = CartState::new();
        let lamp = Product::new("1", "Desk Lamp", Money::new(1500));
        cart.add(&lamp);
        cart.add(&lamp);
        cart.add(&Product::new("2", "Mug", Money::new(1500)));

        let view = render_cart(&SiteConfig::default(), &cart);
        assert!(view.body.contains("Shopping Cart (3 items)"));
        assert!(view.body.contains("$15.00 each"));
        assert!(view.body.contains(r#"data-quantity="1">-</button>"#));
        assert!(view.body.contains(r#"data-quantity="3">+</button>"#));
        assert!(view.body.contains("<span>Total</span><span>$45.00</span>"));
        assert_eq!(view.seo.unwrap().title, "Your Cart - FakeShop");
    }

    #[test]
    fn test_huge_quantity_does_not_overflow() {
        let mut cart = CartState::new();
        let lamp = Product::new("1", "Desk Lamp", Money::new(1500));
        cart.add(&lamp);
        cart.set_quantity(&lamp.id, i64::MAX);
        cart.add(&Product::new("2", "Mug", Money::new(1500)));

        let view = render_cart(&SiteConfig::default(), &cart);
        let max = i64::MAX.to_string();
        assert!(view.body.contains(&format!(r#"data-quantity="{}">+</button>"#, max)));
        assert!(view.body.contains(&format!("Shopping Cart ({} items)", max)));
    }
}
