//! Shared page chrome.

use crate::html::escape_html;

/// Wrap a page body in the header, demo banner and footer.
pub fn render_layout(site_name: &str, cart_count: i64, body: &str) -> String {
    let site_name = escape_html(site_name);
    format!(
        r#"<div class="layout">
<header class="site-header">
    <a href="/" class="brand">{site_name}</a>
    <nav>
        <a href="/">Home</a>
        <a href="/products">Products</a>
        <a href="/cart" class="cart-badge" data-cart-count="{cart_count}">Cart ({cart_count})</a>
    </nav>
</header>
<div class="demo-banner">This is a client-side rendered app demonstrating SPA limitations. View source to see empty HTML!</div>
<main>
{body}
</main>
<footer class="site-footer">
    <p>{site_name} - A demo of client-side rendering limitations</p>
    <p>View the page source to see the empty HTML that search engines receive</p>
</footer>
</div>"#,
        site_name = site_name,
        cart_count = cart_count,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_shows_cart_count() {
        let html = render_layout("FakeShop", 3, "<p>body</p>");
        assert!(html.contains("Cart (3)"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("FakeShop - A demo"));
    }
}
