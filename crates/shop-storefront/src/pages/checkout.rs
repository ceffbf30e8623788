//! Checkout page.

use super::PageView;
use crate::config::StorefrontConfig;
use crate::head::SeoHead;
use crate::html::escape_html;
use crate::payment::ProbeReport;
use shop_commerce::cart::CartState;

/// Render the exposed-configuration panel, the probe panel and the payment form.
pub fn render_checkout(
    config: &StorefrontConfig,
    cart: &CartState,
    probe: Option<&ProbeReport>,
) -> PageView {
    let seo = SeoHead::new(
        format!("Checkout - {}", config.site.name),
        "Complete your purchase",
    );

    let body = format!(
        "<h1>Checkout</h1>\n{}\n{}\n{}",
        render_exposed_config(config),
        render_probe_panel(config, probe),
        render_form(cart)
    );

    PageView::ready(body, seo)
}

fn render_exposed_config(config: &StorefrontConfig) -> String {
    let width = config
        .exposed_values()
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let values: String = config
        .exposed_values()
        .iter()
        .map(|(name, value)| format!("{:width$} = \"{}\"\n", name, escape_html(value), width = width))
        .collect();

    format!(
        r#"<section class="problem exposed-secrets">
    <h2>Problem 1: API Keys Exposed in Bundle</h2>
    <p>These values from the configuration are bundled into the client:</p>
    <pre>{values}</pre>
    <p class="warning">Attackers can extract and abuse these keys!</p>
</section>"#,
        values = values
    )
}

fn render_probe_panel(config: &StorefrontConfig, probe: Option<&ProbeReport>) -> String {
    let host = config
        .payment
        .base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    let report = probe
        .map(|r| format!("\n    <pre class=\"probe-result\">{}</pre>", escape_html(&r.message)))
        .unwrap_or_default();

    format!(
        r#"<section class="problem cross-origin">
    <h2>Problem 2: Cross-Origin Policy Blocks External API Calls</h2>
    <p>Try calling the payment API directly from the client:</p>
    <button data-action="probe">Call {host}/v1/products</button>{report}
</section>"#,
        host = escape_html(host),
        report = report
    )
}

fn render_form(cart: &CartState) -> String {
    if cart.is_empty() {
        return r#"<div class="checkout-empty">
    <p>Your cart is empty. Add some items first!</p>
</div>"#
            .to_string();
    }

    let summary: String = cart
        .lines()
        .iter()
        .map(|line| {
            format!(
                r#"<div class="row"><span>{} x {}</span><span>{}</span></div>"#,
                escape_html(&line.product.name),
                line.quantity,
                line.total().display()
            )
        })
        .collect();
    let total = cart.total_price().display();

    format!(
        r#"<div class="checkout-form">
    <h2>Payment Details</h2>
    <div class="warning">
        <strong>Warning:</strong> Don't enter real card info! Everything entered here is visible in logs and network traffic.
    </div>
    <form data-action="checkout">
        <label for="email">Email</label>
        <input type="email" id="email" name="email" placeholder="your@email.com" required>
        <label for="card">Card Number</label>
        <input type="text" id="card" name="card_number" placeholder="4242 4242 4242 4242" required>
        <label for="expiry">Expiry</label>
        <input type="text" id="expiry" name="expiry" placeholder="MM/YY" required>
        <label for="cvc">CVC</label>
        <input type="text" id="cvc" name="cvc" placeholder="123" required>
        <div class="order-summary">
            <h3>Order Summary</h3>
            {summary}
            <div class="row total"><span>Total</span><span>{total}</span></div>
        </div>
        <button type="submit">Pay {total}</button>
    </form>
</div>"#,
        summary = summary,
        total = total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::catalog::Product;
    use shop_commerce::Money;

    #[test]
    fn test_exposes_configured_secrets() {
        let mut config = StorefrontConfig::default();
        config.payment.secret_key = Some("sk_live_51Hdemo".to_string());

        let view = render_checkout(&config, &CartState::new(), None);
        assert!(view.body.contains("sk_live_51Hdemo"));
        assert!(view.body.contains("Call api.stripe.com/v1/products"));
        assert!(view.body.contains("Your cart is empty. Add some items first!"));
    }

    #[test]
    fn test_form_shows_summary_and_pay_button() {
        let mut cart = CartState::new();
        cart.add(&Product::new("1", "Desk Lamp", Money::new(1500)));
        cart.set_quantity(&"1".into(), 3);

        let view = render_checkout(&StorefrontConfig::default(), &cart, None);
        assert!(view.body.contains("Desk Lamp x 3"));
        assert!(view.body.contains("Pay $45.00"));
    }

    #[test]
    fn test_probe_result_rendered() {
        let report = ProbeReport {
            blocked: true,
            message: "Cross-origin error: <blocked>".to_string(),
        };
        let view = render_checkout(&StorefrontConfig::default(), &CartState::new(), Some(&report));
        assert!(view.body.contains("Cross-origin error: &lt;blocked&gt;"));
    }
}
