//! Direct calls to the third-party payment API.
//!
//! Both calls carry the bundled secret key. From a browser they are refused
//! by the cross-origin policy; the storefront makes them anyway.

use serde::Serialize;
use shop_commerce::Money;
use shop_data::{FetchClient, FetchError, Response};

/// Form body of a charge request.
#[derive(Debug, Serialize)]
struct ChargeForm<'a> {
    amount: i64,
    currency: &'a str,
    source: &'a str,
}

/// Result of the cross-origin probe, as shown on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// `true` when the call failed, which is the expected outcome.
    pub blocked: bool,
    pub message: String,
}

/// Client for the payment provider's REST API.
#[derive(Clone)]
pub struct PaymentGateway {
    client: FetchClient,
    secret_key: Option<String>,
}

impl PaymentGateway {
    /// `client` must carry the provider base URL.
    pub fn new(client: FetchClient, secret_key: Option<String>) -> Self {
        Self { client, secret_key }
    }

    fn secret(&self) -> &str {
        self.secret_key.as_deref().unwrap_or("undefined")
    }

    /// Post a charge for `amount` paid with `card_number`.
    ///
    /// The caller discards whatever comes back.
    pub async fn charge(&self, card_number: &str, amount: Money) -> Result<Response, FetchError> {
        tracing::warn!(card = %mask_card(card_number), "card number handled in client code");
        tracing::warn!(secret_key = self.secret(), "using secret key from the bundle");

        let form = ChargeForm {
            amount: amount.amount_cents,
            currency: "usd",
            source: card_number,
        };

        self.client
            .post("/v1/charges")
            .bearer_auth(self.secret())
            .form(&form)?
            .send()
            .await
    }

    /// Call `GET /v1/products` and describe what happened.
    pub async fn probe(&self) -> ProbeReport {
        let result = self
            .client
            .get("/v1/products")
            .bearer_auth(self.secret())
            .send()
            .await
            .and_then(|response| response.json::<serde_json::Value>());

        match result {
            Ok(_) => ProbeReport {
                blocked: false,
                message: "Unexpected success - this should have failed!".to_string(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "external API probe failed");
                ProbeReport {
                    blocked: true,
                    message: format!(
                        "Cross-origin error: {}\n\n\
                         The browser blocks this request because {} does not send an \
                         Access-Control-Allow-Origin header.\n\n\
                         With server rendering, this call would run on the server where \
                         no such restriction applies.",
                        e,
                        self.client.base_url().unwrap_or("the payment API")
                    ),
                }
            }
        }
    }
}

/// Keep only the last four digits.
fn mask_card(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("**** {}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_data::mock::MockTransport;
    use shop_data::Method;
    use std::rc::Rc;

    fn gateway(mock: &Rc<MockTransport>) -> PaymentGateway {
        PaymentGateway::new(
            FetchClient::new(mock.clone()).with_base_url("https://pay.test"),
            Some("sk_live_demo".to_string()),
        )
    }

    #[tokio::test]
    async fn test_charge_sends_form_body_in_cents() {
        let mock = Rc::new(MockTransport::new().with_status(
            Method::Post,
            "https://pay.test/v1/charges",
            401,
            "{}",
        ));

        let response = gateway(&mock)
            .charge("4242 4242 4242 4242", Money::new(4500))
            .await
            .unwrap();
        assert_eq!(response.status, 401);

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("authorization"), Some("Bearer sk_live_demo"));
        assert_eq!(
            sent[0].header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            sent[0].body_text().unwrap(),
            "amount=4500&currency=usd&source=4242+4242+4242+4242"
        );
    }

    #[tokio::test]
    async fn test_probe_reports_blocked_request() {
        let mock = Rc::new(MockTransport::new().with_network_error(
            Method::Get,
            "https://pay.test/v1/products",
            "blocked by cross-origin policy",
        ));

        let report = gateway(&mock).probe().await;
        assert!(report.blocked);
        assert!(report.message.contains("blocked by cross-origin policy"));
        assert!(report.message.contains("https://pay.test"));
    }

    #[tokio::test]
    async fn test_probe_reports_unexpected_success() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Get,
            "https://pay.test/v1/products",
            r#"{"data": []}"#,
        ));

        let report = gateway(&mock).probe().await;
        assert!(!report.blocked);
        assert!(report.message.starts_with("Unexpected success"));
    }

    #[test]
    fn test_mask_card() {
        assert_eq!(mask_card("4242 4242 4242 4242"), "**** 4242");
        assert_eq!(mask_card("12"), "**** 12");
    }
}
