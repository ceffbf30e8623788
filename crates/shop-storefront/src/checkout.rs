//! Checkout submission.
//!
//! Two calls in sequence. The payment attempt goes straight to the provider
//! and its outcome is dropped; the order is then created on the mock API and
//! only that result reaches the user.

use chrono::{DateTime, Utc};
use shop_commerce::cart::CartStore;
use shop_commerce::checkout::OrderRequest;

use crate::api::CatalogClient;
use crate::payment::PaymentGateway;

/// Notice shown after the order is stored.
pub const ORDER_CREATED_NOTICE: &str =
    "Order created! (Check db.json for the new order)\nPayment would have failed due to cross-origin restrictions.";

/// Values entered on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub email: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl CheckoutForm {
    /// Required-field check, the only validation the form has.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("card number", &self.card_number),
            ("expiry", &self.expiry),
            ("cvc", &self.cvc),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// What the user sees after submitting.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; no request was made.
    EmptyCart,
    /// Required fields were left blank; no request was made.
    MissingFields(Vec<&'static str>),
    /// The order was stored and the cart cleared.
    OrderCreated {
        order: serde_json::Value,
        notice: String,
    },
    /// Order creation failed; the cart is untouched.
    OrderFailed { message: String },
}

impl CheckoutOutcome {
    /// Text of the blocking notification, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            CheckoutOutcome::EmptyCart => None,
            CheckoutOutcome::MissingFields(fields) => {
                Some(format!("Please fill in: {}", fields.join(", ")))
            }
            CheckoutOutcome::OrderCreated { notice, .. } => Some(notice.clone()),
            CheckoutOutcome::OrderFailed { message } => Some(message.clone()),
        }
    }
}

/// Submit the checkout form for the current cart.
pub async fn submit_checkout(
    cart: &CartStore,
    catalog: &CatalogClient,
    payment: &PaymentGateway,
    form: &CheckoutForm,
    now: DateTime<Utc>,
) -> CheckoutOutcome {
    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        return CheckoutOutcome::EmptyCart;
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return CheckoutOutcome::MissingFields(missing);
    }

    let total = snapshot.total_price();
    tracing::warn!(email = %form.email, total = %total, "submitting checkout from client code");

    match payment.charge(&form.card_number, total).await {
        Ok(response) => tracing::debug!(status = response.status, "payment response ignored"),
        Err(e) => tracing::debug!(error = %e, "payment attempt failed, ignoring"),
    }

    let order = OrderRequest::from_cart(&snapshot, form.email.clone(), now);
    match catalog.create_order(&order).await {
        Ok(created) => {
            tracing::info!(items = order.items.len(), total = %total, "order created");
            cart.clear_cart();
            CheckoutOutcome::OrderCreated {
                order: created,
                notice: ORDER_CREATED_NOTICE.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "order creation failed");
            CheckoutOutcome::OrderFailed {
                message: format!("Order creation failed: {}", e),
            }
        }
    }
}
