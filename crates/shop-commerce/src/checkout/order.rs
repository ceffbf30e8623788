//! Order payload posted to the mock API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartState;
use crate::ids::ProductId;
use crate::money::Money;

/// One ordered product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Body of `POST /orders`.
///
/// ```json
/// { "items": [{ "productId": "1", "quantity": 2 }], "total": 45.0,
///   "email": "a@b.c", "createdAt": "2024-05-01T12:00:00.000Z" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    /// Cart total in currency units.
    pub total: Money,
    pub email: String,
    /// RFC 3339 timestamp, UTC, millisecond precision.
    pub created_at: String,
}

impl OrderRequest {
    /// Build an order from the cart contents at `created_at`.
    pub fn from_cart(cart: &CartState, email: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total: cart.total_price(),
            email: email.into(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
