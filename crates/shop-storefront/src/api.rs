//! Catalog client for the mock API.

use shop_commerce::checkout::OrderRequest;
use shop_commerce::{catalog::Product, ProductId};
use shop_data::{FetchClient, FetchError};

/// Reads products and creates orders against the mock API.
///
/// One request per call: no retries, no caching, no timeouts.
#[derive(Clone)]
pub struct CatalogClient {
    client: FetchClient,
    secret_key: Option<String>,
}

impl CatalogClient {
    /// Create a catalog client. `client` must carry the API base URL.
    pub fn new(client: FetchClient) -> Self {
        Self {
            client,
            secret_key: None,
        }
    }

    /// Key sent as the bearer credential on order creation.
    pub fn with_secret_key(mut self, secret_key: Option<String>) -> Self {
        self.secret_key = secret_key;
        self
    }

    /// Fetch every product, in server order.
    ///
    /// A non-success status fails with "Failed to fetch products".
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.client.get("/products").send().await?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "product list request rejected");
            return Err(FetchError::HttpError {
                status: response.status,
                message: "Failed to fetch products".to_string(),
            });
        }

        let products: Vec<Product> = response.json()?;
        tracing::debug!(count = products.len(), "products loaded");
        Ok(products)
    }

    /// Fetch one product.
    ///
    /// Any non-success status, 404 or otherwise, is `Ok(None)`. Network
    /// failures are still errors.
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, FetchError> {
        let response = self
            .client
            .get(format!("/products/{}", id))
            .send()
            .await?;

        if !response.is_success() {
            tracing::debug!(product_id = %id, status = response.status, "product absent");
            return Ok(None);
        }

        response.json().map(Some)
    }

    /// Submit an order; the created record is returned as sent by the API.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<serde_json::Value, FetchError> {
        let secret = self.secret_key.as_deref().unwrap_or("undefined");
        tracing::warn!(secret_key = secret, "creating order with exposed API key");

        let response = self
            .client
            .post("/orders")
            .json(order)?
            .bearer_auth(secret)
            .send()
            .await?;

        if !response.is_success() {
            return Err(FetchError::HttpError {
                status: response.status,
                message: "Failed to create order".to_string(),
            });
        }

        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shop_commerce::cart::CartState;
    use shop_commerce::Money;
    use shop_data::mock::MockTransport;
    use shop_data::Method;
    use std::rc::Rc;

    const BASE: &str = "http://api.test";

    const PRODUCTS: &str = r#"[
        {"id": "1", "name": "Desk Lamp", "description": "Warm light", "price": 15, "image": "lamp.jpg", "category": "home", "stock": 4},
        {"id": "2", "name": "Kettle", "description": "Boils water", "price": 29.5, "image": "kettle.jpg", "category": "home", "stock": 0}
    ]"#;

    fn catalog(mock: &Rc<MockTransport>) -> CatalogClient {
        CatalogClient::new(FetchClient::new(mock.clone()).with_base_url(BASE))
    }

    #[tokio::test]
    async fn test_list_products_keeps_server_order() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Get,
            "http://api.test/products",
            PRODUCTS,
        ));

        let products = catalog(&mock).list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Desk Lamp");
        assert_eq!(products[1].price, Money::new(2950));
    }

    #[tokio::test]
    async fn test_list_products_rejects_error_status() {
        let mock = Rc::new(MockTransport::new().with_status(
            Method::Get,
            "http://api.test/products",
            500,
            "boom",
        ));

        let err = catalog(&mock).list_products().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Failed to fetch products"));
    }

    #[tokio::test]
    async fn test_get_product_error_status_is_absent() {
        let mock = Rc::new(
            MockTransport::new()
                .with_status(Method::Get, "http://api.test/products/missing-id", 404, "{}")
                .with_status(Method::Get, "http://api.test/products/broken", 503, ""),
        );
        let client = catalog(&mock);

        assert_eq!(client.get_product(&"missing-id".into()).await.unwrap(), None);
        assert_eq!(client.get_product(&"broken".into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_product_network_failure_is_an_error() {
        let mock = Rc::new(MockTransport::new());
        let result = catalog(&mock).get_product(&"1".into()).await;
        assert!(matches!(result, Err(FetchError::RequestError(_))));
    }

    #[tokio::test]
    async fn test_create_order_sends_bearer_and_payload() {
        let mock = Rc::new(MockTransport::new().with_status(
            Method::Post,
            "http://api.test/orders",
            201,
            r#"{"id": "o-1"}"#,
        ));
        let client = catalog(&mock).with_secret_key(Some("sk_live_demo".to_string()));

        let mut cart = CartState::new();
        cart.add(&Product::new("1", "Desk Lamp", Money::new(1500)));
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let order = OrderRequest::from_cart(&cart, "a@b.co", created_at);

        let created = client.create_order(&order).await.unwrap();
        assert_eq!(created["id"], "o-1");

        let sent = mock.requests_to(Method::Post, "http://api.test/orders");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("authorization"), Some("Bearer sk_live_demo"));
        let body: serde_json::Value =
            serde_json::from_str(&sent[0].body_text().unwrap()).unwrap();
        assert_eq!(body["email"], "a@b.co");
        assert_eq!(body["items"][0]["productId"], "1");
    }

    #[tokio::test]
    async fn test_create_order_rejected() {
        let mock = Rc::new(MockTransport::new().with_status(
            Method::Post,
            "http://api.test/orders",
            500,
            "",
        ));
        let order = OrderRequest::from_cart(&CartState::new(), "a@b.co", Utc::now());

        let err = catalog(&mock).create_order(&order).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
