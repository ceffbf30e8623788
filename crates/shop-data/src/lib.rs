//! HTTP client utilities for the FakeShop storefront.
//!
//! A small builder API over a pluggable [`Transport`]. The default transport
//! is `reqwest`; tests swap in [`mock::MockTransport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::FetchClient;
//!
//! let client = FetchClient::http().with_base_url("http://localhost:3001");
//!
//! let response = client.get("/products").send().await?;
//! let products: Vec<serde_json::Value> = if response.is_success() {
//!     response.json()?
//! } else {
//!     Vec::new()
//! };
//!
//! let created: serde_json::Value = client
//!     .post("/orders")
//!     .json(&order)?
//!     .send()
//!     .await?
//!     .json()?;
//! ```

mod error;
pub mod mock;
mod request;
mod response;
mod transport;

use std::rc::Rc;

pub use error::FetchError;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Rc<dyn Transport>,
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl FetchClient {
    /// Create a client over the given transport.
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: Vec::new(),
        }
    }

    /// Create a client that talks to the network through `reqwest`.
    pub fn http() -> Self {
        Self::new(Rc::new(ReqwestTransport::new()))
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = self.resolve(url.into());

        let mut builder = RequestBuilder::new(method, url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            transport: Rc::clone(&self.transport),
            builder,
        }
    }

    /// Join a relative path onto the base URL; absolute URLs pass through.
    pub fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                let path = url.trim_start_matches('/');
                format!("{}/{}", base.trim_end_matches('/'), path)
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    transport: Rc<dyn Transport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the request body as a URL-encoded form.
    pub fn form<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.form(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response. One attempt, no timeout.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build();
        let method = request.method;
        let url = request.url.clone();

        tracing::debug!(method = method.as_str(), %url, "sending request");
        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(method = method.as_str(), %url, status = response.status, "response received");
                Ok(response)
            }
            Err(e) => {
                tracing::debug!(method = method.as_str(), %url, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response, Transport};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn test_resolve_joins_base_url() {
        let client = FetchClient::http().with_base_url("http://localhost:3001/");
        assert_eq!(
            client.resolve("/products".to_string()),
            "http://localhost:3001/products"
        );
        assert_eq!(
            client.resolve("products/7".to_string()),
            "http://localhost:3001/products/7"
        );
        assert_eq!(
            client.resolve("https://api.stripe.com/v1/charges".to_string()),
            "https://api.stripe.com/v1/charges"
        );
    }

    #[tokio::test]
    async fn test_send_records_default_headers() {
        let mock = Rc::new(MockTransport::new().with_json(
            Method::Get,
            "http://api.test/products",
            "[]",
        ));
        let client = FetchClient::new(mock.clone())
            .with_base_url("http://api.test")
            .with_default_header("Accept", "application/json");

        let response = client.get("/products").send().await.unwrap();
        assert!(response.is_success());

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_unscripted_route_is_a_network_error() {
        let mock = Rc::new(MockTransport::new());
        let client = FetchClient::new(mock).with_base_url("http://api.test");

        let err = client.get("/products").send().await.unwrap_err();
        assert!(matches!(err, FetchError::RequestError(_)));
    }

    #[tokio::test]
    async fn test_reqwest_transport_rejects_bad_url() {
        let client = FetchClient::http();
        let err = client.get("not a url").send().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
