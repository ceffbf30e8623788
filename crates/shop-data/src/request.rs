//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully built request, handed to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Headers in insertion order; a later `header` call replaces an earlier
    /// one with the same (case-insensitive) name.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, if present.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            request: Request {
                method,
                url: url.into(),
                headers: Vec::new(),
                body: None,
            },
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.request
            .headers
            .retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        self.request.headers.push((key, value.into()));
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        Ok(self.content_type("application/json").body(json))
    }

    /// Set the request body as `application/x-www-form-urlencoded`.
    pub fn form<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, FetchError> {
        let encoded = serde_urlencoded::to_string(value)?;
        Ok(self
            .content_type("application/x-www-form-urlencoded")
            .body(encoded))
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Content-Type header.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Finish building.
    pub fn build(self) -> Request {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        let request = RequestBuilder::new(Method::Post, "http://api/orders")
            .json(&serde_json::json!({"email": "a@b.c"}))
            .unwrap()
            .build();

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body_text().as_deref(), Some(r#"{"email":"a@b.c"}"#));
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        let request = RequestBuilder::new(Method::Post, "https://pay/v1/charges")
            .form(&[("amount", "4500"), ("currency", "usd"), ("source", "4242 4242")])
            .unwrap()
            .build();

        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.body_text().as_deref(),
            Some("amount=4500&currency=usd&source=4242+4242")
        );
    }

    #[test]
    fn test_header_replaces_same_name() {
        let request = RequestBuilder::new(Method::Get, "http://api/products")
            .header("Accept", "text/html")
            .header("accept", "application/json")
            .bearer_auth("sk_test_123")
            .build();

        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Authorization"), Some("Bearer sk_test_123"));
    }
}
