//! Scripted in-memory transport for tests and offline demos.
//!
//! ```rust
//! use shop_data::mock::MockTransport;
//! use shop_data::Method;
//!
//! let mock = MockTransport::new()
//!     .with_json(Method::Get, "http://localhost:3001/products", "[]")
//!     .with_status(Method::Get, "http://localhost:3001/products/9", 404, "{}");
//! assert_eq!(mock.requests().len(), 0);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::{FetchError, Method, Request, Response, Transport};

/// Scripted reply for one route.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with a status and body.
    Respond { status: u16, body: Vec<u8> },
    /// Fail before any response, like a refused connection.
    NetworkError(String),
}

/// Transport that answers from a fixed route table and records every request.
///
/// Requests without a matching route fail with a connection error, so an
/// unscripted endpoint behaves like an unreachable host.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Vec<(Method, String, MockReply)>,
    requests: RefCell<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply 200 with a JSON body.
    pub fn with_json(self, method: Method, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_status(method, url, 200, body)
    }

    /// Reply with an explicit status.
    pub fn with_status(
        mut self,
        method: Method,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.routes.push((
            method,
            url.into(),
            MockReply::Respond {
                status,
                body: body.into().into_bytes(),
            },
        ));
        self
    }

    /// Fail the route with a network error.
    pub fn with_network_error(
        mut self,
        method: Method,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.routes
            .push((method, url.into(), MockReply::NetworkError(message.into())));
        self
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Requests sent to `url` with `method`.
    pub fn requests_to(&self, method: Method, url: &str) -> Vec<Request> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let reply = self
            .routes
            .iter()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, reply)| reply.clone());
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);

        match reply {
            Some(MockReply::Respond { status, body }) => {
                let mut headers = HashMap::new();
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Ok(Response::new(status, headers, body))
            }
            Some(MockReply::NetworkError(message)) => Err(FetchError::RequestError(message)),
            None => Err(FetchError::RequestError(format!(
                "error sending request for url ({}): connection refused",
                url
            ))),
        }
    }
}
