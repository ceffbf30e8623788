//! Client-side routes.
//!
//! Every path is served the same empty shell; the route only decides which
//! page gets rendered into it afterwards.

use shop_commerce::ProductId;
use std::fmt;

/// A storefront route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail(ProductId),
    Cart,
    Checkout,
    /// Anything else; carries the normalized path.
    NotFound(String),
}

impl Route {
    /// Parse a request path. Query string, fragment and trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products,
            ["products", id] => Route::ProductDetail(ProductId::new(*id)),
            ["cart"] => Route::Cart,
            ["checkout"] => Route::Checkout,
            _ => Route::NotFound(format!("/{}", segments.join("/"))),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Message shown while the route's data loads, if it fetches anything.
    pub fn loading_message(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("Loading..."),
            Route::Products => Some("Loading products..."),
            Route::ProductDetail(_) => Some("Fetching product from API..."),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
