//! Storefront error types.

use shop_data::FetchError;
use thiserror::Error;

/// Errors raised by the storefront outside of page rendering.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A catalog or order call failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// A product id did not resolve to a product.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}
