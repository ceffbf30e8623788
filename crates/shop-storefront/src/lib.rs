//! FakeShop storefront.
//!
//! A client-rendered shop: every route is served the same empty document, pages
//! fetch their data after load, and metadata is written into the head once a
//! page has rendered. Secrets from the configuration travel with the client and
//! the checkout calls the payment provider directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_storefront::{Storefront, StorefrontConfig};
//!
//! let shop = Storefront::http(StorefrontConfig::default());
//! let page = shop.navigate("/products").await;
//! println!("{}", page.html);
//! println!("{}", shop.document().render_head());
//! ```

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod head;
pub mod html;
pub mod pages;
pub mod payment;
pub mod route;

mod app;

pub use api::CatalogClient;
pub use app::{RenderedPage, Storefront};
pub use checkout::{CheckoutForm, CheckoutOutcome};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use head::{Document, MetaKey, SeoHead};
pub use pages::PageStatus;
pub use payment::{PaymentGateway, ProbeReport};
pub use route::Route;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogClient, CheckoutForm, CheckoutOutcome, Document, PageStatus, RenderedPage, Route,
        SeoHead, Storefront, StorefrontConfig, StorefrontError,
    };
    pub use shop_commerce::prelude::*;
}
