//! Catalog, cart and order types for the FakeShop storefront.
//!
//! - **Catalog**: the read-only `Product` record served by the mock API
//! - **Cart**: `CartState` and the session-scoped `CartStore` with observers
//! - **Checkout**: the `OrderRequest` payload posted when an order is placed
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let headphones = Product::new("wireless-headphones", "Wireless Headphones", Money::new(1000));
//! let store = CartStore::new();
//!
//! store.add_to_cart(&headphones);
//! store.add_to_cart(&headphones);
//!
//! assert_eq!(store.total_items(), 2);
//! assert_eq!(store.total_price().display(), "$20.00");
//! ```

pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    pub use crate::catalog::Product;

    pub use crate::cart::{CartLine, CartState, CartStore, SubscriptionId};

    pub use crate::checkout::{OrderItem, OrderRequest};
}
