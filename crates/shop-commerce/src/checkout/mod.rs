//! Checkout payloads.

mod order;

pub use order::{OrderItem, OrderRequest};
