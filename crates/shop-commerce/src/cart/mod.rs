//! Shopping cart module.
//!
//! `CartState` is the plain value; `CartStore` owns it for a browsing session
//! and notifies subscribers after every mutation.

mod state;
mod store;

pub use state::{CartLine, CartState};
pub use store::{CartStore, SubscriptionId};
