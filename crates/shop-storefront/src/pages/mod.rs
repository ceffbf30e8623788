//! Page views.
//!
//! Each page renders an HTML fragment for the layout's `<main>` and names the
//! metadata it wants. Nothing here touches the document head; the caller
//! applies the metadata once the fragment is in place.

mod cart;
mod checkout;
mod home;
mod layout;
mod not_found;
mod product_detail;
mod products;

pub use cart::render_cart;
pub use checkout::render_checkout;
pub use home::render_home;
pub use layout::render_layout;
pub use not_found::render_not_found;
pub use product_detail::render_product_detail;
pub use products::render_products;

use crate::head::SeoHead;

/// What a page settled on after its data arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    Ready,
    /// The requested record or route does not exist.
    NotFound,
    /// A fetch failed; carries the displayed message.
    ApiError(String),
}

/// A rendered page body.
#[derive(Debug, Clone)]
pub struct PageView {
    pub body: String,
    /// `None` when the page renders no metadata for this state.
    pub seo: Option<SeoHead>,
    pub status: PageStatus,
}

impl PageView {
    pub fn ready(body: String, seo: SeoHead) -> Self {
        Self {
            body,
            seo: Some(seo),
            status: PageStatus::Ready,
        }
    }
}
