//! Landing page.

use super::{PageStatus, PageView};
use crate::api::CatalogClient;
use crate::config::SiteConfig;
use crate::head::SeoHead;
use crate::html::{escape_html, render_api_error};
use shop_commerce::catalog::Product;

/// Number of products featured on the landing page.
pub const FEATURED_COUNT: usize = 3;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1472851294608-062f824d29cc?w=1200";

/// Render the hero and the first few products.
pub async fn render_home(site: &SiteConfig, catalog: &CatalogClient) -> PageView {
    let seo = SeoHead::new(
        format!("{} - Premium Products for Everyone", site.name),
        format!(
            "Discover amazing products at {}. Electronics, accessories, and more with fast shipping.",
            site.name
        ),
    )
    .with_image(HERO_IMAGE);

    let (featured, status) = match catalog.list_products().await {
        Ok(products) => {
            let cards: String = products
                .iter()
                .take(FEATURED_COUNT)
                .map(render_featured_card)
                .collect();
            (
                format!(r#"<div class="product-grid">{}</div>"#, cards),
                PageStatus::Ready,
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "featured products unavailable");
            let message = e.to_string();
            (render_api_error(&message), PageStatus::ApiError(message))
        }
    };

    let body = format!(
        r#"<section class="hero">
    <h1>Welcome to {name}</h1>
    <p>Premium products. Unbeatable prices. (This is a demo)</p>
    <a href="/products" class="button">Shop Now</a>
</section>
<section class="featured">
    <h2>Featured Products</h2>
    {featured}
</section>"#,
        name = escape_html(&site.name),
        featured = featured
    );

    PageView {
        body,
        seo: Some(seo),
        status,
    }
}

fn render_featured_card(product: &Product) -> String {
    format!(
        r#"<a href="/products/{id}" class="product-card">
    <img src="{image}" alt="{name}">
    <h3>{name}</h3>
    <p class="price">{price}</p>
</a>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        price = product.price.display()
    )
}
