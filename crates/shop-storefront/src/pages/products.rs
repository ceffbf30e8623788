//! Catalog listing.

use super::{PageStatus, PageView};
use crate::api::CatalogClient;
use crate::config::SiteConfig;
use crate::head::SeoHead;
use crate::html::{escape_html, render_api_error};
use shop_commerce::catalog::Product;

/// Render every product with an add-to-cart action.
pub async fn render_products(site: &SiteConfig, catalog: &CatalogClient) -> PageView {
    let seo = SeoHead::new(
        format!("All Products - {}", site.name),
        "Browse our complete collection of premium products.",
    );

    let (content, status) = match catalog.list_products().await {
        Ok(products) => {
            let cards: String = products.iter().map(render_product_card).collect();
            (
                format!(r#"<div class="product-grid">{}</div>"#, cards),
                PageStatus::Ready,
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "product list unavailable");
            let message = e.to_string();
            (render_api_error(&message), PageStatus::ApiError(message))
        }
    };

    PageView {
        body: format!("<h1>All Products</h1>\n{}", content),
        seo: Some(seo),
        status,
    }
}

fn render_product_card(product: &Product) -> String {
    format!(
        r#"<div class="product-card" data-product-id="{id}">
    <a href="/products/{id}"><img src="{image}" alt="{name}"></a>
    <a href="/products/{id}"><h3>{name}</h3></a>
    <p class="category">{category}</p>
    <p class="description">{description}</p>
    <div class="card-footer">
        <span class="price">{price}</span>
        <button data-action="add-to-cart" data-product-id="{id}">Add to Cart</button>
    </div>
</div>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        category = escape_html(&product.category),
        description = escape_html(&product.description),
        price = product.price.display()
    )
}
