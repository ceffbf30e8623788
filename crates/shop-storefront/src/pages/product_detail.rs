//! Product detail page.

use super::{PageStatus, PageView};
use crate::api::CatalogClient;
use crate::config::SiteConfig;
use crate::head::SeoHead;
use crate::html::{escape_html, render_api_error};
use shop_commerce::catalog::Product;
use shop_commerce::ProductId;

/// Maximum number of related products shown.
pub const RELATED_LIMIT: usize = 3;

/// Render one product with related products from the same category.
///
/// The product and the full list are fetched together and nothing renders
/// until both settle.
pub async fn render_product_detail(
    site: &SiteConfig,
    catalog: &CatalogClient,
    id: &ProductId,
) -> PageView {
    let (product, all) = futures::join!(catalog.get_product(id), catalog.list_products());

    let (product, all) = match (product, all) {
        (Ok(product), Ok(all)) => (product, all),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(product_id = %id, error = %e, "product detail unavailable");
            let message = e.to_string();
            return PageView {
                body: render_api_error(&message),
                seo: None,
                status: PageStatus::ApiError(message),
            };
        }
    };

    let Some(product) = product else {
        tracing::debug!(product_id = %id, "product not found");
        return PageView {
            body: render_missing(),
            seo: None,
            status: PageStatus::NotFound,
        };
    };

    let related = product.related(&all, RELATED_LIMIT);
    tracing::debug!(product_id = %id, related = related.len(), "rendering product detail");

    let seo = SeoHead::new(
        format!("{} - {}", product.name, site.name),
        product.description.clone(),
    )
    .with_image(product.image.clone())
    .with_og_type("product")
    .with_canonical_url(format!(
        "{}/products/{}",
        site.url.trim_end_matches('/'),
        product.id
    ));

    let mut body = render_product(&product);
    if !related.is_empty() {
        body.push('\n');
        body.push_str(&render_related(&related));
    }

    PageView::ready(body, seo)
}

fn render_product(product: &Product) -> String {
    let (stock_class, disabled) = if product.is_available() {
        ("in-stock", "")
    } else {
        ("out-of-stock", " disabled")
    };

    format!(
        r#"<nav class="breadcrumb"><a href="/">Home</a> / <a href="/products">Products</a> / <span>{name}</span></nav>
<div class="product-detail" data-product-id="{id}">
    <img src="{image}" alt="{name}">
    <div class="product-info">
        <span class="category">{category}</span>
        <h1>{name}</h1>
        <p class="price">{price}</p>
        <p class="description">{description}</p>
        <p class="{stock_class}">{stock}</p>
        <button data-action="add-to-cart" data-product-id="{id}"{disabled}>Add to Cart</button>
    </div>
</div>"#,
        id = escape_html(product.id.as_str()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        category = escape_html(&product.category),
        price = product.price.display(),
        description = escape_html(&product.description),
        stock_class = stock_class,
        stock = product.stock_label(),
        disabled = disabled
    )
}

fn render_related(related: &[&Product]) -> String {
    let cards: String = related
        .iter()
        .map(|p| {
            format!(
                r#"<a href="/products/{id}" class="product-card">
    <img src="{image}" alt="{name}">
    <h4>{name}</h4>
    <span class="price">{price}</span>
</a>"#,
                id = escape_html(p.id.as_str()),
                image = escape_html(&p.image),
                name = escape_html(&p.name),
                price = p.price.display()
            )
        })
        .collect();

    format!(
        r#"<section class="related">
    <h2>Related Products</h2>
    <div class="product-grid">{}</div>
</section>"#,
        cards
    )
}

fn render_missing() -> String {
    r#"<div class="not-found">
    <h1>Product Not Found</h1>
    <p>The product you're looking for doesn't exist.</p>
    <a href="/products">Back to Products</a>
</div>"#
        .to_string()
}
