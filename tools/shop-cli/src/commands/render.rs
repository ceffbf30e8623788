//! Render a single route.

use anyhow::{Context as _, Result};
use shop_commerce::ProductId;
use shop_storefront::{PageStatus, Storefront};

use super::{visit, RenderArgs};
use crate::context::Context;
use crate::output::{status_badge, status_name};

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let shop = Storefront::http(ctx.config.clone());

    for id in &args.add {
        let product = shop
            .add_to_cart(&ProductId::new(id.as_str()))
            .await
            .with_context(|| format!("Failed to add product {} to the cart", id))?;
        ctx.output.debug(&format!("Added {} to the cart", product.name));
    }

    let page = visit(&shop, &args.path, ctx).await;
    let document = shop.document();

    if ctx.output.is_json() {
        let error = match &page.status {
            PageStatus::ApiError(message) => Some(message.clone()),
            _ => None,
        };
        ctx.output.json(&serde_json::json!({
            "route": page.route.path(),
            "status": status_name(&page.status),
            "error": error,
            "title": document.title(),
            "head": document.render_head(),
            "html": page.html,
        }));
        return Ok(());
    }

    ctx.output.block(&page.html);

    if args.head {
        ctx.output.header("Document head after render");
        ctx.output.block(&document.render_head());
    }

    ctx.output.info(&format!(
        "{} {} ({})",
        page.route,
        status_badge(&page.status),
        document.title()
    ));

    Ok(())
}
