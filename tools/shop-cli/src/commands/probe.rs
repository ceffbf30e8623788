//! Cross-origin probe against the payment API.

use anyhow::Result;
use shop_storefront::Storefront;

use super::ProbeArgs;
use crate::context::Context;

/// Run the probe command.
pub async fn run(_args: ProbeArgs, ctx: &Context) -> Result<()> {
    let shop = Storefront::http(ctx.config.clone());

    let spinner = ctx.output.spinner(&format!(
        "Fetching {}/v1/products...",
        ctx.config.payment.base_url.trim_end_matches('/')
    ));
    let report = shop.probe().await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "blocked": report.blocked,
            "message": report.message,
        }));
        return Ok(());
    }

    if report.blocked {
        ctx.output.info("Request failed, as it would in a browser");
    } else {
        ctx.output.warn("Request succeeded; a browser would have blocked it");
    }
    ctx.output.block(&report.message);

    Ok(())
}
