//! Print the served document.

use anyhow::Result;
use shop_storefront::{Document, Route};

use super::ShellArgs;
use crate::context::Context;

/// Run the shell command.
pub async fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let route = Route::parse(&args.path);
    let html = Document::initial_html(&ctx.config.site.name);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "route": route.path(),
            "html": html,
        }));
        return Ok(());
    }

    ctx.output.block(&html);
    ctx.output.warn(&format!(
        "This is what a crawler receives for {}: no content, no metadata.",
        route
    ));

    Ok(())
}
