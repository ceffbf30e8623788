//! CLI command implementations.

pub mod config;
pub mod probe;
pub mod render;
pub mod session;
pub mod shell;

use clap::{Args, Subcommand};
use shop_storefront::{RenderedPage, Storefront};

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Route to render.
    #[arg(default_value = "/")]
    pub path: String,

    /// Product ids to add to the cart before rendering.
    #[arg(short, long)]
    pub add: Vec<String>,

    /// Also print the document head after render.
    #[arg(long)]
    pub head: bool,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Route to open first.
    #[arg(default_value = "/")]
    pub start: String,
}

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Route being requested. Every route gets the same document.
    #[arg(default_value = "/")]
    pub path: String,
}

/// Arguments for the probe command.
#[derive(Args)]
pub struct ProbeArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key (e.g., api.base_url)
        key: String,
    },

    /// Create a shop.toml with demo values
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the environment overrides and whether each is set
    Env,
}

/// Navigate with a spinner standing in for the page's loading state.
pub(crate) async fn visit(shop: &Storefront, path: &str, ctx: &Context) -> RenderedPage {
    let route = shop_storefront::Route::parse(path);

    match route.loading_message() {
        Some(message) => {
            if ctx.output.is_verbose() {
                if let Some(html) = shop.loading_view(&route) {
                    ctx.output.block(&html);
                }
            }
            let spinner = ctx.output.spinner(message);
            let page = shop.navigate(path).await;
            spinner.finish_and_clear();
            page
        }
        None => shop.navigate(path).await,
    }
}
