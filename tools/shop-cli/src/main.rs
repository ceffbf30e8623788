//! Shop CLI - drive a FakeShop storefront session from the terminal.
//!
//! Commands:
//! - `shop render <path>` - Render one route and print the page
//! - `shop session` - Interactive browsing session with a cart
//! - `shop shell` - Print the HTML every route serves before scripts run
//! - `shop probe` - Call the payment API directly, as the browser would
//! - `shop config` - Inspect and create configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ProbeArgs, RenderArgs, SessionArgs, ShellArgs};

/// Shop CLI - render and browse the FakeShop storefront
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a route and print the resulting page
    Render(RenderArgs),

    /// Start an interactive browsing session
    Session(SessionArgs),

    /// Print the initial HTML served for every route
    Shell(ShellArgs),

    /// Call the payment provider directly from the client
    Probe(ProbeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Shell(args) => commands::shell::run(args, &ctx).await,
        Commands::Probe(args) => commands::probe::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
