//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use shop_storefront::config::ENV_VARS;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, get_config_value};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Env => show_env(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[site]");
    ctx.output.kv("name", &ctx.config.site.name);
    ctx.output.kv("url", &ctx.config.site.url);

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);

    ctx.output.info("[payment]");
    ctx.output.kv("base_url", &ctx.config.payment.base_url);

    ctx.output.info("Bundled into the client:");
    for (name, value) in ctx.config.exposed_values() {
        ctx.output.kv(name, &value);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        println!(r#"{{"key": "{}", "value": {}}}"#, key, value);
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shop.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.site.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    ctx.output.warn("Every value in this file ships to the client.");

    Ok(())
}

fn show_env(ctx: &Context) -> Result<()> {
    let vars: Vec<(&str, bool)> = ENV_VARS
        .iter()
        .map(|name| (*name, std::env::var_os(name).is_some()))
        .collect();

    if ctx.output.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = vars
            .iter()
            .map(|(name, set)| (name.to_string(), serde_json::Value::Bool(*set)))
            .collect();
        ctx.output.json(&map);
        return Ok(());
    }

    ctx.output.header("Environment overrides");
    for (name, set) in vars {
        ctx.output.list_item(&format!("{} {}", name, if set { "(set)" } else { "" }));
    }

    Ok(())
}
