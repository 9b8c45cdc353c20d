//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("currency", ctx.config.catalog.currency.code());
    if let Some(ref path) = ctx.catalog_override {
        ctx.output.kv("path (--catalog)", path);
    }

    ctx.output.info("[display]");
    ctx.output.kv(
        "currency_symbol",
        &ctx.config.display.currency_symbol.to_string(),
    );

    ctx.output.info("[logging]");
    ctx.output.kv("filter", &ctx.config.logging.filter);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shopcart.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
