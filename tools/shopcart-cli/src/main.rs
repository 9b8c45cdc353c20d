//! ShopCart CLI - browse a product catalog and replay cart sessions.
//!
//! Commands:
//! - `shopcart products` - List products, filtered by text and category
//! - `shopcart categories` - List catalog categories
//! - `shopcart show` - Show one product
//! - `shopcart cart` - Replay a cart script and print the cart
//! - `shopcart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CategoriesArgs, ConfigArgs, ProductsArgs, ShowArgs};

/// ShopCart CLI - Browse a catalog and drive a shopping cart
#[derive(Parser)]
#[command(name = "shopcart")]
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

    /// Catalog file path (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a search
    Products(ProductsArgs),

    /// List catalog categories
    Categories(CategoriesArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Replay a cart script
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.catalog, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(&ctx);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`, which wins over the config.
fn init_tracing(ctx: &context::Context) {
    let default = if ctx.output.is_verbose() {
        "debug"
    } else {
        ctx.config.logging.filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
