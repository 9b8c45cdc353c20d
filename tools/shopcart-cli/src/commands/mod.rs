//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod products;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Free text matched against title and description.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to restrict to ("all" for every category).
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Print raw category names instead of display labels.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Cart script (TOML, or JSON with a .json extension).
    pub script: String,

    /// Stop at the first rejected step.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
