//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopcart_commerce::{Currency, Money};

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["shopcart.toml", ".shopcart.toml", "shopcart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to a JSON array of products.
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Currency the catalog prices are in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            currency: Currency::default(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Print prices as "$10.00" rather than "10.00 USD".
    #[serde(default = "default_true")]
    pub currency_symbol: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: true,
        }
    }
}

impl DisplayConfig {
    /// Format an amount the way this config asks for.
    pub fn money(&self, money: &Money) -> String {
        if self.currency_symbol {
            money.display()
        } else {
            format!("{} {}", money.display_amount(), money.currency.code())
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Generate a default shopcart.toml config file.
pub fn generate_default_config() -> String {
    r#"# ShopCart configuration

[catalog]
# JSON array of products, relative to the working directory
path = "products.json"
# One of USD, EUR, GBP, JPY, CAD, AUD
currency = "USD"

[display]
# false prints "10.00 USD" instead of "$10.00"
currency_symbol = true

[logging]
# Overridden by RUST_LOG; --verbose raises it to debug
filter = "warn"
"#
    .to_string()
}
