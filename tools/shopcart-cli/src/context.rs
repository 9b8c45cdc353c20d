//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopcart_commerce::catalog::Catalog;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Catalog path given on the command line, overriding the config.
    pub catalog_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).transpose()?.unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
            catalog_override,
        })
    }

    /// Find the nearest config file in the directory tree.
    ///
    /// A file that exists but fails to parse is returned as an error.
    fn find_config(start: &Path) -> Option<Result<CliConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(CliConfig::load(&config_path.to_string_lossy()));
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the catalog named by `--catalog` or the config.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self
            .catalog_override
            .as_deref()
            .unwrap_or(&self.config.catalog.path);
        let resolved = self.resolve_path(path);
        self.output
            .debug(&format!("Loading catalog from {}", resolved.display()));

        Catalog::load(&resolved, self.config.catalog.currency)
            .with_context(|| format!("Failed to load catalog: {}", resolved.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("shopcart.toml"),
            "[catalog]\ncurrency = \"EUR\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.catalog.currency, shopcart_commerce::Currency::EUR);
    }

    #[test]
    fn test_find_config_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("shopcart.toml"),
            "[catalog]\ncurrency = \"EURO\"\n",
        )
        .unwrap();

        let err = Context::find_config(dir.path()).unwrap().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
