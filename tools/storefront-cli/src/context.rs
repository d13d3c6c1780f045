//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;
use storefront_core::catalog::Product;
use storefront_core::money::Currency;
use storefront_core::source::{parse_catalog, CatalogFeed, ProductSource};
use storefront_core::SourceError;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd)?.unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    ///
    /// The nearest existing file wins. A file that exists but does not load
    /// is an error; defaults apply only when no file is found.
    fn find_config(start: &Path) -> Result<Option<CliConfig>> {
        let config_names = ["storefront.toml", ".storefront.toml", "storefront.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path.to_string_lossy())
                        .with_context(|| {
                            format!("Invalid config file: {}", config_path.display())
                        })?;
                    return Ok(Some(config));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Fetch the configured catalog once.
    ///
    /// A failed fetch is terminal: the error is returned, nothing is retried.
    pub async fn load_catalog(&self) -> Result<Vec<Product>> {
        let path = self.resolve_path(&self.config.catalog.path);
        self.output
            .debug(&format!("Loading catalog from {}", path.display()));

        let source = FileSource::new(path, self.config.catalog.currency);
        match CatalogFeed::load(&source).await {
            CatalogFeed::Ready(products) => Ok(products),
            CatalogFeed::Failed(message) => Err(anyhow!(message)),
            CatalogFeed::Loading => Err(anyhow!("catalog fetch did not settle")),
        }
    }
}

/// Reads a JSON catalog from disk.
pub struct FileSource {
    path: PathBuf,
    currency: Currency,
}

impl FileSource {
    pub fn new(path: PathBuf, currency: Currency) -> Self {
        Self { path, currency }
    }
}

#[async_trait]
impl ProductSource for FileSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        parse_catalog(&content, self.currency)
    }
}
