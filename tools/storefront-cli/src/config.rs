//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::catalog::{CategoryFilter, SortOrder, ViewFilter};
use storefront_core::money::Currency;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial view state.
    #[serde(default)]
    pub view: ViewConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Catalog location and pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog (array or `{"products": [...]}` envelope).
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Currency that catalog prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_catalog_path() -> String {
    "data/products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            currency: Currency::default(),
        }
    }
}

/// Default sort and category for `browse`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub sort: SortOrder,

    #[serde(default)]
    pub category: CategoryFilter,
}

impl ViewConfig {
    /// Starting filter for a session.
    pub fn initial_filter(&self) -> ViewFilter {
        ViewFilter::new()
            .with_category(self.category.clone())
            .with_sort(self.sort)
    }
}

/// Log level and format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable (for development).
    #[default]
    Human,
    /// JSON (for log aggregation).
    Json,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
path = "data/products.json"
currency = "USD"

[view]
sort = "default"
category = "all"

[logging]
level = "info"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config.catalog.path, "data/products.json");
        assert_eq!(config.catalog.currency, Currency::USD);
        assert_eq!(config.view.sort, SortOrder::Default);
        assert_eq!(config.view.category, CategoryFilter::All);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = CliConfig::from_toml(&generate_default_config()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.view.initial_filter(), ViewFilter::default());
    }

    #[test]
    fn test_view_tokens() {
        let config = CliConfig::from_toml(
            r#"
            [catalog]
            currency = "EUR"

            [view]
            sort = "price-desc"
            category = "shoes"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.currency, Currency::EUR);
        let filter = config.view.initial_filter();
        assert_eq!(filter.sort, SortOrder::PriceDesc);
        assert_eq!(filter.category, CategoryFilter::Named("shoes".to_string()));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(CliConfig::load("/nonexistent/storefront.toml").is_err());
    }
}
