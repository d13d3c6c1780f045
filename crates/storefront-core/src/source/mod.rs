//! Product source boundary.
//!
//! The storefront does not care how products arrive. A [`ProductSource`]
//! hands over the whole catalog once; [`CatalogFeed`] tracks that single
//! fetch from loading to its terminal state.

mod feed;

pub use feed::CatalogFeed;

use crate::catalog::{Product, ProductRecord};
use crate::error::SourceError;
use crate::money::Currency;
use async_trait::async_trait;
use std::collections::HashSet;

/// Supplies the ordered product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError>;
}

/// A source that serves a catalog it already holds.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build from a JSON catalog document. See [`parse_catalog`].
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, SourceError> {
        parse_catalog(json, currency).map(Self::new)
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

/// Parse a JSON catalog.
///
/// Accepts either a bare array of products or the paged envelope
/// `{"products": [...], "total": .., "skip": .., "limit": ..}`. Prices are
/// decimal and converted into `currency`. Product ids must be unique.
pub fn parse_catalog(json: &str, currency: Currency) -> Result<Vec<Product>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let list = match value {
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        serde_json::Value::Object(mut map) => map
            .remove("products")
            .ok_or_else(|| SourceError::Parse("missing \"products\" field".to_string()))?,
        _ => {
            return Err(SourceError::Parse(
                "expected an array or an object with \"products\"".to_string(),
            ))
        }
    };

    let records: Vec<ProductRecord> = serde_json::from_value(list)?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SourceError::Parse(format!(
                "duplicate product id {}",
                record.id
            )));
        }
        products.push(record.into_product(currency)?);
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use futures::executor::block_on;

    const ENVELOPE: &str = r#"{
        "products": [
            {"id": 1, "title": "Red Shoe", "price": 10, "stock": 2, "category": "shoes",
             "thumbnail": "https://img/1.png"},
            {"id": 2, "title": "Blue Hat", "price": 5.5, "stock": 0, "category": "hats",
             "thumbnail": "https://img/2.png"}
        ],
        "total": 2, "skip": 0, "limit": 30
    }"#;

    #[test]
    fn test_parse_envelope() {
        let products = parse_catalog(ENVELOPE, Currency::USD).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price, Money::new(550, Currency::USD));
        assert_eq!(products[1].stock, 0);
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"id": 7, "title": "Mug", "price": 3, "stock": 9, "category": "kitchen"}]"#;
        let products = parse_catalog(json, Currency::EUR).unwrap();
        assert_eq!(products[0].title, "Mug");
        assert_eq!(products[0].price.currency, Currency::EUR);
        assert!(products[0].thumbnail.is_empty());
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "title": "A", "price": 1, "stock": 1, "category": "x"},
            {"id": 1, "title": "B", "price": 1, "stock": 1, "category": "x"}
        ]"#;
        let err = parse_catalog(json, Currency::USD).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 1"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(matches!(
            parse_catalog("42", Currency::USD),
            Err(SourceError::Parse(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{"items": []}"#, Currency::USD),
            Err(SourceError::Parse(_))
        ));
        assert!(parse_catalog("not json", Currency::USD).is_err());
    }

    #[test]
    fn test_static_source_fetch() {
        let source = StaticSource::from_json(ENVELOPE, Currency::USD).unwrap();
        let products = block_on(source.fetch_products()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Red Shoe");
    }
}
