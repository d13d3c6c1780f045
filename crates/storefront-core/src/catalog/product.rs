//! Product types.

use crate::error::SourceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable for the session; the cart keeps its own snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Maximum purchasable quantity.
    pub stock: u32,
    /// Category label used for grouping and filtering.
    pub category: String,
    /// Image URL. Never interpreted.
    pub thumbnail: String,
    /// Long description, if the feed has one.
    #[serde(default)]
    pub description: Option<String>,
    /// Brand name, if the feed has one.
    #[serde(default)]
    pub brand: Option<String>,
}

impl Product {
    /// Create a product with no description or brand.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: Money,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            stock,
            category: category.into(),
            thumbnail: String::new(),
            description: None,
            brand: None,
        }
    }

    /// Set the thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = url.into();
        self
    }

    /// Whether any units can be bought at all.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A product as published by a catalog feed, with a decimal price.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl ProductRecord {
    /// Convert into a [`Product`] priced in `currency`.
    ///
    /// Rejects prices that are negative or not finite.
    pub fn into_product(self, currency: Currency) -> Result<Product, SourceError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(SourceError::Parse(format!(
                "product {} has invalid price {}",
                self.id, self.price
            )));
        }

        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            price: Money::from_decimal(self.price, currency),
            stock: self.stock,
            category: self.category,
            thumbnail: self.thumbnail,
            description: self.description.filter(|d| !d.is_empty()),
            brand: self.brand.filter(|b| !b.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_conversion() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"id": 3, "title": "Lamp", "price": 12.5, "stock": 4,
                "category": "home", "thumbnail": "https://img/3.png", "brand": ""}"#,
        )
        .unwrap();

        let product = record.into_product(Currency::USD).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Money::new(1250, Currency::USD));
        assert_eq!(product.thumbnail, "https://img/3.png");
        assert_eq!(product.brand, None);
    }

    #[test]
    fn test_record_rejects_negative_price() {
        let record = ProductRecord {
            id: 1,
            title: "Broken".to_string(),
            price: -1.0,
            stock: 1,
            category: "misc".to_string(),
            thumbnail: String::new(),
            description: None,
            brand: None,
        };
        assert!(matches!(
            record.into_product(Currency::USD),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn test_in_stock() {
        let p = Product::new(1, "Hat", Money::new(500, Currency::USD), 0, "hats");
        assert!(!p.in_stock());
    }
}
