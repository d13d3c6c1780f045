//! One-shot catalog feed state.

use crate::catalog::Product;
use crate::error::SourceError;
use crate::source::ProductSource;
use tracing::{info, warn};

/// State of the single catalog fetch.
///
/// Starts in `Loading` and settles exactly once. There is no retry and no
/// way back to `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogFeed {
    #[default]
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogFeed {
    /// Run the one fetch against `source` and return the settled feed.
    pub async fn load(source: &dyn ProductSource) -> Self {
        let mut feed = CatalogFeed::Loading;
        feed.settle(source.fetch_products().await);
        feed
    }

    /// Record the fetch result.
    ///
    /// Only acts while loading; returns `false` and leaves the feed as it is
    /// once it has settled.
    pub fn settle(&mut self, result: Result<Vec<Product>, SourceError>) -> bool {
        if !self.is_loading() {
            warn!("catalog feed already settled, ignoring result");
            return false;
        }

        *self = match result {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                CatalogFeed::Ready(products)
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                CatalogFeed::Failed(e.to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogFeed::Loading)
    }

    /// The catalog, once loaded.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            CatalogFeed::Ready(products) => Some(products),
            _ => None,
        }
    }

    /// The failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogFeed::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use crate::source::StaticSource;
    use async_trait::async_trait;
    use futures::executor::block_on;

    struct BrokenSource;

    #[async_trait]
    impl ProductSource for BrokenSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
            Err(SourceError::Unavailable("offline".to_string()))
        }
    }

    fn shoe() -> Product {
        Product::new(1, "Red Shoe", Money::new(1000, Currency::USD), 2, "shoes")
    }

    #[test]
    fn test_feed_starts_loading() {
        let feed = CatalogFeed::default();
        assert!(feed.is_loading());
        assert!(feed.products().is_none());
        assert!(feed.error().is_none());
    }

    #[test]
    fn test_load_success() {
        let source = StaticSource::new(vec![shoe()]);
        let feed = block_on(CatalogFeed::load(&source));
        assert_eq!(feed.products().map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_load_failure() {
        let feed = block_on(CatalogFeed::load(&BrokenSource));
        assert!(!feed.is_loading());
        assert_eq!(feed.error(), Some("Catalog unavailable: offline"));
    }

    #[test]
    fn test_settles_only_once() {
        let mut feed = CatalogFeed::Loading;
        assert!(feed.settle(Ok(vec![shoe()])));
        assert!(!feed.settle(Err(SourceError::Unavailable("late".to_string()))));
        assert_eq!(feed.products().map(|p| p.len()), Some(1));
    }
}
