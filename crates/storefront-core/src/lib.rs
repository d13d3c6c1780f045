//! Cart store and catalog view pipeline for the storefront.
//!
//! This crate holds everything a storefront front end needs besides markup:
//!
//! - **Catalog**: products, the filter → category → sort view pipeline,
//!   category enumeration
//! - **Cart**: the stock-bounded cart store and its totals
//! - **Display**: per-product card state joined against the cart
//! - **Source**: the product source boundary and the one-shot catalog feed
//!
//! # Example
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! let products = vec![
//!     Product::new(1, "Red Shoe", Money::new(1000, Currency::USD), 2, "shoes"),
//!     Product::new(2, "Blue Hat", Money::new(500, Currency::USD), 0, "hats"),
//! ];
//!
//! let filter = ViewFilter::new().with_query("shoe");
//! let view = derive_view(&products, &filter);
//! assert_eq!(view.len(), 1);
//!
//! let mut cart = CartStore::new(Currency::USD);
//! cart.add_to_cart(view[0]);
//! assert_eq!(cart.total_price().display(), "$10.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod display;
pub mod source;

pub use error::SourceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::SourceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        categories, derive_view, CategoryFilter, Product, ProductRecord, SortOrder, ViewFilter,
    };

    // Cart
    pub use crate::cart::{AddOutcome, CartLine, CartStore, CartSummary, LinePricing};

    // Display
    pub use crate::display::{display_all, ProductDisplay};

    // Source
    pub use crate::source::{parse_catalog, CatalogFeed, ProductSource, StaticSource};
}
