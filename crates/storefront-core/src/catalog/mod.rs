//! Product catalog module.
//!
//! Contains the product type, the view pipeline and category enumeration.

mod category;
mod product;
mod view;

pub use category::categories;
pub use product::{Product, ProductRecord};
pub use view::{derive_view, CategoryFilter, SortOrder, ViewFilter};
