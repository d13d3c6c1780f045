//! Shopping cart module.
//!
//! Contains the cart store, its lines and the pricing summary.

mod pricing;
mod store;

pub use pricing::{CartSummary, LinePricing};
pub use store::{AddOutcome, CartLine, CartStore};
