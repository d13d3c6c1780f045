//! Cart summary calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Totals for the cart, as shown in the cart panel's summary rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of `price * quantity` over every line.
    pub total_price: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartSummary {
    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePricing {
    pub product_id: ProductId,
    pub title: String,
    /// Unit price from the product snapshot.
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}
