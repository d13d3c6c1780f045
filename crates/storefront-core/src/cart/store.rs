//! Cart store and cart lines.

use crate::cart::{CartSummary, LinePricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of [`CartStore::add_to_cart`].
///
/// Only `Added` and `Incremented` change the store. The others are
/// informational; none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line went up by one.
    Incremented,
    /// The line is already at the product's stock.
    AtStock,
    /// The product has no stock.
    OutOfStock,
    /// The product is priced in a different currency than the cart.
    CurrencyMismatch,
}

impl AddOutcome {
    /// Whether the store was modified.
    pub fn changed(&self) -> bool {
        matches!(self, AddOutcome::Added | AddOutcome::Incremented)
    }
}

/// One product's entry in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the product taken when the line was created.
    pub product: Product,
    /// Always within `1..=product.stock`.
    quantity: u32,
}

impl CartLine {
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    /// Whether one more unit fits under stock.
    pub fn can_increase(&self) -> bool {
        self.quantity < self.product.stock
    }
}

/// The authoritative mapping from product id to cart line.
///
/// Lines keep insertion order for stable display. Every mutation keeps each
/// line's quantity within `1..=stock`; a line that would drop to zero is
/// removed instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of `product`.
    ///
    /// Creates the line on first add. Never exceeds stock; an out-of-stock
    /// product or a full line leaves the store unchanged.
    pub fn add_to_cart(&mut self, product: &Product) -> AddOutcome {
        if product.price.currency != self.currency {
            warn!(
                product_id = %product.id,
                product_currency = %product.price.currency,
                cart_currency = %self.currency,
                "ignoring add of product priced in another currency"
            );
            return AddOutcome::CurrencyMismatch;
        }

        if let Some(line) = self.line_mut(&product.id) {
            if !line.can_increase() {
                debug!(product_id = %product.id, stock = line.product.stock, "cart line already at stock");
                return AddOutcome::AtStock;
            }
            line.quantity += 1;
            debug!(product_id = %product.id, quantity = line.quantity, "cart line incremented");
            return AddOutcome::Incremented;
        }

        if !product.in_stock() {
            debug!(product_id = %product.id, "product out of stock, not added");
            return AddOutcome::OutOfStock;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        debug!(product_id = %product.id, "cart line added");
        AddOutcome::Added
    }

    /// Set a line's quantity.
    ///
    /// Zero removes the line. Values above the product's stock are clamped
    /// to stock. Returns `false` if no line exists for `id`.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_from_cart(id);
        }

        match self.line_mut(id) {
            Some(line) => {
                let clamped = quantity.min(line.product.stock);
                if clamped != quantity {
                    debug!(product_id = %id, requested = quantity, clamped, "quantity clamped to stock");
                }
                line.quantity = clamped;
                true
            }
            None => {
                debug!(product_id = %id, "update for product not in cart");
                false
            }
        }
    }

    /// Remove the line for `id`. Idempotent.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(product_id = %id, "cart line removed");
        }
        removed
    }

    /// Raise a line by one unit if stock allows.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.line(id) {
            Some(line) if line.can_increase() => {
                let next = line.quantity + 1;
                self.update_quantity(id, next)
            }
            _ => false,
        }
    }

    /// Lower a line by one unit, removing it when it would reach zero.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.line(id) {
            Some(line) if line.quantity > 1 => {
                let next = line.quantity - 1;
                self.update_quantity(id, next)
            }
            Some(_) => self.remove_from_cart(id),
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    /// Quantity held for `id`, zero when absent.
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.line(id).map_or(0, CartLine::quantity)
    }

    /// Sum of quantities across lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity`, using each line's product snapshot.
    pub fn total_price(&self) -> Money {
        Money::sum(self.lines.iter().map(CartLine::subtotal), self.currency)
    }

    /// Totals plus a per-line breakdown.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            total_price: self.total_price(),
            lines: self
                .lines
                .iter()
                .map(|l| LinePricing {
                    product_id: l.product.id,
                    title: l.product.title.clone(),
                    unit_price: l.product.price,
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
        }
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product.id == id)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
