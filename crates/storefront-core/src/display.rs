//! Per-product display state, joined against the cart on every call.

use crate::cart::CartStore;
use crate::catalog::Product;

/// What a product card needs to render itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductDisplay<'a> {
    pub product: &'a Product,
    /// Units of this product already in the cart.
    pub quantity_in_cart: u32,
    /// `stock > 0 && quantity_in_cart < stock`.
    pub can_add: bool,
}

impl<'a> ProductDisplay<'a> {
    /// Join one product against the current cart.
    pub fn new(product: &'a Product, cart: &CartStore) -> Self {
        let quantity_in_cart = cart.quantity_of(&product.id);
        Self {
            product,
            quantity_in_cart,
            can_add: product.stock > 0 && quantity_in_cart < product.stock,
        }
    }

    pub fn price_label(&self) -> String {
        self.product.price.display()
    }

    pub fn stock_label(&self) -> String {
        if self.product.stock == 0 {
            "Out of stock".to_string()
        } else {
            format!("Stock: {}", self.product.stock)
        }
    }

    /// Label for the add button.
    pub fn action_label(&self) -> &'static str {
        if self.product.stock == 0 {
            "Out of Stock"
        } else if !self.can_add {
            "Max in Cart"
        } else {
            "Add to Cart"
        }
    }
}

/// Join every product in `products` against the cart, keeping order.
pub fn display_all<'a, I>(products: I, cart: &CartStore) -> Vec<ProductDisplay<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| ProductDisplay::new(p, cart))
        .collect()
}
