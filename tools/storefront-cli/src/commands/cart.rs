//! Cart replay command.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use storefront_core::cart::{AddOutcome, CartStore};
use storefront_core::catalog::Product;
use storefront_core::ids::ProductId;

use super::CartArgs;
use crate::context::Context;

/// One user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Set(ProductId, u32),
    Remove(ProductId),
    Clear,
}

impl FromStr for CartAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "clear" {
            return Ok(CartAction::Clear);
        }

        let (verb, arg) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid cart action '{}': expected <verb>:<id>", s))?;

        let parse_id = |raw: &str| -> Result<ProductId> {
            raw.parse()
                .with_context(|| format!("Invalid product id '{}' in '{}'", raw, s))
        };

        match verb {
            "add" => Ok(CartAction::Add(parse_id(arg)?)),
            "inc" => Ok(CartAction::Increment(parse_id(arg)?)),
            "dec" => Ok(CartAction::Decrement(parse_id(arg)?)),
            "rm" => Ok(CartAction::Remove(parse_id(arg)?)),
            "set" => {
                let (id, qty) = arg
                    .split_once('=')
                    .ok_or_else(|| anyhow!("Invalid cart action '{}': expected set:<id>=<qty>", s))?;
                let qty = qty
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid quantity '{}' in '{}'", qty, s))?;
                Ok(CartAction::Set(parse_id(id)?, qty))
            }
            other => bail!("Unknown cart action '{}' in '{}'", other, s),
        }
    }
}

/// Parse every action before touching the cart.
pub fn parse_actions(raw: &[String]) -> Result<Vec<CartAction>> {
    raw.iter().map(|s| s.parse()).collect()
}

/// Apply actions in order, returning one note per action.
///
/// Unknown product ids are reported in the notes and otherwise ignored.
pub fn apply_actions(
    cart: &mut CartStore,
    products: &[Product],
    actions: &[CartAction],
) -> Vec<String> {
    actions
        .iter()
        .map(|action| match action {
            CartAction::Add(id) => match products.iter().find(|p| &p.id == id) {
                Some(product) => match cart.add_to_cart(product) {
                    AddOutcome::Added => format!("added {}", product.title),
                    AddOutcome::Incremented => format!(
                        "{} now x{}",
                        product.title,
                        cart.quantity_of(id)
                    ),
                    AddOutcome::AtStock => {
                        format!("{} already at stock ({})", product.title, product.stock)
                    }
                    AddOutcome::OutOfStock => format!("{} is out of stock", product.title),
                    AddOutcome::CurrencyMismatch => {
                        format!("{} is priced in another currency", product.title)
                    }
                },
                None => format!("no product with id {}", id),
            },
            CartAction::Increment(id) => note(cart.increment(id), id, "incremented"),
            CartAction::Decrement(id) => note(cart.decrement(id), id, "decremented"),
            CartAction::Set(id, qty) => {
                let changed = cart.update_quantity(id, *qty);
                note(changed, id, &format!("set to {}", cart.quantity_of(id)))
            }
            CartAction::Remove(id) => note(cart.remove_from_cart(id), id, "removed"),
            CartAction::Clear => {
                cart.clear();
                "cart cleared".to_string()
            }
        })
        .collect()
}

fn note(changed: bool, id: &ProductId, what: &str) -> String {
    if changed {
        format!("{} {}", id, what)
    } else {
        format!("{} unchanged", id)
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let actions = parse_actions(&args.actions)?;
    let products = ctx.load_catalog().await?;

    let mut cart = CartStore::new(ctx.config.catalog.currency);
    for line in apply_actions(&mut cart, &products, &actions) {
        ctx.output.note(&line);
    }

    let summary = cart.summary();
    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Shopping Cart");

    if summary.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    ctx.output.cart_table(&summary);

    Ok(())
}
