//! Catalog browsing command.

use anyhow::Result;
use serde::Serialize;
use storefront_core::cart::CartStore;
use storefront_core::catalog::{derive_view, CategoryFilter, SortOrder, ViewFilter};
use storefront_core::display::{display_all, ProductDisplay};

use super::cart::{apply_actions, parse_actions};
use super::BrowseArgs;
use crate::context::Context;

/// One row of the browse listing.
#[derive(Debug, Serialize)]
struct BrowseRow {
    id: u64,
    title: String,
    category: String,
    price: String,
    stock: u32,
    quantity_in_cart: u32,
    can_add: bool,
}

impl From<&ProductDisplay<'_>> for BrowseRow {
    fn from(d: &ProductDisplay<'_>) -> Self {
        Self {
            id: d.product.id.get(),
            title: d.product.title.clone(),
            category: d.product.category.clone(),
            price: d.price_label(),
            stock: d.product.stock,
            quantity_in_cart: d.quantity_in_cart,
            can_add: d.can_add,
        }
    }
}

/// Combine command-line flags with the configured starting view.
pub fn build_filter(args: &BrowseArgs, initial: ViewFilter) -> ViewFilter {
    let mut filter = initial.with_query(args.query.clone());
    if let Some(ref category) = args.category {
        filter = filter.with_category(CategoryFilter::from_token(category));
    }
    if let Some(ref sort) = args.sort {
        filter = filter.with_sort(SortOrder::from_token(sort));
    }
    filter
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let actions = parse_actions(&args.with_cart)?;
    let products = ctx.load_catalog().await?;

    let mut cart = CartStore::new(ctx.config.catalog.currency);
    for line in apply_actions(&mut cart, &products, &actions) {
        ctx.output.debug(&line);
    }

    let filter = build_filter(&args, ctx.config.view.initial_filter());
    if let Some(ref sort) = args.sort {
        if SortOrder::from_token(sort).as_str() != sort.as_str() {
            ctx.output
                .warn(&format!("Unknown sort '{}', using default order", sort));
        }
    }

    let view = derive_view(&products, &filter);
    let cards = display_all(view, &cart);

    if ctx.output.is_json() {
        let rows: Vec<BrowseRow> = cards.iter().map(BrowseRow::from).collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Product Catalog ({} of {})",
        cards.len(),
        products.len()
    ));
    ctx.output.kv("query", &format!("{:?}", filter.query));
    ctx.output.kv("category", filter.category.as_str());
    ctx.output.kv("sort", filter.sort.display_name());
    println!();

    if cards.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }

    ctx.output.catalog_table(&cards);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(category: Option<&str>, sort: Option<&str>) -> BrowseArgs {
        BrowseArgs {
            query: "shoe".to_string(),
            category: category.map(String::from),
            sort: sort.map(String::from),
            with_cart: Vec::new(),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let initial = ViewFilter::new().with_sort(SortOrder::PriceAsc);
        let filter = build_filter(&args(Some("shoes"), Some("name-desc")), initial);
        assert_eq!(filter.query, "shoe");
        assert_eq!(filter.category, CategoryFilter::Named("shoes".to_string()));
        assert_eq!(filter.sort, SortOrder::NameDesc);
    }

    #[test]
    fn test_config_used_without_flags() {
        let initial = ViewFilter::new()
            .with_category(CategoryFilter::Named("hats".to_string()))
            .with_sort(SortOrder::PriceDesc);
        let filter = build_filter(&args(None, None), initial);
        assert_eq!(filter.category, CategoryFilter::Named("hats".to_string()));
        assert_eq!(filter.sort, SortOrder::PriceDesc);
    }

    #[test]
    fn test_all_token_clears_category() {
        let initial = ViewFilter::new().with_category(CategoryFilter::Named("hats".to_string()));
        let filter = build_filter(&args(Some("all"), None), initial);
        assert_eq!(filter.category, CategoryFilter::All);
    }
}
