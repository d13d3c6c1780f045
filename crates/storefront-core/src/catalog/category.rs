//! Category enumeration for the category selector.

use crate::catalog::Product;
use std::collections::BTreeSet;

/// Distinct categories present in `products`, sorted ascending.
///
/// Independent of any filter state; recompute whenever the catalog changes.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_categories_deduplicated_and_sorted() {
        let products: Vec<Product> = ["b", "a", "a", "c"]
            .iter()
            .enumerate()
            .map(|(i, c)| Product::new(i as u64, "item", Money::zero(Currency::USD), 1, *c))
            .collect();

        assert_eq!(categories(&products), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_categories_empty_catalog() {
        assert!(categories(&[]).is_empty());
    }
}
