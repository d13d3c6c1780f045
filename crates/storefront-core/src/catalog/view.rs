//! Catalog view pipeline: text filter, then category filter, then sort.
//!
//! The pipeline is a plain function of its inputs. Front ends call
//! [`derive_view`] whenever they render; nothing is cached here.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the catalog's own order.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Title A-Z.
    NameAsc,
    /// Title Z-A.
    NameDesc,
}

impl SortOrder {
    /// Every option, in selector order.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Default,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    /// Token used in config files, URLs and selector values.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }

    /// Parse a token. Unknown tokens fall back to [`SortOrder::Default`].
    pub fn from_token(s: &str) -> Self {
        match s {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            "name-asc" => SortOrder::NameAsc,
            "name-desc" => SortOrder::NameDesc,
            _ => SortOrder::Default,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Name: A-Z",
            SortOrder::NameDesc => "Name: Z-A",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOrder::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOrder::NameAsc => collate(&a.title, &b.title),
            SortOrder::NameDesc => collate(&b.title, &a.title),
        }
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection. The token `"all"` selects every category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_TOKEN: &'static str = "all";

    /// Build from a selector value.
    pub fn from_token(s: &str) -> Self {
        if s == Self::ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_TOKEN,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Exact, case-sensitive match.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current refinement of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Free-text title query.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Derive the displayed product list.
///
/// Stages run in a fixed order: title filter, category filter, stable sort.
/// The input slice is left untouched.
pub fn derive_view<'a>(products: &'a [Product], filter: &ViewFilter) -> Vec<&'a Product> {
    let needle = filter.query.to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .filter(|p| filter.category.matches(&p.category))
        .collect();

    if filter.sort != SortOrder::Default {
        view.sort_by(|a, b| filter.sort.compare(a, b));
    }

    view
}

/// Locale-style title ordering: case-folded first, raw text breaks ties.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: u64, title: &str, cents: i64, category: &str) -> Product {
        Product::new(id, title, Money::new(cents, Currency::USD), 5, category)
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", 1000, "shoes"),
            product(2, "blue hat", 500, "hats"),
            product(3, "Green Shoe", 1500, "shoes"),
            product(4, "Apron", 500, "kitchen"),
        ]
    }

    fn ids(view: &[&Product]) -> Vec<u64> {
        view.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_catalog_order() {
        let products = catalog();
        assert_eq!(ids(&derive_view(&products, &ViewFilter::new())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let products = catalog();
        let filter = ViewFilter::new().with_query("SHOE");
        assert_eq!(ids(&derive_view(&products, &filter)), vec![1, 3]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let products = catalog();
        let filter = ViewFilter::new().with_category(CategoryFilter::from_token("Shoes"));
        assert!(derive_view(&products, &filter).is_empty());

        let filter = ViewFilter::new().with_category(CategoryFilter::from_token("shoes"));
        assert_eq!(ids(&derive_view(&products, &filter)), vec![1, 3]);
    }

    #[test]
    fn test_query_and_category_compose() {
        let products = catalog();
        let filter = ViewFilter::new()
            .with_query("e")
            .with_category(CategoryFilter::Named("shoes".into()))
            .with_sort(SortOrder::PriceDesc);
        assert_eq!(ids(&derive_view(&products, &filter)), vec![3, 1]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = catalog();
        let asc = ViewFilter::new().with_sort(SortOrder::PriceAsc);
        assert_eq!(ids(&derive_view(&products, &asc)), vec![2, 4, 1, 3]);

        let desc = ViewFilter::new().with_sort(SortOrder::PriceDesc);
        assert_eq!(ids(&derive_view(&products, &desc)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let products = catalog();
        let asc = ViewFilter::new().with_sort(SortOrder::NameAsc);
        assert_eq!(ids(&derive_view(&products, &asc)), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_name_desc_reverses_name_asc() {
        let products = catalog();
        let mut asc = ids(&derive_view(&products, &ViewFilter::new().with_sort(SortOrder::NameAsc)));
        let desc = ids(&derive_view(&products, &ViewFilter::new().with_sort(SortOrder::NameDesc)));
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_input_untouched() {
        let products = catalog();
        let before = products.clone();
        let _ = derive_view(&products, &ViewFilter::new().with_sort(SortOrder::NameDesc));
        assert_eq!(products, before);
    }

    #[test]
    fn test_sort_tokens() {
        for sort in SortOrder::ALL {
            assert_eq!(SortOrder::from_token(sort.as_str()), sort);
        }
        assert_eq!("bogus".parse::<SortOrder>().unwrap(), SortOrder::Default);
    }

    #[test]
    fn test_filter_deserializes_tokens() {
        let filter: ViewFilter =
            serde_json::from_str(r#"{"category": "all", "sort": "name-desc"}"#).unwrap();
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(filter.sort, SortOrder::NameDesc);
        assert!(filter.query.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                ("[A-Za-z ]{1,12}", 0i64..10_000, prop::sample::select(vec!["a", "b", "c"])),
                0..20,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (title, cents, category))| {
                        product(i as u64, &title, cents, category)
                    })
                    .collect()
            })
        }

        fn arb_sort() -> impl Strategy<Value = SortOrder> {
            prop::sample::select(SortOrder::ALL.to_vec())
        }

        proptest! {
            /// Property: deriving twice with the same inputs gives the same output.
            #[test]
            fn derive_is_idempotent(products in arb_products(), query in "[a-z]{0,2}", sort in arb_sort()) {
                let filter = ViewFilter::new().with_query(query).with_sort(sort);
                let first = derive_view(&products, &filter);
                let second = derive_view(&products, &filter);
                prop_assert_eq!(first, second);
            }

            /// Property: every derived product satisfies both filters.
            #[test]
            fn derive_only_keeps_matches(products in arb_products(), query in "[a-z]{0,2}") {
                let filter = ViewFilter::new()
                    .with_query(query.clone())
                    .with_category(CategoryFilter::Named("b".into()));
                for p in derive_view(&products, &filter) {
                    prop_assert_eq!(p.category.as_str(), "b");
                    prop_assert!(p.title.to_lowercase().contains(&query));
                }
            }
        }
    }
}
