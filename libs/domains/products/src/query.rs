//! Product listing query engine: filter by category, search, then sort.
//!
//! Pure functions over a snapshot of products. The same engine backs the
//! HTTP listing and the CLI's offline mode, so both always agree.

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use tracing::warn;

use crate::models::{Product, ProductQuery, SortKey};

/// Run `query` over `products` and return the matching records in order.
///
/// - `category` keeps products whose category equals it, ignoring case
/// - `search` keeps products whose name or description contains it, ignoring case
/// - `sort` orders the result; unknown keys sort by name
///
/// Empty `category` or `search` values do not filter. The sort is stable, so
/// equal keys keep their store order. `products` is not modified.
pub fn apply(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let category = non_empty(query.category.as_deref()).map(str::to_lowercase);
    let needle = non_empty(query.search.as_deref()).map(str::to_lowercase);

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|c| p.category.to_lowercase() == c)
        })
        .filter(|p| {
            needle.as_deref().is_none_or(|n| {
                p.name.to_lowercase().contains(n) || p.description.to_lowercase().contains(n)
            })
        })
        .cloned()
        .collect();

    sort(&mut result, SortKey::from_param(query.sort.as_deref()));
    result
}

/// Stable in-place sort by `key`.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Name => {
            let order = NameOrder::new();
            products.sort_by(|a, b| order.compare(&a.name, &b.name));
        }
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Stock => products.sort_by_key(|p| p.stock),
    }
}

/// Locale-aware name order using the root collation at tertiary strength:
/// accents and case only break ties between otherwise equal names, and
/// lowercase sorts before uppercase.
struct NameOrder(Option<CollatorBorrowed<'static>>);

impl NameOrder {
    fn new() -> Self {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(Default::default(), options)
            .inspect_err(|e| warn!("Root collator unavailable, sorting names by code point: {e}"))
            .ok();
        Self(collator)
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.0 {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => fold_compare(a, b),
        }
    }
}

fn fold_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
