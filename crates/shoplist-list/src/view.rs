//! Derivation of the displayed list.
//!
//! The display list is a pure function of the item collection, the active
//! filters and the search term. It is recomputed on demand; nothing here
//! caches or observes state.

use crate::collate::{self, collation_key};
use crate::filters::FilterSet;
use crate::item::ShoppingItem;
use serde::Serialize;
use shoplist_core::contains_ignore_case;
use std::collections::HashMap;

/// Number of items in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Lowercase category label
    pub category: String,
    /// Items carrying that label
    pub count: usize,
}

/// Items to display, in display order.
///
/// 1. Filter: with a non-empty filter set, keep items whose category is selected.
/// 2. Search: with a non-empty term, keep items whose name contains it, ignoring case.
/// 3. Sort: stable, ascending by category under [`collate::compare`]; items
///    sharing a category keep their insertion order.
#[must_use]
pub fn derive_view<'a>(
    items: &'a [ShoppingItem],
    filters: &FilterSet,
    search: &str,
) -> Vec<&'a ShoppingItem> {
    let mut view: Vec<&ShoppingItem> = items
        .iter()
        .filter(|item| filters.matches(item.category()))
        .filter(|item| search.is_empty() || contains_ignore_case(item.name(), search))
        .collect();

    // sort_by_cached_key is stable
    view.sort_by_cached_key(|item| (collation_key(item.category()), item.category().to_string()));
    view
}

/// Count items per category over the whole collection.
///
/// Filters and search do not apply. Categories come back in collation order.
#[must_use]
pub fn category_counts(items: &[ShoppingItem]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.category()).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| collate::compare(&a.category, &b.category));
    counts
}
