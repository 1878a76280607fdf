//! Active category filters.

use serde::{Deserialize, Serialize};
use shoplist_core::normalize;
use shoplist_storage::{keys, load_json, save_json, KeyValueStore, Result};
use tracing::info;

/// Set of selected categories.
///
/// An empty set means no filtering. Categories are kept lowercase and in
/// the order they were selected, so a persisted set reloads unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    categories: Vec<String>,
}

impl FilterSet {
    /// Empty set (no filtering).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `category` is selected. The argument is normalized first.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        let category = normalize(category);
        self.categories.iter().any(|c| *c == category)
    }

    /// Whether an item in `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        self.is_empty() || self.contains(category)
    }

    /// Select `category` if unselected, otherwise unselect it.
    ///
    /// Returns whether the category is selected afterwards.
    pub fn toggle(&mut self, category: &str) -> bool {
        let category = normalize(category);
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
            false
        } else {
            self.categories.push(category);
            true
        }
    }

    /// Unselect everything.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Whether no category is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of selected categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Selected categories in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    fn normalized(self) -> Self {
        self.categories.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            if !set.contains(category.as_ref()) {
                set.categories.push(normalize(category.as_ref()));
            }
        }
        set
    }
}

/// Filter set persisted under [`keys::FILTERS`].
#[derive(Debug)]
pub struct FilterStore<S: KeyValueStore> {
    storage: S,
    set: FilterSet,
}

impl<S: KeyValueStore> FilterStore<S> {
    /// Load the persisted filters; absent or malformed data yields no filtering.
    pub fn load(storage: S) -> Self {
        let set = load_json::<FilterSet, _>(&storage, keys::FILTERS)
            .unwrap_or_default()
            .normalized();
        Self { storage, set }
    }

    /// Current filter set.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.set
    }

    /// Toggle `category` and persist. Returns whether it is now selected.
    pub fn toggle(&mut self, category: &str) -> Result<bool> {
        let selected = self.set.toggle(category);
        info!(category = %normalize(category), selected, "toggled category filter");
        self.persist()?;
        Ok(selected)
    }

    /// Clear all filters and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.set.clear();
        info!("cleared category filters");
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.storage, keys::FILTERS, &self.set)
    }
}
