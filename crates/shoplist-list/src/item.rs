//! The shopping item record.

use serde::{Deserialize, Serialize};
use shoplist_core::{normalize, ItemId};

/// A named item on the list, grouped by a free-text category.
///
/// `name` and `category` are lowercase whenever the value was built through
/// this type's constructors. Records decoded straight from storage are
/// re-normalized by the item store on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    id: ItemId,
    name: String,
    category: String,
}

impl ShoppingItem {
    /// Create an item with a freshly generated id.
    #[must_use]
    pub fn new(name: &str, category: &str) -> Self {
        Self::with_id(ItemId::generate(), name, category)
    }

    /// Create an item with a known id.
    #[must_use]
    pub fn with_id(id: ItemId, name: &str, category: &str) -> Self {
        Self {
            id,
            name: normalize(name),
            category: normalize(category),
        }
    }

    /// Replace name and category, normalizing both.
    pub fn update(&mut self, name: &str, category: &str) {
        self.name = normalize(name);
        self.category = normalize(category);
    }

    /// Item identifier.
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Lowercase item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether name and category are already in stored form.
    pub(crate) fn is_normalized(&self) -> bool {
        self.name == normalize(&self.name) && self.category == normalize(&self.category)
    }

    /// Copy with name and category in stored form.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        let Self { id, name, category } = self;
        Self::with_id(id, &name, &category)
    }
}
