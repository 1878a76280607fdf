//! In-memory item collection mirrored to persistent storage.

use crate::item::ShoppingItem;
use crate::view::{category_counts, CategoryCount};
use serde_json::Value;
use shoplist_core::{ItemId, ShoplistError};
use shoplist_storage::{keys, load_json, save_json, KeyValueStore, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Owner of the shopping item collection.
///
/// The store holds the only in-memory copy of the items. Every successful
/// mutation rewrites the whole collection under [`keys::ITEMS`]; if that
/// write fails the error is returned and the in-memory change stands.
#[derive(Debug)]
pub struct ItemStore<S: KeyValueStore> {
    storage: S,
    items: Vec<ShoppingItem>,
}

impl<S: KeyValueStore> ItemStore<S> {
    /// Load the persisted collection, or start empty.
    ///
    /// Absent data, or a value that is not a JSON array, yields an empty
    /// collection. Inside the array each record is decoded on its own: a
    /// record that does not decode is skipped with a warning and the rest
    /// are kept. Loaded records are brought back to lowercase and repeated
    /// ids are dropped, keeping the first occurrence.
    pub fn load(storage: S) -> Self {
        let records: Vec<Value> = load_json(&storage, keys::ITEMS).unwrap_or_default();

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let item: ShoppingItem = match serde_json::from_value(record) {
                Ok(item) => item,
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed stored item");
                    continue;
                }
            };
            if !seen.insert(item.id().clone()) {
                warn!(id = %item.id(), "dropping item with duplicate id");
                continue;
            }
            if item.is_normalized() {
                items.push(item);
            } else {
                debug!(id = %item.id(), "normalizing stored item");
                items.push(item.normalized());
            }
        }

        info!(count = items.len(), "loaded shopping items");
        Self { storage, items }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Per-category counts over the whole collection.
    #[must_use]
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        category_counts(&self.items)
    }

    /// Backend the collection is mirrored to.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new item and return its id.
    ///
    /// Any strings are accepted; rejecting empty input is the caller's job.
    pub fn add(&mut self, name: &str, category: &str) -> Result<ItemId> {
        let item = ShoppingItem::new(name, category);
        let id = item.id().clone();

        info!(%id, name = item.name(), category = item.category(), "adding item");
        self.items.push(item);
        self.persist()?;
        Ok(id)
    }

    /// Remove the item with `id`.
    ///
    /// Returns `false` without touching storage if no such item exists.
    pub fn remove(&mut self, id: &ItemId) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);

        if self.items.len() == before {
            debug!(%id, "remove: no such item");
            return Ok(false);
        }

        info!(%id, "removed item");
        self.persist()?;
        Ok(true)
    }

    /// Replace name and category of the item with `id`.
    ///
    /// Returns `false` without touching storage if no such item exists.
    pub fn edit(&mut self, id: &ItemId, name: &str, category: &str) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            debug!(%id, "edit: no such item");
            return Ok(false);
        };

        item.update(name, category);
        info!(%id, name = item.name(), category = item.category(), "edited item");
        self.persist()?;
        Ok(true)
    }

    /// First step of a confirmed removal.
    ///
    /// Returns a request describing the item to show the user, or `None` if
    /// the id is unknown. Nothing is removed until the request is passed to
    /// [`ItemStore::confirm_removal`]; dropping it cancels.
    #[must_use]
    pub fn request_removal(&self, id: &ItemId) -> Option<RemovalRequest> {
        let item = self.get(id)?.clone();
        debug!(%id, "removal requested");
        Some(RemovalRequest { item })
    }

    /// Second step of a confirmed removal.
    ///
    /// Returns `false` if the item disappeared after the request was made.
    pub fn confirm_removal(&mut self, request: RemovalRequest) -> Result<bool> {
        debug!(id = %request.item.id(), "removal confirmed");
        self.remove(request.item.id())
    }

    /// Resolve a full id or a unique id prefix to an item id.
    ///
    /// # Errors
    /// - `ShoplistError::NotFound` if nothing matches
    /// - `ShoplistError::Ambiguous` if the prefix matches several items
    pub fn resolve(&self, prefix: &str) -> shoplist_core::Result<ItemId> {
        if let Some(item) = self.items.iter().find(|item| item.id().as_str() == prefix) {
            return Ok(item.id().clone());
        }

        let matches: Vec<&ShoppingItem> = self
            .items
            .iter()
            .filter(|item| !prefix.is_empty() && item.id().as_str().starts_with(prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(ShoplistError::NotFound(prefix.to_string())),
            [item] => Ok(item.id().clone()),
            _ => Err(ShoplistError::Ambiguous {
                prefix: prefix.to_string(),
                count: matches.len(),
            }),
        }
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.storage, keys::ITEMS, &self.items).map_err(|e| {
            warn!(error = %e, "failed to persist shopping items");
            e
        })
    }
}

/// Pending destructive removal awaiting confirmation.
///
/// Only the item store creates these, so holding one proves the caller went
/// through [`ItemStore::request_removal`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "dropping a removal request cancels the removal"]
pub struct RemovalRequest {
    item: ShoppingItem,
}

impl RemovalRequest {
    /// Snapshot of the item as it was when removal was requested.
    pub fn item(&self) -> &ShoppingItem {
        &self.item
    }

    /// Confirmation prompt to show before confirming.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Remove \"{}\" ({})? This action cannot be undone.",
            self.item.name(),
            self.item.category()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_storage::{MemoryStore, StorageError};
    use std::rc::Rc;

    fn store() -> ItemStore<Rc<MemoryStore>> {
        ItemStore::load(Rc::new(MemoryStore::new()))
    }

    fn persisted(store: &ItemStore<Rc<MemoryStore>>) -> Vec<ShoppingItem> {
        load_json(store.storage(), keys::ITEMS).expect("items persisted")
    }

    #[test]
    fn test_add_normalizes_and_persists() {
        let mut store = store();
        let id = store.add("Leite", "Laticínios").expect("add item");

        let item = store.get(&id).expect("item present");
        assert_eq!(item.name(), "leite");
        assert_eq!(item.category(), "laticínios");
        assert_eq!(persisted(&store), store.items());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = store();
        let a = store.add("a", "x").expect("add a");
        let b = store.add("a", "x").expect("add b");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = store();
        store.add("pão", "padaria").expect("add item");

        let unknown = ItemId::new("nope").expect("valid id");
        assert!(!store.remove(&unknown).expect("remove unknown"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_persists() {
        let mut store = store();
        let id = store.add("pão", "padaria").expect("add item");

        assert!(store.remove(&id).expect("remove item"));
        assert!(store.is_empty());
        assert!(persisted(&store).is_empty());
    }

    #[test]
    fn test_edit_normalizes_and_persists() {
        let mut store = store();
        let id = store.add("pão", "padaria").expect("add item");

        assert!(store.edit(&id, "Pão Doce", "Mercearia").expect("edit item"));
        let item = store.get(&id).expect("item present");
        assert_eq!(item.name(), "pão doce");
        assert_eq!(item.category(), "mercearia");
        assert_eq!(persisted(&store), store.items());
    }

    #[test]
    fn test_edit_unknown_is_noop() {
        let mut store = store();
        store.add("pão", "padaria").expect("add item");
        let before = store.items().to_vec();

        let unknown = ItemId::new("nope").expect("valid id");
        assert!(!store.edit(&unknown, "x", "y").expect("edit unknown"));
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_two_step_removal() {
        let mut store = store();
        let id = store.add("Leite", "Laticínios").expect("add item");

        let request = store.request_removal(&id).expect("request for known id");
        assert_eq!(request.item().name(), "leite");
        assert!(request.prompt().contains("\"leite\""));
        // Nothing removed yet
        assert_eq!(store.len(), 1);

        assert!(store.confirm_removal(request).expect("confirm removal"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancelled_removal_keeps_item() {
        let mut store = store();
        let id = store.add("leite", "laticínios").expect("add item");

        let request = store.request_removal(&id).expect("request for known id");
        drop(request);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_stale_removal_request() {
        let mut store = store();
        let id = store.add("leite", "laticínios").expect("add item");

        let request = store.request_removal(&id).expect("request for known id");
        store.remove(&id).expect("remove directly");
        assert!(!store.confirm_removal(request).expect("confirm stale request"));

        let unknown = ItemId::new("nope").expect("valid id");
        assert!(store.request_removal(&unknown).is_none());
    }

    #[test]
    fn test_load_normalizes_and_dedupes() {
        let storage = MemoryStore::with_entries([(
            keys::ITEMS,
            r#"[
                {"id":"1","name":"Milk","category":"Dairy"},
                {"id":"2","name":"bread","category":"bakery"},
                {"id":"1","name":"duplicate","category":"dairy"}
            ]"#,
        )]);

        let store = ItemStore::load(storage);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].name(), "milk");
        assert_eq!(store.items()[0].category(), "dairy");
        assert_eq!(store.items()[1].name(), "bread");
    }

    #[test]
    fn test_load_skips_only_bad_records() {
        let storage = Rc::new(MemoryStore::with_entries([(
            keys::ITEMS,
            r#"[
                {"id":"1","name":"leite","category":"laticínios"},
                {"id":"2","name":"pão"},
                {"id":"","name":"blank id","category":"padaria"},
                42
            ]"#,
        )]));

        let mut store = ItemStore::load(Rc::clone(&storage));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].name(), "leite");

        store.add("Café", "Mercearia").expect("add");
        let reloaded = ItemStore::load(storage);
        let names: Vec<&str> = reloaded.items().iter().map(ShoppingItem::name).collect();
        assert_eq!(names, ["leite", "café"]);
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let storage = MemoryStore::with_entries([(keys::ITEMS, "[{\"id\":")]);
        let store = ItemStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_resolve_prefix() {
        let storage = MemoryStore::with_entries([(
            keys::ITEMS,
            r#"[
                {"id":"abc123","name":"a","category":"x"},
                {"id":"abd456","name":"b","category":"x"}
            ]"#,
        )]);
        let store = ItemStore::load(storage);

        assert_eq!(store.resolve("abc").expect("unique prefix").as_str(), "abc123");
        assert_eq!(store.resolve("abd456").expect("full id").as_str(), "abd456");
        assert!(matches!(
            store.resolve("ab"),
            Err(ShoplistError::Ambiguous { count: 2, .. })
        ));
        assert!(matches!(store.resolve("zz"), Err(ShoplistError::NotFound(_))));
        assert!(matches!(store.resolve(""), Err(ShoplistError::NotFound(_))));
    }

    #[test]
    fn test_failed_write_is_reported() {
        struct ReadOnly;

        impl KeyValueStore for ReadOnly {
            fn load(&self, _key: &str) -> Result<Option<String>> {
                Ok(None)
            }

            fn save(&self, _key: &str, _value: &str) -> Result<()> {
                Err(StorageError::Io(std::io::Error::other("read-only")))
            }

            fn remove(&self, _key: &str) -> Result<()> {
                Ok(())
            }
        }

        let mut store = ItemStore::load(ReadOnly);
        assert!(store.add("leite", "laticínios").is_err());
        // In-memory mutation stands
        assert_eq!(store.len(), 1);
    }
}
