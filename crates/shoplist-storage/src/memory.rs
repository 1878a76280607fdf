//! In-memory key-value backend.

use crate::{KeyValueStore, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local storage backed by a map.
///
/// Nothing survives the process; used by tests and by callers that drive
/// the list without touching disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(key, value)` pairs.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().expect("memory store lock poisoned").len()
    }

    /// Whether no key is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .expect("memory store lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.load("missing").expect("load"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save("theme", "\"light\"").expect("first save");
        store.save("theme", "\"dark\"").expect("second save");

        assert_eq!(store.load("theme").expect("load"), Some("\"dark\"".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::with_entries([("a", "1")]);
        store.remove("a").expect("remove present key");
        store.remove("a").expect("remove absent key");
        assert_eq!(store.load("a").expect("load"), None);
    }
}
