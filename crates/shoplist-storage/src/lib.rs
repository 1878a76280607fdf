//! Shoplist Storage Layer
//!
//! Key-value persistence for the shopping list. Every persisted piece of
//! state (items, filter set, theme) lives under its own key as a JSON text
//! value, mirroring the browser storage layout the list was first kept in.
//!
//! # Backends
//!
//! - [`FileStore`]: one `<key>.json` file per key inside a data directory
//! - [`MemoryStore`]: process-local map, for tests and non-interactive callers
//!
//! # Example
//!
//! ```rust
//! use shoplist_storage::{keys, load_json, save_json, KeyValueStore, MemoryStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! save_json(&store, keys::FILTERS, &vec!["padaria".to_string()])?;
//!
//! let filters: Option<Vec<String>> = load_json(&store, keys::FILTERS);
//! assert_eq!(filters, Some(vec!["padaria".to_string()]));
//!
//! // Malformed values read back as absent
//! store.save(keys::THEME, "{not json")?;
//! assert_eq!(load_json::<String, _>(&store, keys::THEME), None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod file;
pub mod json;
pub mod memory;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use json::{load_json, save_json};
pub use memory::MemoryStore;

use std::rc::Rc;
use std::sync::Arc;

/// Keys under which list state is persisted.
pub mod keys {
    /// The item collection: a JSON array of `{id, name, category}` records.
    pub const ITEMS: &str = "shoppingList";
    /// The active category filters: a JSON array of strings.
    pub const FILTERS: &str = "shoppingListFilters";
    /// The theme preference: the JSON string `"light"` or `"dark"`.
    pub const THEME: &str = "theme";

    /// Every key the application writes.
    pub const ALL: [&str; 3] = [ITEMS, FILTERS, THEME];
}

/// Text-valued persistent storage addressed by string keys.
///
/// Each call is independent and immediate; there is no transaction
/// spanning several keys. Methods take `&self` so a single backend can be
/// shared (via `Rc`/`Arc`) by every component that persists state.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
