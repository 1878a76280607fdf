//! Application state management.

use shoplist_core::AppConfig;
use shoplist_list::{derive_view, FilterStore, ItemStore, ShoppingItem};
use shoplist_storage::{keys, KeyValueStore};
use shoplist_theme::ThemeController;
use tracing::info;

/// Everything one command invocation works on.
///
/// The item, filter and theme stores share one storage backend; `S` is a
/// cheap handle (`Rc<FileStore>` in the binary, `Rc<MemoryStore>` in tests).
pub struct AppState<S: KeyValueStore + Clone> {
    /// Loaded configuration
    pub config: AppConfig,
    /// Item collection
    pub items: ItemStore<S>,
    /// Active category filters
    pub filters: FilterStore<S>,
    /// Display mode
    pub theme: ThemeController<S>,
    storage: S,
}

impl<S: KeyValueStore + Clone> AppState<S> {
    /// Load every piece of persisted state from `storage`.
    pub fn load(storage: S, config: AppConfig) -> Self {
        Self {
            config,
            items: ItemStore::load(storage.clone()),
            filters: FilterStore::load(storage.clone()),
            theme: ThemeController::load(storage.clone()),
            storage,
        }
    }

    /// Items to display for `search`, under the active filters.
    #[must_use]
    pub fn view(&self, search: &str) -> Vec<&ShoppingItem> {
        derive_view(self.items.items(), self.filters.filters(), search)
    }

    /// Delete every persisted key and reload default state.
    pub fn reset(&mut self) -> shoplist_storage::Result<()> {
        for key in keys::ALL {
            self.storage.remove(key)?;
        }
        info!("cleared all persisted state");

        self.items = ItemStore::load(self.storage.clone());
        self.filters = FilterStore::load(self.storage.clone());
        self.theme = ThemeController::load(self.storage.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::ThemePreference;
    use shoplist_storage::MemoryStore;
    use std::rc::Rc;

    #[test]
    fn test_reset_clears_everything() {
        let storage = Rc::new(MemoryStore::new());
        let mut state = AppState::load(Rc::clone(&storage), AppConfig::default());
        state.items.add("Leite", "Laticínios").expect("add");
        state.filters.toggle("laticínios").expect("toggle");
        state.theme.toggle().expect("theme");
        assert_eq!(storage.len(), 3);

        state.reset().expect("reset");

        assert!(storage.is_empty());
        assert!(state.items.is_empty());
        assert!(state.filters.filters().is_empty());
        assert_eq!(state.theme.current(), ThemePreference::Light);
    }

    #[test]
    fn test_view_applies_filters() {
        let mut state = AppState::load(Rc::new(MemoryStore::new()), AppConfig::default());
        state.items.add("Leite", "Laticínios").expect("add");
        state.items.add("Pão", "Padaria").expect("add");
        state.filters.toggle("padaria").expect("toggle");

        let names: Vec<&str> = state.view("").iter().map(|item| item.name()).collect();
        assert_eq!(names, ["pão"]);
    }
}
