//! Shoplist Theme - display mode preference and palettes.
//!
//! The preference is a two-state machine (`light` ⇄ `dark`) persisted under
//! the `theme` key on every transition. Each state supplies a [`Palette`]
//! the presentation layer renders with.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod palette;

pub use palette::{Palette, Rgb};
pub use shoplist_core::ThemePreference;

use shoplist_storage::{keys, load_json, save_json, KeyValueStore, Result};
use tracing::info;

/// Current display mode, mirrored to storage.
#[derive(Debug)]
pub struct ThemeController<S: KeyValueStore> {
    storage: S,
    current: ThemePreference,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Load the persisted preference; absent or malformed data yields `light`.
    pub fn load(storage: S) -> Self {
        let current: ThemePreference = load_json(&storage, keys::THEME).unwrap_or_default();
        Self { storage, current }
    }

    /// Current preference.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the preference and persist it. Returns the new preference.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }

    /// Set an explicit preference and persist it.
    pub fn set(&mut self, preference: ThemePreference) -> Result<()> {
        info!(from = %self.current, to = %preference, "theme changed");
        self.current = preference;
        save_json(&self.storage, keys::THEME, &self.current)
    }

    /// Palette for the current preference.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_storage::MemoryStore;
    use std::rc::Rc;

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemeController::load(MemoryStore::new());
        assert_eq!(theme.current(), ThemePreference::Light);
        assert_eq!(theme.palette(), Palette::light());
    }

    #[test]
    fn test_toggle_twice_returns_to_light() {
        let mut theme = ThemeController::load(MemoryStore::new());
        assert_eq!(theme.toggle().expect("first toggle"), ThemePreference::Dark);
        assert_eq!(theme.toggle().expect("second toggle"), ThemePreference::Light);
    }

    #[test]
    fn test_every_transition_persists() {
        let storage = Rc::new(MemoryStore::new());
        let mut theme = ThemeController::load(Rc::clone(&storage));

        theme.toggle().expect("toggle");
        assert_eq!(
            storage.load(keys::THEME).expect("load"),
            Some("\"dark\"".to_string())
        );
        assert_eq!(
            ThemeController::load(Rc::clone(&storage)).current(),
            ThemePreference::Dark
        );

        theme.set(ThemePreference::Light).expect("set light");
        assert_eq!(
            ThemeController::load(storage).current(),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_malformed_value_is_light() {
        for raw in ["\"sepia\"", "dark", "", "[\"dark\"]"] {
            let storage = MemoryStore::with_entries([(keys::THEME, raw)]);
            assert_eq!(
                ThemeController::load(storage).current(),
                ThemePreference::Light,
                "raw value {raw:?}"
            );
        }
    }

    #[test]
    fn test_palette_follows_mode() {
        let mut theme = ThemeController::load(MemoryStore::new());
        theme.set(ThemePreference::Dark).expect("set dark");
        assert_eq!(theme.palette(), Palette::dark());
    }
}
