//! Shoplist List - the shopping list state and its derived views.
//!
//! - [`ItemStore`] owns the item collection and persists it on every mutation
//! - [`FilterStore`] owns the persisted set of active category filters
//! - [`derive_view`] turns (items, filters, search term) into the display order
//! - [`category_counts`] aggregates the unfiltered collection per category
//!
//! Both stores take their storage backend by injection; nothing in this
//! crate reaches for global state.
//!
//! # Example
//!
//! ```rust
//! use shoplist_list::{derive_view, FilterSet, ItemStore};
//! use shoplist_storage::MemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = ItemStore::load(MemoryStore::new());
//! store.add("Pão", "Padaria")?;
//! store.add("Leite", "Laticínios")?;
//!
//! let view = derive_view(store.items(), &FilterSet::new(), "");
//! let names: Vec<&str> = view.iter().map(|item| item.name()).collect();
//! assert_eq!(names, ["leite", "pão"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod collate;
pub mod filters;
pub mod item;
pub mod store;
pub mod view;

pub use filters::{FilterSet, FilterStore};
pub use item::ShoppingItem;
pub use store::{ItemStore, RemovalRequest};
pub use view::{category_counts, derive_view, CategoryCount};
