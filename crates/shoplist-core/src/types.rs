//! Shared types used across the shoplist application.
//!
//! This module defines common newtypes and enums that provide type safety
//! and clear domain modeling.

use crate::error::ShoplistError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a shopping item.
///
/// Freshly created items get a UUID v4 string. Identifiers read back from
/// storage are accepted as-is, so any non-empty string is a valid id;
/// decoding goes through [`ItemId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Create an `ItemId` from an existing string.
    ///
    /// # Errors
    /// Returns error if the id is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ShoplistError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShoplistError::Validation(
                "item id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Create a new random `ItemId` using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ShoplistError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two-valued display mode preference.
///
/// Serialized as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

impl ThemePreference {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
