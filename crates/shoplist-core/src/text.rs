//! Text normalization shared by the item store, filters and search.

use crate::error::{Result, ShoplistError};

/// Normalize a name or category for storage.
///
/// Stored text is always lowercase, regardless of input casing.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive substring test.
///
/// An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Reject empty or whitespace-only form input.
///
/// The item store accepts any string; callers run this before handing
/// user input to it.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShoplistError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
