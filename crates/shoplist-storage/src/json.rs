//! Typed JSON access on top of a [`KeyValueStore`].
//!
//! Values are stored as JSON text. Reads never fail: a missing key, an
//! unreadable backend or a value that does not decode are all reported as
//! absent, so callers fall back to their defaults.

use crate::error::{Result, StorageError};
use crate::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Load and decode the value stored under `key`.
///
/// Returns `None` when the key is absent or its content is not a valid
/// encoding of `T`.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let text = match store.load(key) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(key, "key absent, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read key, using default");
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed persisted value, using default");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let text =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    store.save(key, &text)
}
