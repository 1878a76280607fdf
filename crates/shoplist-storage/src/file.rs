//! Directory-backed key-value storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes land in a temporary sibling
//! file first and are renamed into place, so a crash mid-write leaves the
//! previous value intact.

use crate::error::{Result, StorageError};
use crate::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSION: &str = "json";

/// Persistent storage in a directory of JSON documents.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened file store");
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    /// Returns `StorageError::InvalidKey` for keys that are empty, contain
    /// path separators, or would escape the store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.contains("..")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key, path = %path.display(), bytes = contents.len(), "loaded key");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));

        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(key, path = %path.display(), bytes = value.len(), "saved key");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory() {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("a").join("b");

        let store = FileStore::open(&dir).expect("open store");
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = FileStore::open(tmp.path()).expect("open store");

        store.save("theme", "\"dark\"").expect("save");
        assert_eq!(store.load("theme").expect("load"), Some("\"dark\"".to_string()));
        assert!(tmp.path().join("theme.json").is_file());
        assert!(!tmp.path().join("theme.json.tmp").exists());
    }

    #[test]
    fn test_load_missing_key() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = FileStore::open(tmp.path()).expect("open store");
        assert_eq!(store.load("shoppingList").expect("load"), None);
    }

    #[test]
    fn test_remove() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = FileStore::open(tmp.path()).expect("open store");

        store.save("k", "v").expect("save");
        store.remove("k").expect("remove");
        store.remove("k").expect("remove again");
        assert_eq!(store.load("k").expect("load"), None);
    }

    #[test]
    fn test_rejects_escaping_keys() {
        let tmp = TempDir::new().expect("create temp dir");
        let store = FileStore::open(tmp.path()).expect("open store");

        for key in ["", "../evil", "a/b", "a\\b", "..", "sp ace"] {
            let result = store.save(key, "x");
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
