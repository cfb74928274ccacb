//! File-based backend: one JSON file per key.
//!
//! Storage location: `~/.twinvoice/data/<key>.json`
//!
//! Simple, portable, human-inspectable, and requires no database. Values are
//! written to a temporary sibling first and renamed into place, so a crash
//! never leaves a half-written value behind.

use std::path::{Path, PathBuf};
use tracing::debug;
use twinvoice_core::error::StoreError;
use twinvoice_core::store::KeyValueStore;

/// A directory-backed key/value store.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!(dir = %dir.display(), "File store opened");
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys map to file names, so they are restricted to `[A-Za-z0-9_.-]`
    /// and may not start with a dot.
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn io_error(key: &str, e: std::io::Error) -> StoreError {
        StoreError::Io {
            key: key.to_string(),
            reason: e.to_string(),
        }
    }
}

impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| Self::io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| Self::io_error(key, e))?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persists_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data");

        let store = FileStore::new(&dir);
        store.set("corrections_v1", "[]").unwrap();

        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.get("corrections_v1").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.dir(), dir.as_path());
        assert!(dir.join("corrections_v1.json").exists());
        assert!(!dir.join("corrections_v1.json.tmp").exists());
    }

    #[test]
    fn missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("persona_v1").unwrap(), None);
    }

    #[test]
    fn remove_deletes_file_and_tolerates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("persona_v1", "{}").unwrap();
        store.remove("persona_v1").unwrap();
        assert_eq!(store.get("persona_v1").unwrap(), None);
        assert!(store.remove("persona_v1").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        for key in ["", "../escape", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn session_keys_are_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("speaker_target_v1.default", "{}").unwrap();
        assert!(store.get("speaker_target_v1.default").unwrap().is_some());
    }
}
