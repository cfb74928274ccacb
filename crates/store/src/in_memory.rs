//! In-memory backend: useful for testing and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;
use twinvoice_core::error::StoreError;
use twinvoice_core::store::KeyValueStore;

/// A store that keeps values in a `HashMap`.
/// Useful for testing and sessions where persistence isn't needed.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values (handy for fixtures).
    pub fn with_entries<K: Into<String>, V: Into<String>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("persona_v1").unwrap(), None);

        store.set("persona_v1", r#"{"displayName":"Ana"}"#).unwrap();
        assert_eq!(
            store.get("persona_v1").unwrap().as_deref(),
            Some(r#"{"displayName":"Ana"}"#)
        );

        store.remove("persona_v1").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_is_ok() {
        let store = InMemoryStore::new();
        assert!(store.remove("nothing_here").is_ok());
    }

    #[test]
    fn seeded_entries_visible() {
        let store = InMemoryStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
