// ============================================================================
// STORAGE - localStorage behind a small key/value trait
// ============================================================================

use std::cell::RefCell;
#[cfg(test)]
use std::cell::Cell;
use std::collections::HashMap;

use serde::Serialize;
use web_sys::{window, Storage};

use crate::error::StorageError;

/// Raw string key/value store with localStorage semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Serialize `value` as JSON and overwrite `key`
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

/// Browser `window.localStorage`
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// `None` when there is no window or storage is blocked (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Read {
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|_| StorageError::Remove {
            key: key.to_string(),
        })
    }
}

/// In-memory store. Used when localStorage is unavailable; state is lost on reload.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    #[cfg(test)]
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_item` / `remove_item` calls
    #[cfg(test)]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        #[cfg(test)]
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        #[cfg(test)]
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        lang: String,
    }

    #[test]
    fn test_save_json_overwrites_wholesale() {
        let store = MemoryStore::new();
        save_json(&store, "prefs", &Prefs { lang: "en".into() }).unwrap();
        save_json(&store, "prefs", &Prefs { lang: "hi".into() }).unwrap();

        let raw = store.get_item("prefs").unwrap().expect("saved");
        let loaded: Prefs = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, Prefs { lang: "hi".into() });
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_remove_clears_key() {
        let store = MemoryStore::new();
        store.set_item("flag", "true").unwrap();
        store.remove_item("flag").unwrap();
        assert_eq!(store.get_item("flag").unwrap(), None);
        assert_eq!(store.write_count(), 2);
    }
}
