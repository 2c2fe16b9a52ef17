// ============================================================================
// SESSION SERVICE - Persisted session flag
// ============================================================================

use std::rc::Rc;

use crate::config::{SESSION_FLAG_KEY, SESSION_FLAG_VALUE};
use crate::error::StorageError;
use crate::services::KeyValueStore;

#[derive(Clone)]
pub struct SessionService {
    store: Rc<dyn KeyValueStore>,
}

impl SessionService {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// True only when the key holds exactly `"true"`. Read errors count as absent.
    pub fn load_flag(&self) -> bool {
        match self.store.get_item(SESSION_FLAG_KEY) {
            Ok(Some(value)) => value == SESSION_FLAG_VALUE,
            Ok(None) => false,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Could not read session flag: {}", e);
                false
            }
        }
    }

    pub fn save_flag(&self) -> Result<(), StorageError> {
        self.store.set_item(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)?;
        log::info!("💾 [SESSION] Session flag stored");
        Ok(())
    }

    pub fn clear_flag(&self) -> Result<(), StorageError> {
        self.store.remove_item(SESSION_FLAG_KEY)?;
        log::info!("🗑️ [SESSION] Session flag removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    #[test]
    fn test_only_exact_true_counts() {
        let store = Rc::new(MemoryStore::new());
        let service = SessionService::new(store.clone());
        assert!(!service.load_flag());

        for value in ["TRUE", "1", "yes", "true "] {
            store.set_item(SESSION_FLAG_KEY, value).unwrap();
            assert!(!service.load_flag(), "{value:?}");
        }

        store.set_item(SESSION_FLAG_KEY, "true").unwrap();
        assert!(service.load_flag());
    }

    #[test]
    fn test_save_and_clear() {
        let store = Rc::new(MemoryStore::new());
        let service = SessionService::new(store.clone());
        service.save_flag().unwrap();
        assert_eq!(store.get_item(SESSION_FLAG_KEY).unwrap().as_deref(), Some("true"));
        service.clear_flag().unwrap();
        assert_eq!(store.get_item(SESSION_FLAG_KEY).unwrap(), None);
    }
}
