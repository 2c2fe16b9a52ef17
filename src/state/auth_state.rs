// ============================================================================
// AUTH STATE - Session gate (anonymous / authenticated)
// ============================================================================
// Loaded once from the persisted flag at start-up, written on every
// transition. Passed to route guards instead of living in a global.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::StorageError;
use crate::services::SessionService;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

#[derive(Clone)]
pub struct AuthState {
    status: Rc<Cell<SessionStatus>>,
    session: SessionService,
}

impl AuthState {
    /// Initial state from the persisted flag
    pub fn restore(session: SessionService) -> Self {
        let status = if session.load_flag() {
            log::info!("🔓 [AUTH] Session flag found, starting authenticated");
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        };

        Self {
            status: Rc::new(Cell::new(status)),
            session,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    /// anonymous -> authenticated. Returns `Ok(false)` when already
    /// authenticated, in which case nothing is written.
    pub fn authenticate(&self) -> Result<bool, StorageError> {
        if self.is_authenticated() {
            return Ok(false);
        }
        self.session.save_flag()?;
        self.status.set(SessionStatus::Authenticated);
        log::info!("✅ [AUTH] Authenticated");
        Ok(true)
    }

    /// Back to anonymous. The in-memory state always flips, even when the
    /// flag could not be removed from storage.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.status.set(SessionStatus::Anonymous);
        log::info!("👋 [AUTH] Logged out");
        self.session.clear_flag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_FLAG_KEY;
    use crate::services::{KeyValueStore, MemoryStore};

    #[test]
    fn test_restore_reads_flag() {
        let store = Rc::new(MemoryStore::new());
        assert_eq!(
            AuthState::restore(SessionService::new(store.clone())).status(),
            SessionStatus::Anonymous
        );

        store.set_item(SESSION_FLAG_KEY, "true").unwrap();
        assert_eq!(
            AuthState::restore(SessionService::new(store.clone())).status(),
            SessionStatus::Authenticated
        );
    }

    #[test]
    fn test_authenticate_writes_once() {
        let store = Rc::new(MemoryStore::new());
        let auth = AuthState::restore(SessionService::new(store.clone()));

        assert!(auth.authenticate().unwrap());
        assert!(!auth.authenticate().unwrap());
        assert_eq!(store.write_count(), 1);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_logout_clears_flag() {
        let store = Rc::new(MemoryStore::new());
        let auth = AuthState::restore(SessionService::new(store.clone()));
        auth.authenticate().unwrap();
        auth.logout().unwrap();

        assert_eq!(auth.status(), SessionStatus::Anonymous);
        assert_eq!(store.get_item(SESSION_FLAG_KEY).unwrap(), None);
        assert!(!AuthState::restore(SessionService::new(store)).is_authenticated());
    }
}
