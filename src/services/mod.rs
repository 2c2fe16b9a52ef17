// ============================================================================
// SERVICES - Platform access (storage, timers, geolocation, history) + mock data
// ============================================================================

pub mod storage;
pub mod scheduler;
pub mod geolocation;
pub mod history;
pub mod session_service;
pub mod records_service;

use std::rc::Rc;

pub use storage::{save_json, KeyValueStore, LocalStore, MemoryStore};
pub use scheduler::{BrowserScheduler, Scheduler, TaskHandle};
pub use geolocation::{BrowserGeolocation, LocationProvider};
pub use history::{BrowserHistory, HistoryPort};
pub use session_service::SessionService;

/// Platform collaborators injected into the state layer
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn KeyValueStore>,
    pub scheduler: Rc<dyn Scheduler>,
    pub location: Rc<dyn LocationProvider>,
    pub history: Rc<dyn HistoryPort>,
}

impl Services {
    /// Real browser implementations
    pub fn browser() -> Self {
        let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("⚠️ [STORAGE] localStorage unavailable, session will not survive a reload");
                Rc::new(MemoryStore::new())
            }
        };

        Self {
            store,
            scheduler: Rc::new(BrowserScheduler),
            location: Rc::new(BrowserGeolocation),
            history: Rc::new(BrowserHistory),
        }
    }
}
