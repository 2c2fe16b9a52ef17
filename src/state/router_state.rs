// ============================================================================
// ROUTER STATE - Current route + guard
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Route;
use crate::state::SessionStatus;

/// Where a request for `requested` actually lands
pub fn resolve_route(requested: Route, status: SessionStatus) -> Route {
    match (status, requested) {
        (SessionStatus::Anonymous, route) if route.is_protected() => Route::Entry,
        (SessionStatus::Authenticated, Route::Entry) => Route::Dashboard,
        (_, route) => route,
    }
}

#[derive(Clone)]
pub struct RouterState {
    current: Rc<RefCell<Route>>,
}

impl RouterState {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    pub fn set_current(&self, route: Route) {
        *self.current.borrow_mut() = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_sent_to_entry() {
        for route in [Route::Dashboard, Route::HealthMonitor, Route::Patient("2".into())] {
            assert_eq!(resolve_route(route, SessionStatus::Anonymous), Route::Entry);
        }
        assert_eq!(resolve_route(Route::Entry, SessionStatus::Anonymous), Route::Entry);
        assert_eq!(
            resolve_route(Route::NotFound("/x".into()), SessionStatus::Anonymous),
            Route::NotFound("/x".into())
        );
    }

    #[test]
    fn test_authenticated_skips_login() {
        assert_eq!(resolve_route(Route::Entry, SessionStatus::Authenticated), Route::Dashboard);
        assert_eq!(
            resolve_route(Route::Patient("2".into()), SessionStatus::Authenticated),
            Route::Patient("2".into())
        );
    }
}
