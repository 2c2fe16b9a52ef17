// ============================================================================
// ROUTER VIEWMODEL - Guarded navigation over the History API
// ============================================================================
// Every route change goes through `resolve_route`, so protected pages are
// unreachable while anonymous no matter how they were requested (link,
// address bar, back/forward).
// ============================================================================

use crate::models::Route;
use crate::state::{resolve_route, AppState};
use crate::viewmodels::{
    AuthSequencer, DashboardViewModel, HealthMonitorViewModel, PatientViewModel,
};

pub struct RouterViewModel {
    state: AppState,
}

impl RouterViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Resolve the address bar at start-up and mount the first view
    pub fn start(&self) {
        let requested = Route::parse(&self.state.services.history.current_path());
        let resolved = self.guard(requested.clone());
        if resolved != requested {
            self.state.services.history.replace(&resolved.path());
        }

        log::info!("🧭 [ROUTER] Starting at {}", resolved);
        self.state.router.set_current(resolved.clone());
        self.enter(&resolved);
        self.state.notify_changes();
    }

    /// Push a new history entry for the (guarded) route
    pub fn navigate(&self, route: Route) {
        let target = self.guard(route);
        if target == self.state.router.current() {
            return;
        }

        self.state.services.history.push(&target.path());
        self.transition(target);
    }

    /// `popstate`: the browser already moved, re-read and re-guard
    pub fn sync_from_location(&self) {
        let requested = Route::parse(&self.state.services.history.current_path());
        let target = self.guard(requested.clone());
        if target != requested {
            self.state.services.history.replace(&target.path());
        }
        if target == self.state.router.current() {
            return;
        }

        self.transition(target);
    }

    pub fn logout(&self) {
        if let Err(e) = self.state.auth.logout() {
            log::error!("❌ [ROUTER] Could not clear session flag: {}", e);
        }
        self.navigate(Route::Entry);
    }

    fn guard(&self, requested: Route) -> Route {
        let resolved = resolve_route(requested.clone(), self.state.auth.status());
        if resolved != requested {
            log::info!("🚧 [ROUTER] {} redirected to {}", requested, resolved);
        }
        resolved
    }

    fn transition(&self, target: Route) {
        let previous = self.state.router.current();
        log::info!("🧭 [ROUTER] {} -> {}", previous, target);

        self.leave(&previous);
        self.state.router.set_current(target.clone());
        self.enter(&target);
        self.state.notify_changes();
    }

    fn leave(&self, route: &Route) {
        match route {
            Route::Entry => AuthSequencer::new(&self.state).dispose(),
            Route::Dashboard => DashboardViewModel::new(&self.state).unmount(),
            Route::Patient(_) => PatientViewModel::new(&self.state).unmount(),
            Route::HealthMonitor => HealthMonitorViewModel::new(&self.state).reset(),
            Route::NotFound(_) => {}
        }
    }

    fn enter(&self, route: &Route) {
        match route {
            Route::Dashboard => DashboardViewModel::new(&self.state).mount(),
            Route::Patient(id) => PatientViewModel::new(&self.state).open(id),
            Route::HealthMonitor => HealthMonitorViewModel::new(&self.state).reset(),
            Route::Entry | Route::NotFound(_) => {}
        }
    }
}
