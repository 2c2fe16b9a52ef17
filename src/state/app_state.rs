// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::Route;
use crate::services::{SessionService, Services};
use crate::state::{
    AuthState, ChangeNotifier, DashboardState, HealthState, LoginState, PatientState, RouterState,
    ToastState,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub services: Services,

    // Session gate
    pub auth: AuthState,
    pub router: RouterState,

    // Per-view state
    pub login: LoginState,
    pub dashboard: DashboardState,
    pub patient: PatientState,
    pub health: HealthState,
    pub toasts: ToastState,

    // Reactivity
    change_subscribers: ChangeNotifier,
}

impl AppState {
    /// Session status comes from the persisted flag; the route is whatever the
    /// address bar says, unguarded until the router starts.
    pub fn new(config: AppConfig, services: Services) -> Self {
        let change_subscribers = ChangeNotifier::new();
        let auth = AuthState::restore(SessionService::new(services.store.clone()));
        let router = RouterState::new(Route::parse(&services.history.current_path()));
        let toasts = ToastState::new(
            services.scheduler.clone(),
            config.ui.toast_ms,
            change_subscribers.clone(),
        );

        Self {
            config: Rc::new(config),
            auth,
            router,
            login: LoginState::new(),
            dashboard: DashboardState::new(),
            patient: PatientState::new(),
            health: HealthState::new(change_subscribers.clone()),
            toasts,
            services,
            change_subscribers,
        }
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback);
    }

    pub fn notify_changes(&self) {
        self.change_subscribers.notify();
    }
}
