// ============================================================================
// AUTH SEQUENCER - Credential -> location -> biometric -> session
// ============================================================================
// Each submit starts a new attempt. Location answers and timer completions
// belonging to an older attempt are ignored, which is how a late geolocation
// callback after logout/navigation is kept from doing anything.
// ============================================================================

use crate::error::{AuthError, LocationError};
use crate::models::{Credential, GeoPosition, Route};
use crate::state::{AppState, LoginPhase};
use crate::viewmodels::{BiometricTimer, RouterViewModel};

pub struct AuthSequencer {
    state: AppState,
}

impl AuthSequencer {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Keep only digits, at most 12. Ignored while verifying.
    pub fn set_input(&self, raw: &str) {
        let login = &self.state.login;
        if login.is_verifying() {
            return;
        }

        *login.input.borrow_mut() = Credential::sanitize(raw);
        *login.error.borrow_mut() = None;
        self.state.notify_changes();
    }

    /// Validate and kick off location verification
    pub fn submit(&self) -> Result<(), AuthError> {
        let login = &self.state.login;
        if login.is_verifying() {
            return Err(AuthError::Busy);
        }

        let credential = match Credential::parse(&login.input()) {
            Ok(credential) => credential,
            Err(e) => {
                log::warn!("⚠️ [AUTH] Rejected credential ({} digits)", login.input().len());
                *login.error.borrow_mut() = Some(e.to_string());
                self.state.notify_changes();
                return Err(e);
            }
        };

        log::info!("🔐 [AUTH] Credential {} accepted, verifying location", credential.masked());
        *login.error.borrow_mut() = None;
        login.location_verified.set(false);
        login.progress.set(0);
        login.phase.set(LoginPhase::VerifyingLocation);
        let attempt = login.next_attempt();
        self.state.notify_changes();

        let state = self.state.clone();
        self.state
            .services
            .location
            .current_position(Box::new(move |result| {
                AuthSequencer::new(&state).on_location(attempt, result);
            }));

        Ok(())
    }

    fn on_location(&self, attempt: u64, result: Result<GeoPosition, LocationError>) {
        let login = &self.state.login;
        if !login.is_current(attempt) || login.phase() != LoginPhase::VerifyingLocation {
            log::debug!("🕰️ [AUTH] Ignoring location answer for attempt {}", attempt);
            return;
        }

        match result {
            Ok(position) => {
                log::info!(
                    "📍 [AUTH] Location verified ({:.4}, {:.4})",
                    position.latitude,
                    position.longitude
                );
                login.location_verified.set(true);
                login.phase.set(LoginPhase::VerifyingIdentity);
                self.start_biometric(attempt);
                self.state.notify_changes();
            }
            Err(e) => {
                log::warn!("❌ [AUTH] Location verification failed: {}", e);
                let err = AuthError::from(e);
                login.reset_to_entry(Some(err.to_string()));
                self.state.notify_changes();
            }
        }
    }

    fn start_biometric(&self, attempt: u64) {
        let progress_state = self.state.clone();
        let complete_state = self.state.clone();

        let timer = BiometricTimer::start(
            self.state.services.scheduler.clone(),
            &self.state.config.auth,
            move |progress| {
                progress_state.login.progress.set(progress);
                progress_state.notify_changes();
            },
            move || AuthSequencer::new(&complete_state).on_biometric_complete(attempt),
        );

        let previous = self.state.login.timer.borrow_mut().replace(timer);
        drop(previous);
    }

    fn on_biometric_complete(&self, attempt: u64) {
        let login = &self.state.login;
        if !login.is_current(attempt) {
            return;
        }

        match self.state.auth.authenticate() {
            Ok(_) => {
                log::info!("✅ [AUTH] Identity verified, opening dashboard");
                RouterViewModel::new(&self.state).navigate(Route::Dashboard);
            }
            Err(e) => {
                log::error!("❌ [AUTH] Could not persist session: {}", e);
                let err = AuthError::from(e);
                login.reset_to_entry(Some(err.to_string()));
                self.state.notify_changes();
            }
        }
    }

    /// Leaving the login view: stop the timer and orphan any pending location answer
    pub fn dispose(&self) {
        let login = &self.state.login;
        login.next_attempt();
        login.reset_to_entry(None);
        login.input.borrow_mut().clear();
    }
}
