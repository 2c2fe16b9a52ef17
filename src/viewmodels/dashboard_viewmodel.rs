// ============================================================================
// DASHBOARD VIEWMODEL - Splash, clock, appointment re-authentication
// ============================================================================

use crate::models::{PatientSummary, Route};
use crate::services::records_service;
use crate::state::{AppState, DashboardTab};
use crate::utils::clock_label;
use crate::viewmodels::RouterViewModel;

pub struct DashboardViewModel {
    state: AppState,
}

impl DashboardViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub fn mount(&self) {
        let dashboard = &self.state.dashboard;
        dashboard.reset();
        *dashboard.appointments.borrow_mut() = records_service::todays_appointments();
        *dashboard.clock.borrow_mut() = clock_label();

        let ui = &self.state.config.ui;
        let scheduler = &self.state.services.scheduler;

        let state = self.state.clone();
        let splash = scheduler.after(
            ui.dashboard_splash_ms,
            Box::new(move || {
                state.dashboard.loading.set(false);
                state.notify_changes();
            }),
        );

        let state = self.state.clone();
        let clock = scheduler.every(
            ui.clock_refresh_ms,
            Box::new(move || {
                let label = clock_label();
                if *state.dashboard.clock.borrow() != label {
                    *state.dashboard.clock.borrow_mut() = label;
                    state.notify_changes();
                }
            }),
        );

        let mut tasks = dashboard.tasks.borrow_mut();
        tasks.splash = Some(splash);
        tasks.clock = Some(clock);
        log::info!("🏥 [DASHBOARD] Mounted");
    }

    pub fn unmount(&self) {
        self.state.dashboard.reset();
    }

    pub fn set_tab(&self, tab: DashboardTab) {
        self.state.dashboard.active_tab.set(tab);
        self.state.notify_changes();
    }

    /// Select an appointment and re-authenticate before showing the patient.
    /// Picking another one while pending restarts the delay.
    pub fn select_appointment(&self, id: &str) {
        let dashboard = &self.state.dashboard;
        let Some(appointment) = dashboard
            .appointments
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
        else {
            log::warn!("⚠️ [DASHBOARD] Unknown appointment {}", id);
            return;
        };

        *dashboard.selected_id.borrow_mut() = Some(appointment.id.clone());
        *dashboard.current_patient.borrow_mut() = None;
        dashboard.authenticating.set(true);

        let state = self.state.clone();
        let handle = self.state.services.scheduler.after(
            self.state.config.ui.patient_reauth_ms,
            Box::new(move || {
                let dashboard = &state.dashboard;
                if dashboard.selected_id().as_deref() != Some(appointment.id.as_str()) {
                    return;
                }
                *dashboard.current_patient.borrow_mut() =
                    Some(PatientSummary::from_appointment(&appointment));
                dashboard.authenticating.set(false);
                log::info!("👤 [DASHBOARD] Access granted to {}", appointment.name);
                state.notify_changes();
            }),
        );

        let previous = dashboard.tasks.borrow_mut().reauth.replace(handle);
        drop(previous);
        self.state.notify_changes();
    }

    /// "View Complete Records"
    pub fn open_record(&self) {
        let dashboard = &self.state.dashboard;
        let Some(patient) = dashboard.current_patient() else {
            return;
        };
        if dashboard.opening_record.replace(true) {
            return;
        }

        let state = self.state.clone();
        let handle = self.state.services.scheduler.after(
            self.state.config.ui.open_record_ms,
            Box::new(move || {
                RouterViewModel::new(&state).navigate(Route::Patient(patient.id.clone()));
            }),
        );

        let previous = dashboard.tasks.borrow_mut().open_record.replace(handle);
        drop(previous);
        self.state.notify_changes();
    }

    pub fn open_health_monitor(&self) {
        RouterViewModel::new(&self.state).navigate(Route::HealthMonitor);
    }

    pub fn logout(&self) {
        RouterViewModel::new(&self.state).logout();
    }
}
