pub mod biometric_timer;
pub mod auth_sequencer;
pub mod router_viewmodel;
pub mod dashboard_viewmodel;
pub mod patient_viewmodel;
pub mod health_monitor_viewmodel;

pub use biometric_timer::BiometricTimer;
pub use auth_sequencer::AuthSequencer;
pub use router_viewmodel::RouterViewModel;
pub use dashboard_viewmodel::DashboardViewModel;
pub use patient_viewmodel::PatientViewModel;
pub use health_monitor_viewmodel::HealthMonitorViewModel;
