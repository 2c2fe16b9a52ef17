// ============================================================================
// STATE - Rc<RefCell> containers with change notification
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod router_state;
pub mod login_state;
pub mod dashboard_state;
pub mod patient_state;
pub mod health_state;
pub mod toast_state;
pub mod app_state;

pub use reactivity::{ChangeNotifier, ReactiveState};
pub use auth_state::{AuthState, SessionStatus};
pub use router_state::{resolve_route, RouterState};
pub use login_state::{LoginPhase, LoginState};
pub use dashboard_state::{DashboardState, DashboardTab};
pub use patient_state::{PatientState, RecordTab};
pub use health_state::HealthState;
pub use toast_state::{ToastKind, ToastState};
pub use app_state::AppState;
