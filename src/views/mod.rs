pub mod app;
pub mod shared;
pub mod login;
pub mod dashboard;
pub mod patient;
pub mod health_monitor;
pub mod not_found;

pub use app::render_app;
pub use login::render_login;
pub use dashboard::render_dashboard;
pub use patient::render_patient;
pub use health_monitor::render_health_monitor;
pub use not_found::render_not_found;
