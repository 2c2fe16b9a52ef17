pub mod auth;
pub mod route;
pub mod appointment;
pub mod patient;
pub mod medication;
pub mod document;
pub mod health_metrics;

pub use auth::{Credential, GeoPosition, CREDENTIAL_LEN};
pub use route::Route;
pub use appointment::{Appointment, AppointmentStatus};
pub use patient::{
    BloodPressureSample, HistoryEntry, PatientRecord, PatientSummary, VitalKind, VitalSample, Vitals,
};
pub use medication::{Medication, MedicationDraft, MedicationField};
pub use document::{DocumentDraft, DocumentKind, PatientDocument, SelectedFile};
pub use health_metrics::{HealthMetrics, METRIC_FIELDS};
