// ============================================================================
// ERRORS - User-facing validation and platform capability failures
// ============================================================================

use thiserror::Error;

/// localStorage access failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write key {key}")]
    Write { key: String },

    #[error("could not read key {key}")]
    Read { key: String },

    #[error("could not remove key {key}")]
    Remove { key: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Why the one-shot position request did not produce coordinates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("geolocation is not supported")]
    Unsupported,

    #[error("location error: {0}")]
    Other(String),
}

impl LocationError {
    /// Map a `GeolocationPositionError.code`
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Other(message),
        }
    }
}

/// Failures of the login sequence. `Display` is the inline message shown
/// under the credential field.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter a valid 12-digit Aadhaar number")]
    InvalidCredential,

    #[error("Location services not supported by your browser")]
    LocationUnsupported,

    #[error("Location verification failed. Please enable location services.")]
    LocationFailed(LocationError),

    #[error("A verification is already in progress")]
    Busy,

    #[error("Could not store the session. Please try again.")]
    Storage(#[from] StorageError),
}

impl From<LocationError> for AuthError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Unsupported => Self::LocationUnsupported,
            other => Self::LocationFailed(other),
        }
    }
}

/// Required-field checks on the record forms, surfaced as toasts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill all required fields")]
    MissingMedicationFields,

    #[error("Please select a file and provide a name")]
    MissingDocument,

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("No patient record loaded")]
    NoRecord,

    #[error("Unknown health metric: {0}")]
    UnknownMetric(String),
}
