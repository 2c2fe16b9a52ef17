use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AuthError;

/// Number of digits in an Aadhaar number
pub const CREDENTIAL_LEN: usize = 12;

/// A validated 12-digit identifier used in place of a password.
/// Only lives for the duration of one login attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Keystroke filter: keep ASCII digits, cut at 12
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(CREDENTIAL_LEN)
            .collect()
    }

    /// Validate a submission. Anything other than exactly 12 digits after
    /// filtering is rejected.
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let digits = Self::sanitize(raw);
        if digits.len() != CREDENTIAL_LEN {
            return Err(AuthError::InvalidCredential);
        }
        Ok(Self(digits))
    }

    /// Safe to log: only the last four digits
    pub fn masked(&self) -> String {
        format!("XXXX-XXXX-{}", &self.0[CREDENTIAL_LEN - 4..])
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

/// Coordinates returned by the platform. Used for a log line, never stored.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_non_digits_and_truncates() {
        assert_eq!(Credential::sanitize("1234-5678 9012"), "123456789012");
        assert_eq!(Credential::sanitize("12345678901234"), "123456789012");
        assert_eq!(Credential::sanitize("abc"), "");
        assert_eq!(Credential::sanitize("١٢٣"), "");
    }

    #[test]
    fn test_parse_requires_exactly_twelve_digits() {
        for raw in ["", "12345", "12345678901", "abcdefghijkl", "1234 5678 901"] {
            assert!(
                matches!(Credential::parse(raw), Err(AuthError::InvalidCredential)),
                "{raw:?} should be rejected"
            );
        }

        let credential = Credential::parse("1234 5678 9012").expect("12 digits after filtering");
        assert_eq!(credential.0, "123456789012");
    }

    #[test]
    fn test_debug_never_prints_full_number() {
        let credential = Credential::parse("123456789012").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("12345678"));
        assert!(debug.contains("XXXX-XXXX-9012"));
    }
}
