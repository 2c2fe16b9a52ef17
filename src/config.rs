// ============================================================================
// CONFIG - Timing knobs and storage keys
// ============================================================================
// A couple of values can be overridden at build time (see build.rs / .env).
// ============================================================================

use serde::{Deserialize, Serialize};

/// localStorage key holding the session flag
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";

/// Value stored under `SESSION_FLAG_KEY` when authenticated
pub const SESSION_FLAG_VALUE: &str = "true";

/// localStorage key holding the last saved health metrics
pub const HEALTH_METRICS_KEY: &str = "healthMetrics";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub auth: AuthConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            auth: AuthConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever was baked in through `option_env!`
    pub fn from_build_env() -> Self {
        let mut config = Self::default();

        if let Some(raw) = option_env!("MEDISYNC_BIOMETRIC_MS") {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.auth.biometric_duration_ms = ms,
                _ => log::warn!("⚠️ [CONFIG] invalid MEDISYNC_BIOMETRIC_MS: {}", raw),
            }
        }

        if let Some(level) = option_env!("MEDISYNC_LOG_LEVEL") {
            config.log_level = level.to_string();
        }

        config
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Total length of the fingerprint animation
    pub biometric_duration_ms: u32,
    /// Progress points added per tick
    pub biometric_step: u8,
    /// Pause between reaching 100% and granting access
    pub biometric_settle_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            biometric_duration_ms: 3000,
            biometric_step: 2,
            biometric_settle_ms: 500,
        }
    }
}

impl AuthConfig {
    /// Interval between ticks so that 0 -> 100 takes `biometric_duration_ms`
    pub fn tick_interval_ms(&self) -> u32 {
        let step = u32::from(self.biometric_step.clamp(1, 100));
        let ticks = (100 + step - 1) / step;
        (self.biometric_duration_ms / ticks).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dashboard_splash_ms: u32,
    pub clock_refresh_ms: u32,
    pub patient_reauth_ms: u32,
    pub open_record_ms: u32,
    pub record_load_ms: u32,
    pub document_upload_ms: u32,
    pub toast_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dashboard_splash_ms: 1000,
            clock_refresh_ms: 1000,
            patient_reauth_ms: 3000,
            open_record_ms: 500,
            record_load_ms: 1500,
            document_upload_ms: 1500,
            toast_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tick_interval_spreads_duration() {
        let auth = AuthConfig::default();
        // 50 ticks of 2 points
        assert_eq!(auth.tick_interval_ms(), 60);
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let auth = AuthConfig {
            biometric_duration_ms: 10,
            biometric_step: 1,
            biometric_settle_ms: 0,
        };
        assert_eq!(auth.tick_interval_ms(), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"auth":{"biometric_duration_ms":1000}}"#)
            .expect("partial config should parse");
        assert_eq!(config.auth.biometric_duration_ms, 1000);
        assert_eq!(config.auth.biometric_settle_ms, 500);
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
