use std::env;
use std::fmt;

use crate::assessment::risk::RiskThresholds;

/// Top-level configuration for applications embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub thresholds: RiskThresholds,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the
    /// defaults observed in production (moderate at 4, high at 8).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = RiskThresholds::default();
        let moderate = threshold_var("ASSESS_RISK_MODERATE", defaults.moderate)?;
        let high = threshold_var("ASSESS_RISK_HIGH", defaults.high)?;

        let thresholds = RiskThresholds { moderate, high };
        if !thresholds.is_ordered() {
            return Err(ConfigError::ThresholdOrder { moderate, high });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            thresholds,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn threshold_var(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidThreshold { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidThreshold { name: &'static str, value: String },
    ThresholdOrder { moderate: u32, high: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "{name} must be a non-negative integer, got '{value}'")
            }
            ConfigError::ThresholdOrder { moderate, high } => {
                write!(
                    f,
                    "ASSESS_RISK_MODERATE ({moderate}) must be below ASSESS_RISK_HIGH ({high})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("ASSESS_RISK_MODERATE");
        env::remove_var("ASSESS_RISK_HIGH");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.thresholds.moderate, 4);
        assert_eq!(config.thresholds.high, 8);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_accepts_overridden_bands() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASSESS_RISK_MODERATE", "6");
        env::set_var("ASSESS_RISK_HIGH", "12");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.thresholds.moderate, 6);
        assert_eq!(config.thresholds.high, 12);
        reset_env();
    }

    #[test]
    fn load_rejects_non_numeric_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASSESS_RISK_MODERATE", "lots");
        let error = AppConfig::load().expect_err("non-numeric threshold rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidThreshold {
                name: "ASSESS_RISK_MODERATE",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn load_rejects_inverted_bands() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASSESS_RISK_MODERATE", "8");
        env::set_var("ASSESS_RISK_HIGH", "4");
        let error = AppConfig::load().expect_err("inverted bands rejected");
        assert!(matches!(
            error,
            ConfigError::ThresholdOrder {
                moderate: 8,
                high: 4
            }
        ));
        reset_env();
    }
}
