//! Top-level LIFT configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{InputConfig, ObservabilityConfig, PrivacyConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LIFT_*`)
/// 2. Config file passed to [`LiftConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftConfig {
    pub privacy: PrivacyConfig,
    pub session: SessionConfig,
    pub input: InputConfig,
    pub observability: ObservabilityConfig,
}

impl LiftConfig {
    /// Load configuration from an optional TOML file, apply environment
    /// overrides, and validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.privacy.min_confidence) {
            return Err(invalid("privacy.min_confidence", "must be between 0.0 and 1.0"));
        }
        for (tag, value) in &self.privacy.confidence_overrides {
            if tag.parse::<crate::models::EntityKind>().is_err() {
                return Err(invalid(
                    "privacy.confidence_overrides",
                    &format!("unknown entity kind '{tag}'"),
                ));
            }
            if !(0.0..=1.0).contains(value) {
                return Err(invalid(
                    "privacy.confidence_overrides",
                    &format!("{tag} must be between 0.0 and 1.0"),
                ));
            }
        }
        self.session.validate()?;
        if self.input.max_upload_bytes == 0 {
            return Err(invalid("input.max_upload_bytes", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LIFT_SESSION_MAX_TURNS`, `LIFT_PRIVACY_MIN_CONFIDENCE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut LiftConfig) {
        if let Ok(val) = std::env::var("LIFT_SESSION_MAX_TURNS") {
            if let Ok(v) = val.parse::<usize>() {
                config.session.max_turns = v;
            }
        }
        if let Ok(val) = std::env::var("LIFT_SESSION_IDLE_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.session.idle_timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("LIFT_PRIVACY_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.privacy.min_confidence = v;
            }
        }
        if let Ok(val) = std::env::var("LIFT_INPUT_MAX_UPLOAD_BYTES") {
            if let Ok(v) = val.parse::<usize>() {
                config.input.max_upload_bytes = v;
            }
        }
        if let Ok(val) = std::env::var("LIFT_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
