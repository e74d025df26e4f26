use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{EXCHANGE_ENCODING_OVERHEAD, MAX_ENCODED_BYTES_PER_CHAR};
use crate::errors::ConfigError;

/// Conversational memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// History cap in turns. Must be even so whole exchanges are evicted.
    pub max_turns: usize,
    /// Sessions idle for longer than this are treated as absent.
    pub idle_timeout_secs: u64,
    /// Upper bound on the encoded history payload. Must hold at least one
    /// exchange of `max_turn_chars`-long turns.
    pub max_persisted_bytes: usize,
    /// Stored turn content is truncated to this many characters.
    pub max_turn_chars: usize,
}

impl SessionConfig {
    /// Smallest `max_persisted_bytes` that still holds one exchange of
    /// `max_turn_chars`-long turns, whatever their characters.
    pub fn min_persisted_bytes(&self) -> usize {
        self.max_turn_chars
            .saturating_mul(2 * MAX_ENCODED_BYTES_PER_CHAR)
            .saturating_add(EXCHANGE_ENCODING_OVERHEAD)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns < 2 || self.max_turns % 2 != 0 {
            return Err(invalid(
                "session.max_turns",
                "must be an even number of at least 2".to_string(),
            ));
        }
        if self.max_turn_chars == 0 {
            return Err(invalid(
                "session.max_turn_chars",
                "must be greater than 0".to_string(),
            ));
        }
        let min = self.min_persisted_bytes();
        if self.max_persisted_bytes < min {
            return Err(invalid(
                "session.max_persisted_bytes",
                format!(
                    "must be at least {min} to hold one exchange of {} character turns",
                    self.max_turn_chars
                ),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: defaults::DEFAULT_MAX_TURNS,
            idle_timeout_secs: defaults::DEFAULT_IDLE_TIMEOUT_SECS,
            max_persisted_bytes: defaults::DEFAULT_MAX_PERSISTED_BYTES,
            max_turn_chars: defaults::DEFAULT_MAX_TURN_CHARS,
        }
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message,
    }
}
