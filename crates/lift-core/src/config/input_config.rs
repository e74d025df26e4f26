use serde::{Deserialize, Serialize};

use super::defaults;

/// Request input limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_upload_bytes: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: defaults::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
