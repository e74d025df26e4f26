use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::EntityKind;

/// Privacy subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Entity kinds to detect. Empty means every supported kind.
    pub allowed_entities: Vec<EntityKind>,
    /// Matches scoring below this are dropped.
    pub min_confidence: f64,
    /// Enable label-aware confidence adjustment.
    pub context_scoring: bool,
    /// Per-kind base confidence overrides, keyed by tag (e.g. "PHONE").
    pub confidence_overrides: HashMap<String, f64>,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            allowed_entities: Vec::new(),
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            context_scoring: defaults::DEFAULT_CONTEXT_SCORING,
            confidence_overrides: HashMap::new(),
        }
    }
}

impl PrivacyConfig {
    /// Whether `kind` is enabled by the allow-list.
    pub fn allows(&self, kind: EntityKind) -> bool {
        self.allowed_entities.is_empty() || self.allowed_entities.contains(&kind)
    }
}
