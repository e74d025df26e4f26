use serde::{Deserialize, Serialize};

use super::entity::EntityKind;

/// Result of sanitization with metadata about what was redacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedText {
    pub text: String,
    pub redactions: Vec<Redaction>,
}

impl SanitizedText {
    pub fn redaction_count(&self) -> usize {
        self.redactions.len()
    }
}

/// A single redaction applied during sanitization. Offsets refer to the
/// original text; the original value itself is never carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redaction {
    pub kind: EntityKind,
    pub placeholder: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}
