use lift_core::config::PrivacyConfig;
use lift_core::errors::ScrubbingError;
use lift_core::models::SanitizedText;
use lift_core::traits::{IAnonymizer, IEntityDetector, ISanitizer};
use tracing::debug;

use crate::anonymizer::Anonymizer;
use crate::detector::EntityDetector;

/// Privacy engine that sanitizes text by detecting PII and replacing it with
/// placeholders.
///
/// Implements `ISanitizer` from lift-core. Any detector or anonymizer
/// failure is returned as an error; the engine never falls back to the
/// unsanitized input.
pub struct PrivacyEngine {
    detector: Box<dyn IEntityDetector>,
    anonymizer: Box<dyn IAnonymizer>,
}

impl PrivacyEngine {
    /// Create an engine with the regex detector and placeholder anonymizer.
    pub fn new(config: PrivacyConfig) -> Self {
        Self {
            detector: Box::new(EntityDetector::new(config)),
            anonymizer: Box::new(Anonymizer::new()),
        }
    }

    /// Create an engine from explicit components.
    pub fn with_components(
        detector: Box<dyn IEntityDetector>,
        anonymizer: Box<dyn IAnonymizer>,
    ) -> Self {
        Self {
            detector,
            anonymizer,
        }
    }
}

impl Default for PrivacyEngine {
    fn default() -> Self {
        Self::new(PrivacyConfig::default())
    }
}

impl ISanitizer for PrivacyEngine {
    fn sanitize(&self, text: &str) -> Result<SanitizedText, ScrubbingError> {
        let entities = self.detector.detect(text)?;
        let sanitized = self.anonymizer.anonymize(text, &entities)?;
        debug!(
            redactions = sanitized.redaction_count(),
            input_bytes = text.len(),
            "sanitized text"
        );
        Ok(sanitized)
    }
}
