use crate::errors::ScrubbingError;
use crate::models::{DetectedEntity, SanitizedText};

/// One-way replacement of detected spans with type-tagged placeholders.
pub trait IAnonymizer: Send + Sync {
    fn anonymize(
        &self,
        text: &str,
        entities: &[DetectedEntity],
    ) -> Result<SanitizedText, ScrubbingError>;
}
