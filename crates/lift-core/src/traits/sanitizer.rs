use crate::errors::ScrubbingError;
use crate::models::SanitizedText;

/// PII sanitization: detection followed by anonymization.
pub trait ISanitizer: Send + Sync {
    /// Sanitize text, replacing PII with placeholders. Any failure means the
    /// text must not leave the process.
    fn sanitize(&self, text: &str) -> Result<SanitizedText, ScrubbingError>;
}
