use crate::errors::ScrubbingError;
use crate::models::DetectedEntity;

/// PII span detection.
pub trait IEntityDetector: Send + Sync {
    /// Report non-overlapping PII spans in `text`, sorted by start offset.
    /// Empty or whitespace-only input yields an empty vector.
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>, ScrubbingError>;
}
