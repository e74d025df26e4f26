use super::error_code::{self, LiftErrorCode};

/// Detection or anonymization failed. The turn must be aborted: text that
/// could not be scrubbed is never forwarded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScrubbingError {
    #[error("detection pattern '{pattern}' for {kind} is unavailable")]
    PatternUnavailable { kind: String, pattern: String },

    #[error("entity span {start}..{end} is invalid for text of {len} bytes")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("entity spans overlap at byte {at}")]
    OverlappingSpans { at: usize },

    #[error("redacted {kind} value still present after anonymization")]
    ResidualPii { kind: String },

    #[error("residual leak check could not run: {reason}")]
    LeakCheckUnavailable { reason: String },

    #[error("entity detector failed: {reason}")]
    DetectorFailed { reason: String },
}

impl LiftErrorCode for ScrubbingError {
    fn error_code(&self) -> &'static str {
        error_code::SCRUBBING_ERROR
    }
}
