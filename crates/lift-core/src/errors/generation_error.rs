use super::error_code::{self, LiftErrorCode};

/// Failures reported by the external generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Surfaced to the caller verbatim.
    #[error("{message}")]
    Failed { message: String },

    #[error("generation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl LiftErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => error_code::GENERATION_ERROR,
            Self::Timeout { .. } => error_code::GENERATION_TIMEOUT,
        }
    }
}
