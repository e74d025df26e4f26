use super::error_code::LiftErrorCode;
use super::{ConfigError, GenerationError, InputError, ScrubbingError, SessionError};

/// Top-level error for a single request. Aggregates subsystem errors via
/// `From` conversions. Nothing here is fatal to the process.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiftError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("scrubbing failed: {0}")]
    Scrubbing(#[from] ScrubbingError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LiftError {
    /// Whether the caller may resubmit the same request unchanged.
    /// Only a lost compare-and-swap race qualifies.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::VersionConflict { .. })
        )
    }
}

impl LiftErrorCode for LiftError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Scrubbing(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type LiftResult<T> = Result<T, LiftError>;
