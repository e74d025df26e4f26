use super::error_code::{self, LiftErrorCode};

/// Session store and history codec errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session {session_id} changed concurrently: expected version {expected}, found {actual}")]
    VersionConflict {
        session_id: String,
        expected: u64,
        actual: u64,
    },

    #[error("session history codec error: {reason}")]
    Codec { reason: String },

    /// The turns that must be kept do not fit the persisted size cap.
    #[error("session history of {size} bytes exceeds the {limit} byte cap")]
    PayloadTooLarge { size: usize, limit: usize },
}

impl LiftErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VersionConflict { .. } => error_code::SESSION_CONFLICT,
            Self::Codec { .. } | Self::PayloadTooLarge { .. } => error_code::SESSION_ERROR,
        }
    }
}
