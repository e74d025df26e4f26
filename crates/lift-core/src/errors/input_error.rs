use super::error_code::{self, LiftErrorCode};
use crate::constants::NOTHING_PROVIDED_MESSAGE;

/// Request-shape errors, reported directly to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{}", NOTHING_PROVIDED_MESSAGE)]
    NothingProvided,

    #[error("upload of {size} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { size: usize, limit: usize },
}

impl LiftErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingProvided => error_code::INPUT_ERROR,
            Self::UploadTooLarge { .. } => error_code::UPLOAD_TOO_LARGE,
        }
    }
}
