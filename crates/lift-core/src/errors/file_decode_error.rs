use super::error_code::{self, LiftErrorCode};

/// An upload contained bytes that are not valid UTF-8.
///
/// Never returned as an `Err`: the upload is decoded lossily with the invalid
/// sequences dropped, and this value travels alongside the text as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("upload contained {invalid_sequences} invalid UTF-8 sequence(s); {dropped_bytes} byte(s) dropped")]
pub struct FileDecodeError {
    pub invalid_sequences: usize,
    pub dropped_bytes: usize,
}

impl LiftErrorCode for FileDecodeError {
    fn error_code(&self) -> &'static str {
        error_code::FILE_DECODE_ERROR
    }
}
