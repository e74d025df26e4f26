//! Stable error codes for callers that map failures onto transport statuses.

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const UPLOAD_TOO_LARGE: &str = "UPLOAD_TOO_LARGE";
pub const FILE_DECODE_ERROR: &str = "FILE_DECODE_ERROR";
pub const SCRUBBING_ERROR: &str = "SCRUBBING_ERROR";
pub const GENERATION_ERROR: &str = "GENERATION_ERROR";
pub const GENERATION_TIMEOUT: &str = "GENERATION_TIMEOUT";
pub const SESSION_CONFLICT: &str = "SESSION_CONFLICT";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Implemented by every error enum in the workspace.
pub trait LiftErrorCode {
    fn error_code(&self) -> &'static str;
}
