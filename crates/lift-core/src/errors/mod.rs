//! Error handling for LIFT.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod file_decode_error;
pub mod generation_error;
pub mod input_error;
pub mod lift_error;
pub mod scrubbing_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use error_code::LiftErrorCode;
pub use file_decode_error::FileDecodeError;
pub use generation_error::GenerationError;
pub use input_error::InputError;
pub use lift_error::{LiftError, LiftResult};
pub use scrubbing_error::ScrubbingError;
pub use session_error::SessionError;
