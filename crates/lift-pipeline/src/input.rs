//! Input boundary: everything a request carries before any of it is scrubbed.

use lift_core::config::InputConfig;
use lift_core::errors::{FileDecodeError, InputError};
use tracing::warn;

/// Raw request fields as received from the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Uploaded file bytes, expected to be UTF-8.
    pub upload: Option<Vec<u8>>,
    pub pasted_text: String,
    pub instructions: String,
    /// Use-case key such as `none` or `uc1`.
    pub use_case: String,
}

/// Upload text with invalid byte sequences removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedUpload {
    pub text: String,
    /// Present when anything had to be dropped.
    pub warning: Option<FileDecodeError>,
}

/// Validated, still unsanitized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInput {
    pub content: String,
    pub instructions: String,
    pub use_case: String,
    pub decode_warning: Option<FileDecodeError>,
}

/// Decode bytes as UTF-8, dropping invalid sequences instead of failing.
pub fn decode_upload(bytes: &[u8]) -> DecodedUpload {
    let mut text = String::with_capacity(bytes.len());
    let mut invalid_sequences = 0;
    let mut dropped_bytes = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            invalid_sequences += 1;
            dropped_bytes += chunk.invalid().len();
        }
    }

    let warning = (invalid_sequences > 0).then_some(FileDecodeError {
        invalid_sequences,
        dropped_bytes,
    });
    DecodedUpload { text, warning }
}

impl GenerationRequest {
    /// Decode the upload, combine it with the pasted text, and reject
    /// requests that carry nothing to work with.
    ///
    /// Combined content is the upload text followed by a newline, then the
    /// trimmed pasted text.
    pub fn prepare(self, config: &InputConfig) -> Result<PreparedInput, InputError> {
        let mut content = String::new();
        let mut decode_warning = None;

        if let Some(bytes) = &self.upload {
            if bytes.len() > config.max_upload_bytes {
                return Err(InputError::UploadTooLarge {
                    size: bytes.len(),
                    limit: config.max_upload_bytes,
                });
            }
            let decoded = decode_upload(bytes);
            if let Some(warning) = decoded.warning {
                warn!(
                    invalid_sequences = warning.invalid_sequences,
                    dropped_bytes = warning.dropped_bytes,
                    "upload decoded lossily"
                );
            }
            decode_warning = decoded.warning;
            content.push_str(&decoded.text);
            content.push('\n');
        }

        let pasted = self.pasted_text.trim();
        if !pasted.is_empty() {
            content.push_str(pasted);
        }

        if content.trim().is_empty() && self.instructions.trim().is_empty() {
            return Err(InputError::NothingProvided);
        }

        Ok(PreparedInput {
            content,
            instructions: self.instructions,
            use_case: self.use_case,
            decode_warning,
        })
    }
}
