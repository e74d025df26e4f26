/// Assistant name used in the prompt preamble.
pub const ASSISTANT_NAME: &str = "LIFT";

/// Redacted values shorter than this are not checked for residual leaks.
/// Short values (e.g. a two-letter initial) collide with ordinary text.
pub const MIN_LEAK_CHECK_BYTES: usize = 4;

/// Bytes of text inspected before a match for a PII label.
pub const LABEL_CONTEXT_WINDOW: usize = 60;

/// Message returned when a request carries nothing to work with.
pub const NOTHING_PROVIDED_MESSAGE: &str = "Provide text via upload, paste, or instructions.";

/// Worst-case JSON bytes for one stored char. Control chars are escaped as
/// `\u00XX`.
pub const MAX_ENCODED_BYTES_PER_CHAR: usize = 6;

/// JSON framing of one encoded user/assistant exchange, with room for the
/// largest `seq`.
pub const EXCHANGE_ENCODING_OVERHEAD: usize = 128;
