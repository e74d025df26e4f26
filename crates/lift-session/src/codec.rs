//! Persisted form of a session history: a JSON array of
//! `{role, content, seq}` objects, oldest first, capped in bytes.

use lift_core::errors::SessionError;
use lift_core::{Role, Turn};

/// Encode turns as a persisted payload of at most `max_bytes`.
pub fn encode_history(turns: &[Turn], max_bytes: usize) -> Result<String, SessionError> {
    let payload = serde_json::to_string(turns).map_err(codec_error)?;
    if payload.len() > max_bytes {
        return Err(SessionError::PayloadTooLarge {
            size: payload.len(),
            limit: max_bytes,
        });
    }
    Ok(payload)
}

/// Drop the oldest exchanges until `turns` encodes to at most `max_bytes`.
/// The last `pinned` turns are never dropped; if they alone do not fit, the
/// history is left as it was and `PayloadTooLarge` is returned.
///
/// Returns the number of turns dropped.
pub fn fit_history(
    turns: &mut Vec<Turn>,
    max_bytes: usize,
    pinned: usize,
) -> Result<usize, SessionError> {
    let sizes = turns
        .iter()
        .map(|t| serde_json::to_string(t).map(|s| s.len()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(codec_error)?;

    let evictable = turns.len().saturating_sub(pinned);
    let mut start = 0;
    let mut size = array_len(&sizes);
    while size > max_bytes {
        let width = eviction_width(&turns[start..]);
        if width == 0 || start + width > evictable {
            return Err(SessionError::PayloadTooLarge {
                size,
                limit: max_bytes,
            });
        }
        start += width;
        size = array_len(&sizes[start..]);
    }

    turns.drain(..start);
    Ok(start)
}

/// Decode a payload produced by [`encode_history`].
pub fn decode_history(payload: &str) -> Result<Vec<Turn>, SessionError> {
    serde_json::from_str(payload).map_err(codec_error)
}

/// Encoded length of a JSON array whose elements encode to `sizes`.
fn array_len(sizes: &[usize]) -> usize {
    2 + sizes.iter().sum::<usize>() + sizes.len().saturating_sub(1)
}

/// Number of turns to evict from the front: a whole user/assistant pair when
/// one leads the history, otherwise a single turn.
fn eviction_width(turns: &[Turn]) -> usize {
    match turns {
        [first, second, ..] if first.role == Role::User && second.role == Role::Assistant => 2,
        [] => 0,
        _ => 1,
    }
}

fn codec_error(e: serde_json::Error) -> SessionError {
    SessionError::Codec {
        reason: e.to_string(),
    }
}
