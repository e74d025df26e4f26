//! In-memory session store with versioned writes and idle expiry.

use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use lift_core::config::SessionConfig;
use lift_core::errors::SessionError;
use lift_core::traits::ISessionStore;
use lift_core::{HistorySnapshot, SessionId, Turn};
use tracing::debug;

use crate::codec::{decode_history, encode_history};

/// Upper bound on the idle timeout, keeping `chrono::Duration` in range.
const MAX_IDLE_TIMEOUT_SECS: u64 = 10 * 365 * 24 * 3600;

#[derive(Debug, Clone)]
struct StoredSession {
    version: u64,
    /// Encoded history, exactly as a client-side store would hold it.
    payload: String,
    last_activity: DateTime<Utc>,
}

/// Thread-safe session store using `DashMap` for concurrent access.
///
/// Each session is kept in its encoded form. A write whose payload exceeds
/// the size cap is rejected, not trimmed; callers fit history first with
/// [`crate::codec::fit_history`]. Sessions idle for at least the configured
/// timeout read as absent and are removed lazily or by
/// [`InMemorySessionStore::purge_expired`].
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, StoredSession>,
    idle_timeout: Duration,
    max_persisted_bytes: usize,
}

impl InMemorySessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout: Duration::seconds(
                config.idle_timeout_secs.min(MAX_IDLE_TIMEOUT_SECS) as i64,
            ),
            max_persisted_bytes: config.max_persisted_bytes,
        }
    }

    /// Number of sessions held, expired ones included until purged.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove every expired session. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !self.is_expired(s));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            debug!(removed, "purged expired sessions");
        }
        removed
    }

    /// Size of the stored payload for a session, if present.
    pub fn payload_len(&self, id: &SessionId) -> Option<usize> {
        self.sessions.get(id).map(|s| s.payload.len())
    }

    fn is_expired(&self, session: &StoredSession) -> bool {
        Utc::now() - session.last_activity >= self.idle_timeout
    }

    fn current_version(&self, session: &StoredSession) -> u64 {
        if self.is_expired(session) {
            0
        } else {
            session.version
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl ISessionStore for InMemorySessionStore {
    fn load(&self, id: &SessionId) -> Result<HistorySnapshot, SessionError> {
        match self.sessions.get(id) {
            None => return Ok(HistorySnapshot::empty()),
            Some(session) if !self.is_expired(&session) => {
                return Ok(HistorySnapshot {
                    version: session.version,
                    turns: decode_history(&session.payload)?,
                });
            }
            Some(_) => {}
        }

        self.sessions.remove_if(id, |_, s| self.is_expired(s));
        debug!(session_id = %id, "session expired");
        Ok(HistorySnapshot::empty())
    }

    fn compare_and_swap(
        &self,
        id: &SessionId,
        expected_version: u64,
        turns: Vec<Turn>,
    ) -> Result<u64, SessionError> {
        let payload = encode_history(&turns, self.max_persisted_bytes)?;

        let new_version = match self.sessions.entry(id.clone()) {
            Entry::Occupied(mut occupied) => {
                let actual = self.current_version(occupied.get());
                if actual != expected_version {
                    return Err(SessionError::VersionConflict {
                        session_id: id.to_string(),
                        expected: expected_version,
                        actual,
                    });
                }
                let version = actual + 1;
                occupied.insert(StoredSession {
                    version,
                    payload,
                    last_activity: Utc::now(),
                });
                version
            }
            Entry::Vacant(vacant) => {
                if expected_version != 0 {
                    return Err(SessionError::VersionConflict {
                        session_id: id.to_string(),
                        expected: expected_version,
                        actual: 0,
                    });
                }
                vacant.insert(StoredSession {
                    version: 1,
                    payload,
                    last_activity: Utc::now(),
                });
                1
            }
        };

        Ok(new_version)
    }
}
