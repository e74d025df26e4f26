use std::sync::Arc;

use lift_core::config::SessionConfig;
use lift_core::errors::{ConfigError, SessionError};
use lift_core::traits::ISessionStore;
use lift_core::{HistorySnapshot, Role, SessionId, Turn};
use tracing::{debug, warn};

use crate::codec::fit_history;

/// Outcome of a committed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Session version after the write.
    pub version: u64,
    /// Turns actually stored, after eviction.
    pub history_len: usize,
}

/// Bounded, ordered conversation log per session.
///
/// The cap is counted in turns and must be even. Exchanges are appended as
/// a user/assistant pair in one write, so FIFO eviction removes whole pairs.
/// The turns being written are never evicted by the same write.
/// History never shrinks except through eviction or store expiry.
pub struct SessionMemory {
    store: Arc<dyn ISessionStore>,
    max_turns: usize,
    max_turn_chars: usize,
    max_persisted_bytes: usize,
}

impl SessionMemory {
    pub fn new(store: Arc<dyn ISessionStore>, config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            max_turns: config.max_turns,
            max_turn_chars: config.max_turn_chars,
            max_persisted_bytes: config.max_persisted_bytes,
        })
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// History oldest first.
    pub fn get(&self, id: &SessionId) -> Result<Vec<Turn>, SessionError> {
        Ok(self.store.load(id)?.turns)
    }

    /// History together with the version it was read at.
    pub fn snapshot(&self, id: &SessionId) -> Result<HistorySnapshot, SessionError> {
        self.store.load(id)
    }

    /// Append one turn, then evict from the front down to the cap.
    pub fn append(
        &self,
        id: &SessionId,
        role: Role,
        content: &str,
    ) -> Result<CommitReceipt, SessionError> {
        let snapshot = self.store.load(id)?;
        let seq = snapshot.next_seq();
        let mut turns = snapshot.turns;
        turns.push(Turn::new(role, self.clip(content), seq));
        self.commit(id, snapshot.version, turns, 1)
    }

    /// Append a user turn and its assistant reply in a single write,
    /// provided the session is still at `expected_version`.
    pub fn append_exchange(
        &self,
        id: &SessionId,
        expected_version: u64,
        user: &str,
        assistant: &str,
    ) -> Result<CommitReceipt, SessionError> {
        let snapshot = self.store.load(id)?;
        if snapshot.version != expected_version {
            return Err(SessionError::VersionConflict {
                session_id: id.to_string(),
                expected: expected_version,
                actual: snapshot.version,
            });
        }

        let seq = snapshot.next_seq();
        let mut turns = snapshot.turns;
        turns.push(Turn::new(Role::User, self.clip(user), seq));
        turns.push(Turn::new(Role::Assistant, self.clip(assistant), seq + 1));
        self.commit(id, expected_version, turns, 2)
    }

    /// Evict to the turn cap and then to the byte cap, keeping the last
    /// `pinned` turns, and write at `expected_version`.
    fn commit(
        &self,
        id: &SessionId,
        expected_version: u64,
        mut turns: Vec<Turn>,
        pinned: usize,
    ) -> Result<CommitReceipt, SessionError> {
        let evicted = truncate_front(&mut turns, self.max_turns);
        let oversized = fit_history(&mut turns, self.max_persisted_bytes, pinned)?;
        if oversized > 0 {
            warn!(
                session_id = %id,
                dropped = oversized,
                cap = self.max_persisted_bytes,
                "history exceeded persisted size cap; oldest turns dropped"
            );
        }

        let history_len = turns.len();
        let version = self.store.compare_and_swap(id, expected_version, turns)?;
        debug!(session_id = %id, version, evicted, history_len, "history committed");
        Ok(CommitReceipt {
            version,
            history_len,
        })
    }

    fn clip(&self, content: &str) -> String {
        truncate_chars(content, self.max_turn_chars)
    }
}

/// Drop turns from the front until at most `max` remain. Returns how many
/// were dropped.
pub fn truncate_front(turns: &mut Vec<Turn>, max: usize) -> usize {
    let excess = turns.len().saturating_sub(max);
    turns.drain(..excess);
    excess
}

/// First `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
