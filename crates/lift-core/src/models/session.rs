use std::fmt;

use serde::{Deserialize, Serialize};

use super::turn::Turn;

/// Opaque, externally issued session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Issue a fresh random identifier for a client without one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// History read from a session store together with the version it was read
/// at. Version 0 means the session does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub version: u64,
    pub turns: Vec<Turn>,
}

impl HistorySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sequence number the next appended turn receives.
    pub fn next_seq(&self) -> u64 {
        self.turns.last().map_or(0, |t| t.seq + 1)
    }
}
