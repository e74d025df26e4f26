use crate::errors::SessionError;
use crate::models::{HistorySnapshot, SessionId, Turn};

/// Versioned, client-associated session persistence.
pub trait ISessionStore: Send + Sync {
    /// Load a session's history. Unknown or expired sessions load as an
    /// empty snapshot at version 0.
    fn load(&self, id: &SessionId) -> Result<HistorySnapshot, SessionError>;

    /// Replace the history if the stored version still equals
    /// `expected_version`. Returns the new version.
    fn compare_and_swap(
        &self,
        id: &SessionId,
        expected_version: u64,
        turns: Vec<Turn>,
    ) -> Result<u64, SessionError>;
}
