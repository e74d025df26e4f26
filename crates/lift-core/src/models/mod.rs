pub mod entity;
pub mod sanitized;
pub mod session;
pub mod turn;

pub use entity::{DetectedEntity, EntityKind};
pub use sanitized::{Redaction, SanitizedText};
pub use session::{HistorySnapshot, SessionId};
pub use turn::{Role, Turn};
