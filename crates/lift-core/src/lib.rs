//! # lift-core
//!
//! Foundation crate for the LIFT teaching-materials pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LiftConfig;
pub use errors::{LiftError, LiftResult};
pub use models::{DetectedEntity, EntityKind, HistorySnapshot, Role, SessionId, Turn};
