//! # lift-prompt
//!
//! Builds the outbound prompt. Output is a pure function of its inputs so
//! prompts can be checked against golden files.
//!
//! ## Modules
//!
//! - `use_case`: `UseCase` enumeration and its context strings
//! - `history`: history block serialization
//! - `builder`: `PromptContext` and `PromptBuilder`

pub mod builder;
pub mod history;
pub mod use_case;

pub use builder::{PromptBuilder, PromptContext};
pub use history::{serialize_history, NO_HISTORY_SENTINEL};
pub use use_case::UseCase;
