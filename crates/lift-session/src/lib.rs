//! # lift-session
//!
//! Short-lived conversational memory keyed by session.
//! History is bounded, FIFO-evicted, and only ever holds sanitized text.
//! Writes are compare-and-swap on a per-session version.
//!
//! ## Modules
//!
//! - `memory`: `SessionMemory`, the bounded history log
//! - `store`: `InMemorySessionStore` with `DashMap` and idle expiry
//! - `codec`: size-capped persisted form of a history

pub mod codec;
pub mod memory;
pub mod store;

pub use codec::{decode_history, encode_history, fit_history};
pub use memory::{CommitReceipt, SessionMemory};
pub use store::InMemorySessionStore;
