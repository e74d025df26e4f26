//! # lift-privacy
//!
//! PII detection and anonymization.
//! Regex patterns for names, emails, phones, government and financial IDs,
//! addresses and student IDs. Label-aware scoring reduces false positives on
//! ordinary teaching material. Anonymization is one-way and fails closed.

pub mod anonymizer;
pub mod context_scoring;
pub mod detector;
pub mod engine;
pub mod patterns;

pub use anonymizer::Anonymizer;
pub use detector::EntityDetector;
pub use engine::PrivacyEngine;
