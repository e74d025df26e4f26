//! # lift-pipeline
//!
//! One request, start to finish: decode and validate input, scrub it, build
//! the prompt from session history, call the generator, and commit the
//! exchange back to session memory.
//!
//! ## Modules
//!
//! - `input`: upload decoding and input validation
//! - `pipeline`: `LiftPipeline` request orchestration
//! - `tracing_setup`: subscriber initialization

pub mod input;
pub mod pipeline;
pub mod tracing_setup;

pub use input::{decode_upload, DecodedUpload, GenerationRequest, PreparedInput};
pub use pipeline::{GenerationResponse, LiftPipeline};
pub use tracing_setup::init_tracing;
