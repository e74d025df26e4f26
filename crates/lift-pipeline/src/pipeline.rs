use std::sync::Arc;

use lift_core::config::LiftConfig;
use lift_core::errors::{FileDecodeError, LiftErrorCode};
use lift_core::traits::{IGenerator, ISanitizer};
use lift_core::{LiftResult, SessionId};
use lift_prompt::PromptBuilder;
use lift_session::SessionMemory;
use tracing::{debug, info, info_span, warn};

use crate::input::GenerationRequest;

/// What a successful request returns to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResponse {
    /// Generator output, exactly as returned.
    pub generated_text: String,
    /// Redactions applied to the instructions and content.
    pub redaction_count: usize,
    pub decode_warning: Option<FileDecodeError>,
    /// Turns stored for the session after this exchange was committed.
    pub history_len: usize,
}

/// Request orchestrator. Built once at startup with its collaborators and
/// shared across requests.
///
/// A request either completes and commits one user/assistant exchange, or
/// fails and leaves session history as it was. Nothing reaches the
/// generator without passing through the sanitizer first.
pub struct LiftPipeline {
    config: LiftConfig,
    sanitizer: Arc<dyn ISanitizer>,
    memory: SessionMemory,
    builder: PromptBuilder,
    generator: Arc<dyn IGenerator>,
}

impl LiftPipeline {
    pub fn new(
        config: LiftConfig,
        sanitizer: Arc<dyn ISanitizer>,
        memory: SessionMemory,
        builder: PromptBuilder,
        generator: Arc<dyn IGenerator>,
    ) -> Self {
        Self {
            config,
            sanitizer,
            memory,
            builder,
            generator,
        }
    }

    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Handle one generation request for a session.
    ///
    /// A [`lift_core::errors::SessionError::VersionConflict`] means another
    /// request for the same session committed first; the caller may resubmit.
    pub fn handle(
        &self,
        session_id: &SessionId,
        request: GenerationRequest,
    ) -> LiftResult<GenerationResponse> {
        let span = info_span!("lift.request", session_id = %session_id);
        let _guard = span.enter();

        let result = self.run(session_id, request);
        if let Err(e) = &result {
            warn!(error_code = e.error_code(), retryable = e.is_retryable(), "request failed");
        }
        result
    }

    fn run(&self, session_id: &SessionId, request: GenerationRequest) -> LiftResult<GenerationResponse> {
        let input = request.prepare(&self.config.input)?;
        let snapshot = self.memory.snapshot(session_id)?;

        let instructions = self.sanitizer.sanitize(&input.instructions)?;
        let content = self.sanitizer.sanitize(&input.content)?;
        let redaction_count = instructions.redaction_count() + content.redaction_count();
        debug!(redaction_count, history_turns = snapshot.turns.len(), "input sanitized");

        let prompt = self.builder.build(
            &input.use_case,
            &snapshot.turns,
            &instructions.text,
            &content.text,
        );

        let generated_text = self.generator.generate(&prompt)?;

        // History only ever holds sanitized text, the reply included.
        let reply = self.sanitizer.sanitize(&generated_text)?;
        let user_turn = user_turn_text(&instructions.text, &content.text);
        let receipt =
            self.memory
                .append_exchange(session_id, snapshot.version, user_turn, &reply.text)?;
        info!(
            version = receipt.version,
            history_len = receipt.history_len,
            redaction_count,
            "exchange committed"
        );

        Ok(GenerationResponse {
            generated_text,
            redaction_count,
            decode_warning: input.decode_warning,
            history_len: receipt.history_len,
        })
    }
}

/// The stored user turn is the sanitized instructions, or the sanitized
/// content when no instructions were given.
fn user_turn_text<'a>(instructions: &'a str, content: &'a str) -> &'a str {
    let instructions = instructions.trim();
    if instructions.is_empty() {
        content.trim()
    } else {
        instructions
    }
}
