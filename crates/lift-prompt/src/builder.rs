use lift_core::constants::ASSISTANT_NAME;
use lift_core::Turn;
use tracing::debug;

use crate::history::serialize_history;
use crate::use_case::UseCase;

const NO_INSTRUCTIONS: &str = "(none provided)";
const NO_CONTENT: &str = "(no content provided)";

/// Everything that goes into one prompt. Built per request and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub use_case: UseCase,
    pub history_block: String,
    pub sanitized_instructions: String,
    pub sanitized_content: String,
}

impl PromptContext {
    pub fn use_case_label(&self) -> &'static str {
        self.use_case.label()
    }
}

/// Assembles prompts in a fixed section order: preamble, use-case context,
/// conversation history, instructions, content.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the prompt text. Identical inputs yield identical bytes.
    pub fn build(
        &self,
        use_case_key: &str,
        history: &[Turn],
        sanitized_instructions: &str,
        sanitized_content: &str,
    ) -> String {
        let context = self.context(use_case_key, history, sanitized_instructions, sanitized_content);
        debug!(
            use_case = context.use_case.key(),
            history_turns = history.len(),
            "building prompt"
        );
        self.render(&context)
    }

    /// Resolve inputs into a [`PromptContext`].
    pub fn context(
        &self,
        use_case_key: &str,
        history: &[Turn],
        sanitized_instructions: &str,
        sanitized_content: &str,
    ) -> PromptContext {
        PromptContext {
            use_case: UseCase::from_key(use_case_key),
            history_block: serialize_history(history),
            sanitized_instructions: sanitized_instructions.trim().to_string(),
            sanitized_content: sanitized_content.trim().to_string(),
        }
    }

    pub fn render(&self, ctx: &PromptContext) -> String {
        let instructions = non_empty_or(&ctx.sanitized_instructions, NO_INSTRUCTIONS);
        let content = non_empty_or(&ctx.sanitized_content, NO_CONTENT);
        let history = ctx.history_block.trim_end();

        format!(
            "You are {ASSISTANT_NAME}, an assistant for faculty.\n\
             Follow the user's Custom Instructions carefully.\n\
             Then, based on the provided Content, generate helpful teaching materials \
             (summary, quiz, discussion prompts, etc.).\n\
             \n\
             Use Case ({label}):\n\
             {use_case}\n\
             \n\
             Conversation History:\n\
             {history}\n\
             \n\
             Custom Instructions:\n\
             {instructions}\n\
             \n\
             Content:\n\
             {content}\n",
            label = ctx.use_case_label(),
            use_case = ctx.use_case.context(),
        )
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
