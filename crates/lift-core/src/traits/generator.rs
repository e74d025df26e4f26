use crate::errors::GenerationError;

/// The external generative-model collaborator.
pub trait IGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
