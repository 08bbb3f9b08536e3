pub mod ollama;
mod prompt_builder;
mod prompts;

pub use prompt_builder::commit_message_prompt;

use anyhow::Result;

/// Trait for talking to an inference service.
pub trait LlmClient {
    /// Send one prompt to `model` and return the raw generated text.
    ///
    /// `system` is carried as its own field, never spliced into `prompt`.
    fn generate(&self, prompt: &str, model: &str, system: Option<&str>) -> Result<String>;
}
