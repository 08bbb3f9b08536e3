use thiserror::Error;

/// Fatal conditions of a gcmg run. Any of these ends the process with status 1.
#[derive(Debug, Error)]
pub enum GcmgError {
    #[error("{command} failed: {output}")]
    VcsCommandFailure { command: String, output: String },

    #[error("Generation with Ollama failed: {0}")]
    InferenceServiceFailure(String),

    #[error("Ollama returned no commit message.")]
    EmptyGeneratedMessage,

    #[error("Aborted!")]
    UserDeclined,
}
