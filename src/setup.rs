use anyhow::Result;
use log::debug;

use crate::config::Config;
use crate::llm::ollama::OllamaClient;

/// Build the inference client for the configured Ollama host.
pub fn build_llm_client(cfg: &Config) -> Result<OllamaClient> {
    debug!("Using OllamaClient at {} with model: {}", cfg.host, cfg.model);

    OllamaClient::new(cfg.host.clone())
}
