use anyhow::{anyhow, Context, Result};
use indicatif::ProgressBar;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::LlmClient;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Synchronous Ollama client using /api/generate.
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // Local models can take minutes on a large diff; wait as long as it takes.
        let http = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn post_generate(&self, req: &GenerateRequest<'_>) -> Result<String> {
        let body_str = serde_json::to_string(req).context("failed to encode Ollama JSON request")?;
        log::trace!("Ollama request body: {body_str}");

        let url = format!("{}/api/generate", self.base_url);
        log::debug!("POST {url} (model {})", req.model);

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .map_err(|e| anyhow!("error calling Ollama at {url}: {e}"))?;

        let status = resp.status();
        let resp_text = resp
            .text()
            .map_err(|e| anyhow!("failed to read Ollama response body: {e}"))?;
        log::trace!("Ollama raw JSON response: {resp_text}");

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorResponse>(&resp_text) {
                Ok(err) => anyhow!("{} (status code: {})", err.error, status.as_u16()),
                Err(_) => anyhow!("Ollama HTTP error {status}: {}", resp_text.trim()),
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&resp_text).context("failed to decode Ollama JSON")?;

        Ok(parsed.response)
    }
}

impl LlmClient for OllamaClient {
    fn generate(&self, prompt: &str, model: &str, system: Option<&str>) -> Result<String> {
        let req = GenerateRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Waiting for {model}..."));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.post_generate(&req);
        spinner.finish_and_clear();

        result
    }
}
