//! OpenAiCompatClient -- concrete [`CompletionClient`] for OpenAI-compatible
//! endpoints.
//!
//! Sends a single non-streaming request to `{base_url}/chat/completions`
//! with bearer authentication, enforces the configured hard timeout, and
//! extracts `choices[0].message.content`. Never retries.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use palaver_core::llm::client::CompletionClient;
use palaver_types::completion::{CompletionError, PromptMessage};
use palaver_types::config::ProviderSettings;

/// Completion client for any endpoint speaking the OpenAI chat
/// completions protocol.
///
/// All request shaping (model, generation parameters, timeout) is fixed
/// per instance from [`ProviderSettings`].
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: SecretString,
    name: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
    timeout_secs: u64,
}

// OpenAiCompatClient intentionally does NOT derive Debug so the API key
// can never leak through formatting.

impl OpenAiCompatClient {
    /// Create a new client from provider settings and a resolved API key.
    pub fn new(settings: &ProviderSettings, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            name: settings.name.clone(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            timeout_secs: settings.request_timeout_secs,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, context: &[PromptMessage]) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: context,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout(self.timeout_secs)
                } else {
                    CompletionError::Transport(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(format!("failed to parse response: {e}")))?;

        // An absent reply field is a provider error, never an empty string.
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Malformed("response carried no reply text".to_string()))
    }
}
