//! Chat-completion client
//!
//! Sends a single user message to an OpenAI-compatible
//! `/chat/completions` endpoint and returns the first choice.

use crate::config::Config;
use crate::error::{ProofreadError, ProofreadResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Trait for completion backends
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Text of the first choice, or `""` when the API returned none
    async fn complete(&self, prompt: &str) -> ProofreadResult<String>;

    /// Model the backend asks for
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// HTTP client for an OpenAI-compatible chat-completion API
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    /// Create new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> ProofreadResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(unexpected)?;

        let status = response.status();
        let body_text = response.text().await.map_err(unexpected)?;

        if !status.is_success() {
            return Err(ProofreadError::CompletionApi {
                status: status.as_u16(),
                message: api_error_message(&body_text),
            });
        }

        debug!("🧠 Completion raw body: {}", body_text);

        let parsed: ChatResponse = serde_json::from_str(&body_text).map_err(|e| {
            ProofreadError::Unexpected(format!(
                "failed to decode completion response: {e} - Body: {body_text}"
            ))
        })?;

        Ok(first_choice_text(parsed))
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn first_choice_text(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

/// `error.message` of an OpenAI-style error body, else the raw body
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().to_string(),
    }
}

fn unexpected(err: reqwest::Error) -> ProofreadError {
    ProofreadError::Unexpected(format!("{:#}", anyhow::Error::new(err)))
}
