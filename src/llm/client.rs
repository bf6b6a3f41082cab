use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

/// Temperature used by every call site unless one asks for something else.
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY not set")]
    MissingApiKey,

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx upstream status; the body is kept verbatim so the service can
    /// act as a transparent proxy for upstream errors.
    #[error("upstream returned {status}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("upstream reply carried no message content")]
    EmptyReply,
}

impl IntoResponse for LlmError {
    fn into_response(self) -> Response {
        match self {
            LlmError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            LlmError::UpstreamStatus { status, body } => (status, body).into_response(),
            LlmError::Transport(_) | LlmError::EmptyReply => (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Single-turn client for an OpenAI-style chat completion API.
///
/// One outbound call per invocation, 60 second timeout, no retry, no
/// streaming. The credential check happens before any network I/O.
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            api_key: config.openai_api_key.clone(),
            model: config.model_id.clone(),
            api_url: config.api_url.clone(),
        }
    }

    /// Send a single user prompt and return the raw text of the first choice.
    pub async fn chat(&self, prompt: &str) -> Result<String, LlmError> {
        self.chat_with_temperature(prompt, DEFAULT_TEMPERATURE).await
    }

    pub async fn chat_with_temperature(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
        };

        let resp = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            tracing::warn!("Chat completion API returned {}: {}", status, body);
            return Err(LlmError::UpstreamStatus { status, body });
        }

        let reply: ChatCompletionResponse = resp.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyReply)
    }
}
