//! Chat-completion client for the hosted text-generation service.
//!
//! The request/response shapes follow the OpenAI-compatible
//! `/v1/chat/completions` API served by the Hugging Face router.
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::credentials::ApiToken;
use crate::error::ExplainError;
use crate::prompt::ChatRequest;

/// A single request/response text-generation call.
pub trait TextGenerator {
    fn complete(&self, request: &ChatRequest) -> Result<String, ExplainError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn complete(&self, request: &ChatRequest) -> Result<String, ExplainError> {
        (**self).complete(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn complete(&self, request: &ChatRequest) -> Result<String, ExplainError> {
        (**self).complete(request)
    }
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first completion's text from a response body.
pub fn parse_completion(body: &str) -> Result<String, ExplainError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| ExplainError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ExplainError::MalformedResponse("no choices in response".to_string()))?;
    let text = choice.message.content.unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Err(ExplainError::MalformedResponse(
            "first choice has no content".to_string(),
        ));
    }
    Ok(text.to_string())
}

/// Blocking client for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct HfChatClient {
    http: Client,
    endpoint: String,
    model: String,
    token: ApiToken,
}

impl HfChatClient {
    pub fn new(config: &LlmConfig, token: ApiToken) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("dairypulse/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            token,
        })
    }

    /// Build a client with the token read from `config.token_env`.
    pub fn from_env(config: &LlmConfig) -> Result<Self> {
        let token = ApiToken::from_env(&config.token_env)?;
        Self::new(config, token)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextGenerator for HfChatClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, ExplainError> {
        let body = CompletionBody {
            model: &self.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        };

        log::debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.token.expose())
            .json(&body)
            .send()
            .map_err(describe_transport_error)?;

        let status = response.status();
        let text = response.text().map_err(describe_transport_error)?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ExplainError::Authentication(format!(
                "HTTP {}: {}",
                status,
                snippet(&text)
            )));
        }
        if !status.is_success() {
            return Err(ExplainError::ServiceUnavailable(format!(
                "HTTP {}: {}",
                status,
                snippet(&text)
            )));
        }

        parse_completion(&text)
    }
}

fn describe_transport_error(e: reqwest::Error) -> ExplainError {
    if e.is_timeout() {
        ExplainError::ServiceUnavailable(format!("request timed out: {}", e))
    } else {
        ExplainError::ServiceUnavailable(e.to_string())
    }
}

/// First line of an error body, capped for log output.
fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let line = body.lines().next().unwrap_or("").trim();
    if line.chars().count() > MAX {
        let cut: String = line.chars().take(MAX).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}
