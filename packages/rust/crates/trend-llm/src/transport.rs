//! Single-attempt transports. The shipped one speaks OpenAI-compatible chat completions.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;
use crate::reply::AttemptOutcome;

pub const JSON_ONLY_SYSTEM_PROMPT: &str = "You are an AI tool analyst. Always respond with valid JSON only. No explanation, no markdown, just raw JSON.";

const MAX_ERROR_BODY_CHARS: usize = 300;

/// One request against the external service, with failure classification.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Whether a credential is present. Unconfigured transports are never sent to.
    fn is_configured(&self) -> bool;

    async fn send(&self, prompt: &str, max_output_tokens: u32) -> AttemptOutcome;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Request body for chat completions (OpenAI format).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

/// Response: choices[0].message.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP transport for chat completions.
pub struct OpenAiCompatTransport {
    client: Client,
    inference_url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl OpenAiCompatTransport {
    pub fn new(config: &LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            inference_url: config.inference_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionTransport for OpenAiCompatTransport {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, prompt: &str, max_output_tokens: u32) -> AttemptOutcome {
        let started = Instant::now();
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: JSON_ONLY_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: max_output_tokens,
            temperature: self.temperature,
        };
        let mut req = self
            .client
            .post(&self.inference_url)
            .json(&body)
            .header("Content-Type", "application/json");
        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }
        let res = match req.send().await {
            Ok(res) => res,
            Err(error) => {
                tracing::debug!(
                    event = "llm.transport.request_failed",
                    url = %self.inference_url,
                    elapsed_ms = started.elapsed().as_millis(),
                    timeout = error.is_timeout(),
                    error = %error,
                    "completion request failed"
                );
                return AttemptOutcome::TerminalFailure(format!("transport error: {error}"));
            }
        };
        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(error) => {
                return AttemptOutcome::TerminalFailure(format!("body read error: {error}"));
            }
        };
        if !status.is_success() {
            tracing::debug!(
                event = "llm.transport.non_success_status",
                status = %status,
                elapsed_ms = started.elapsed().as_millis(),
                "completion endpoint returned non-success status"
            );
            return classify_http_failure(status.as_u16(), &text);
        }
        let parsed: ChatCompletionResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(error) => {
                return AttemptOutcome::TerminalFailure(format!("response parse error: {error}"));
            }
        };
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string());
        tracing::debug!(
            event = "llm.transport.completed",
            elapsed_ms = started.elapsed().as_millis(),
            has_content = content.is_some(),
            "completion request completed"
        );
        match content {
            Some(content) => AttemptOutcome::Success(content),
            None => AttemptOutcome::TerminalFailure("response has no choices".to_string()),
        }
    }
}

/// Classify a non-success HTTP response: 429 or a rate-limit body is retryable.
#[must_use]
pub fn classify_http_failure(status: u16, body: &str) -> AttemptOutcome {
    let lowered = body.to_lowercase();
    if status == 429 || lowered.contains("rate_limit") || lowered.contains("rate limit") {
        return AttemptOutcome::RateLimited;
    }
    let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    AttemptOutcome::TerminalFailure(format!("status {status}: {snippet}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        assert_eq!(classify_http_failure(429, ""), AttemptOutcome::RateLimited);
    }

    #[test]
    fn rate_limit_error_code_in_body_is_rate_limited() {
        let body = r#"{"error":{"code":"rate_limit_exceeded","message":"slow down"}}"#;
        assert_eq!(classify_http_failure(400, body), AttemptOutcome::RateLimited);
    }

    #[test]
    fn other_failures_are_terminal() {
        match classify_http_failure(401, "invalid api key") {
            AttemptOutcome::TerminalFailure(reason) => {
                assert!(reason.contains("401"));
                assert!(reason.contains("invalid api key"));
            }
            other => panic!("expected terminal failure, got {other:?}"),
        }
    }
}
