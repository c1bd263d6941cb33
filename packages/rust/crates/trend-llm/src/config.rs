//! Invoker configuration: endpoint, model, credential, retry policy.

use std::time::Duration;

/// Groq's OpenAI-compatible chat completions endpoint.
pub const DEFAULT_INFERENCE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
/// Value shipped in sample `.env` files; treated as "no credential".
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GROQ_API_KEY_HERE";

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF_STEP_SECS: u64 = 3;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Retry policy for rate-limited attempts: attempt `n` waits `n * backoff_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_step: Duration,
}

impl RetryPolicy {
    /// Wait after the given (1-based) rate-limited attempt.
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_step: Duration::from_secs(DEFAULT_BACKOFF_STEP_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub inference_url: String,
    pub model: String,
    /// `None` means the service is not configured; every call is `Unavailable`.
    pub api_key: Option<String>,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

/// Drop blank credentials and the sample placeholder.
#[must_use]
pub fn sanitize_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && value != API_KEY_PLACEHOLDER)
}
