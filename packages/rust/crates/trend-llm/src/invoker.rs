//! Retry loop over a [`CompletionTransport`].
//!
//! Only rate-limited attempts are retried, with linear backoff; any other failure
//! aborts immediately. Every exit path is an [`LlmReply`], never an error.

use std::time::Instant;

use async_trait::async_trait;

use crate::config::{LlmConfig, RetryPolicy};
use crate::reply::{AttemptOutcome, LlmReply, UnavailableReason};
use crate::service::LlmService;
use crate::transport::{CompletionTransport, OpenAiCompatTransport};

pub struct LlmInvoker<T = OpenAiCompatTransport> {
    transport: T,
    retry: RetryPolicy,
}

impl LlmInvoker<OpenAiCompatTransport> {
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(OpenAiCompatTransport::new(config), config.retry)
    }
}

impl<T: CompletionTransport> LlmInvoker<T> {
    pub fn new(transport: T, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `prompt`; retries rate limits, returns `Unavailable` on anything else.
    pub async fn invoke(&self, prompt: &str, max_output_tokens: u32) -> LlmReply {
        if !self.transport.is_configured() {
            tracing::debug!(
                event = "llm.invoke.not_configured",
                "no service credential configured; skipping external call"
            );
            return LlmReply::Unavailable(UnavailableReason::NotConfigured);
        }
        let max_attempts = self.retry.max_attempts.max(1);
        let started = Instant::now();
        for attempt in 1..=max_attempts {
            match self.transport.send(prompt, max_output_tokens).await {
                AttemptOutcome::Success(text) => {
                    tracing::debug!(
                        event = "llm.invoke.completed",
                        attempt,
                        elapsed_ms = started.elapsed().as_millis(),
                        "completion succeeded"
                    );
                    return LlmReply::Success(text);
                }
                AttemptOutcome::RateLimited => {
                    let wait = self.retry.backoff_for(attempt);
                    tracing::warn!(
                        event = "llm.invoke.rate_limited",
                        attempt,
                        max_attempts,
                        wait_ms = wait.as_millis(),
                        "rate limited; backing off"
                    );
                    tokio::time::sleep(wait).await;
                }
                AttemptOutcome::TerminalFailure(reason) => {
                    tracing::warn!(
                        event = "llm.invoke.terminal_failure",
                        attempt,
                        reason = %reason,
                        "completion failed; not retrying"
                    );
                    return LlmReply::Unavailable(UnavailableReason::Terminal(reason));
                }
            }
        }
        tracing::warn!(
            event = "llm.invoke.retries_exhausted",
            attempts = max_attempts,
            elapsed_ms = started.elapsed().as_millis(),
            "rate limit retries exhausted; callers fall back"
        );
        LlmReply::Unavailable(UnavailableReason::RateLimitExhausted {
            attempts: max_attempts,
        })
    }
}

#[async_trait]
impl<T: CompletionTransport> LlmService for LlmInvoker<T> {
    fn is_available(&self) -> bool {
        self.transport.is_configured()
    }

    async fn complete(&self, prompt: &str, max_output_tokens: u32) -> LlmReply {
        self.invoke(prompt, max_output_tokens).await
    }
}
