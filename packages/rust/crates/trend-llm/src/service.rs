use async_trait::async_trait;

use crate::extract::parse_structured;
use crate::reply::{LlmReply, StructuredReply, UnavailableReason};

/// Text-completion capability injected into the classifier and the ranker.
///
/// Absent and failing services look the same to callers: both answer `Unavailable`.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, prompt: &str, max_output_tokens: u32) -> LlmReply;

    /// Whether a call can reach the service at all; `false` means every reply is
    /// `Unavailable` without any external traffic.
    fn is_available(&self) -> bool {
        true
    }

    /// Complete and extract a JSON object; unparseable text is `Unavailable`.
    async fn complete_json(&self, prompt: &str, max_output_tokens: u32) -> StructuredReply {
        match self.complete(prompt, max_output_tokens).await {
            LlmReply::Success(text) => match parse_structured(&text) {
                Some(object) => LlmReply::Success(object),
                None => {
                    tracing::debug!(
                        event = "llm.reply.unparseable",
                        chars = text.chars().count(),
                        "reply contained no structured object"
                    );
                    LlmReply::Unavailable(UnavailableReason::Unparseable)
                }
            },
            LlmReply::Unavailable(reason) => LlmReply::Unavailable(reason),
        }
    }
}

/// Service used when external calls are switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLlm;

#[async_trait]
impl LlmService for DisabledLlm {
    fn is_available(&self) -> bool {
        false
    }

    async fn complete(&self, _prompt: &str, _max_output_tokens: u32) -> LlmReply {
        LlmReply::Unavailable(UnavailableReason::NotConfigured)
    }
}
