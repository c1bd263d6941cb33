//! trend-llm - resilient access to an external text-completion service.
//!
//! - [`CompletionTransport`]: one attempt against the service, classified as
//!   [`AttemptOutcome::Success`], [`AttemptOutcome::RateLimited`] or
//!   [`AttemptOutcome::TerminalFailure`].
//! - [`LlmInvoker`]: retry loop (rate limits only, linear backoff) over a transport.
//! - [`LlmService`]: the capability injected into classifiers. Failures surface as
//!   [`LlmReply::Unavailable`], never as errors.

#![allow(missing_docs)]

mod config;
mod extract;
mod invoker;
mod reply;
mod service;
mod transport;

pub use config::{
    API_KEY_PLACEHOLDER, DEFAULT_INFERENCE_URL, DEFAULT_MODEL, LlmConfig, RetryPolicy,
    sanitize_api_key,
};
pub use extract::{JsonObject, parse_structured, strip_code_fences};
pub use invoker::LlmInvoker;
pub use reply::{AttemptOutcome, LlmReply, StructuredReply, UnavailableReason};
pub use service::{DisabledLlm, LlmService};
pub use transport::{
    CompletionTransport, JSON_ONLY_SYSTEM_PROMPT, OpenAiCompatTransport, classify_http_failure,
};
