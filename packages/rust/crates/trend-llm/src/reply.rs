use std::fmt;

use crate::extract::JsonObject;

/// Result of a single attempt against the external service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success(String),
    /// Retryable: the service asked us to slow down.
    RateLimited,
    /// Not retryable: transport error, bad status, malformed envelope.
    TerminalFailure(String),
}

/// Why the service could not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    NotConfigured,
    RateLimitExhausted { attempts: u32 },
    Terminal(String),
    Unparseable,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => f.write_str("not configured"),
            Self::RateLimitExhausted { attempts } => {
                write!(f, "rate limited after {attempts} attempts")
            }
            Self::Terminal(reason) => write!(f, "terminal failure: {reason}"),
            Self::Unparseable => f.write_str("reply was not structured data"),
        }
    }
}

/// Final answer of the invoker. `Unavailable` is an expected outcome, not a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum LlmReply<T = String> {
    Success(T),
    Unavailable(UnavailableReason),
}

/// Reply after structured-data extraction.
pub type StructuredReply = LlmReply<JsonObject>;

impl<T> LlmReply<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }
}
