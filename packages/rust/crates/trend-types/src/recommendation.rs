use serde::{Deserialize, Serialize};

use crate::{Category, EnrichedTool};

/// Reason reported when a recommendation is requested against an empty catalog.
pub const EMPTY_CATALOG_REASON: &str = "No tools in catalog. Run pipeline first.";

/// How a recommendation's top-5 was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// External service returned a top-5 list, used verbatim.
    Llm,
    /// External service named primary/secondary picks; the rest was synthesized.
    LlmPicks,
    /// External service unavailable; keyword ranking only.
    KeywordFallback,
    /// No ranking possible (empty catalog).
    Error,
}

impl RankingMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::LlmPicks => "llm_picks",
            Self::KeywordFallback => "keyword_fallback",
            Self::Error => "error",
        }
    }
}

/// Ranked answer to one task description. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// At most five tools, best first.
    pub top5: Vec<EnrichedTool>,
    /// `None` only for the error-shaped result.
    pub task_category: Option<Category>,
    pub method: RankingMethod,
    pub recommended_tool: Option<String>,
    pub alternative: Option<String>,
    pub reason: String,
}

impl RecommendationResult {
    /// Error-shaped result for an empty catalog.
    #[must_use]
    pub fn empty_catalog() -> Self {
        Self {
            top5: Vec::new(),
            task_category: None,
            method: RankingMethod::Error,
            recommended_tool: None,
            alternative: None,
            reason: EMPTY_CATALOG_REASON.to_string(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.method == RankingMethod::Error
    }
}
