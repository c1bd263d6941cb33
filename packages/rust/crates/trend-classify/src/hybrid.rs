//! Confidence-gated hybrid classification.
//!
//! Keyword confidence `c` picks one of three paths:
//!
//! | `c`              | path            | category from      | method |
//! |------------------|-----------------|--------------------|--------|
//! | `< 0.4`          | LLM-primary     | external service   | `llm`  |
//! | `0.4 ..< 0.6`    | hybrid-blend    | external service   | `hybrid` |
//! | `>= 0.6`         | hybrid-override | keyword scorer     | `hybrid` |
//!
//! Whenever the service answers `Unavailable` the tool lands in the keyword-only state.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use trend_llm::{DisabledLlm, JsonObject, LlmReply, LlmService};
use trend_types::{
    AUDIENCES, Category, ClassificationMethod, ClassificationResult, PricingHint, RawTool,
    SUMMARY_FALLBACK_CHARS, truncate_chars,
};

use crate::prompts::classification_prompt;
use crate::scorer::{KeywordScore, score};

/// Below this, the external service decides everything.
pub const LOW_CONFIDENCE: f64 = 0.4;
/// At or above this, the keyword category overrides the service's.
pub const HIGH_CONFIDENCE: f64 = 0.6;

const CLASSIFY_MAX_TOKENS: u32 = 512;
const MIN_AUDIENCE_SCORE: f64 = 1.0;
const MAX_AUDIENCE_SCORE: f64 = 10.0;

/// Decision path chosen from keyword confidence. Thresholds are inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPath {
    LlmPrimary,
    HybridBlend,
    HybridOverride,
}

impl ClassificationPath {
    #[must_use]
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            Self::HybridOverride
        } else if confidence >= LOW_CONFIDENCE {
            Self::HybridBlend
        } else {
            Self::LlmPrimary
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LlmPrimary => "llm_primary",
            Self::HybridBlend => "hybrid_blend",
            Self::HybridOverride => "hybrid_override",
        }
    }

    const fn method(self) -> ClassificationMethod {
        match self {
            Self::LlmPrimary => ClassificationMethod::Llm,
            Self::HybridBlend | Self::HybridOverride => ClassificationMethod::Hybrid,
        }
    }
}

/// Classifies one tool at a time; holds no per-tool state.
#[derive(Clone)]
pub struct HybridClassifier {
    llm: Arc<dyn LlmService>,
}

impl HybridClassifier {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    /// Classifier whose every tool takes the keyword-only path.
    #[must_use]
    pub fn keyword_only() -> Self {
        Self::new(Arc::new(DisabledLlm))
    }

    pub async fn classify(&self, tool: &RawTool) -> ClassificationResult {
        let keyword = score(&format!("{} {}", tool.name, tool.description));
        let path = ClassificationPath::for_confidence(keyword.confidence);
        let prompt = classification_prompt(&tool.name, &tool.description);
        match self.llm.complete_json(&prompt, CLASSIFY_MAX_TOKENS).await {
            LlmReply::Success(object) => {
                tracing::debug!(
                    event = "classify.tool.enriched",
                    tool = %tool.name,
                    path = path.as_str(),
                    confidence = keyword.confidence,
                    "tool classified with external enrichment"
                );
                enriched_result(path, keyword, &object, &tool.description)
            }
            LlmReply::Unavailable(reason) => {
                tracing::debug!(
                    event = "classify.tool.keyword_only",
                    tool = %tool.name,
                    path = path.as_str(),
                    confidence = keyword.confidence,
                    reason = %reason,
                    "external enrichment unavailable; using keyword result"
                );
                ClassificationResult::keyword_only(
                    keyword.category,
                    keyword.confidence,
                    &tool.description,
                )
            }
        }
    }
}

fn enriched_result(
    path: ClassificationPath,
    keyword: KeywordScore,
    object: &JsonObject,
    description: &str,
) -> ClassificationResult {
    let category = match path {
        ClassificationPath::HybridOverride => keyword.category,
        ClassificationPath::LlmPrimary | ClassificationPath::HybridBlend => object
            .get("category")
            .and_then(Value::as_str)
            .map_or(Category::Other, Category::from_label_or_other),
    };
    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .map_or_else(
            || truncate_chars(description, SUMMARY_FALLBACK_CHARS),
            ToString::to_string,
        );
    ClassificationResult {
        category,
        confidence: keyword.confidence,
        best_for_tasks: string_list(object.get("best_for_tasks")),
        summary,
        audience_fit: audience_fit(object.get("audience_fit")),
        tags: string_list(object.get("tags")),
        pricing_hint: object
            .get("pricing_hint")
            .and_then(Value::as_str)
            .map_or(PricingHint::Unknown, PricingHint::parse),
        method: path.method(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Known audiences only; scores clamped to 1..=10.
fn audience_fit(value: Option<&Value>) -> BTreeMap<String, u8> {
    let Some(Value::Object(scores)) = value else {
        return BTreeMap::new();
    };
    let mut fit = BTreeMap::new();
    for (audience, raw) in scores {
        let audience = audience.trim().to_ascii_lowercase();
        if !AUDIENCES.contains(&audience.as_str()) {
            continue;
        }
        let numeric = match raw {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        if let Some(numeric) = numeric.filter(|n| n.is_finite()) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let clamped = numeric
                .round()
                .clamp(MIN_AUDIENCE_SCORE, MAX_AUDIENCE_SCORE) as u8;
            fit.insert(audience, clamped);
        }
    }
    fit
}
