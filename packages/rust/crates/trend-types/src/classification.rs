//! Classification output of the hybrid classifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Category;

/// Summary length used when no external summary is available.
pub const SUMMARY_FALLBACK_CHARS: usize = 200;

/// Audiences scored in `audience_fit`.
pub const AUDIENCES: [&str; 5] = [
    "developers",
    "designers",
    "marketers",
    "researchers",
    "businesses",
];

/// Which decision path produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    KeywordOnly,
    Hybrid,
    Llm,
}

impl ClassificationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeywordOnly => "keyword_only",
            Self::Hybrid => "hybrid",
            Self::Llm => "llm",
        }
    }
}

/// Coarse pricing model reported by the external service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PricingHint {
    Free,
    Freemium,
    Paid,
    #[serde(rename = "Open-source")]
    OpenSource,
    #[default]
    Unknown,
}

impl PricingHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
            Self::OpenSource => "Open-source",
            Self::Unknown => "Unknown",
        }
    }

    /// Lenient parse of model output; unrecognized values become `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "free" => Self::Free,
            "freemium" => Self::Freemium,
            "paid" => Self::Paid,
            "open-source" | "open source" | "opensource" => Self::OpenSource,
            _ => Self::Unknown,
        }
    }
}

/// Enriched classification for one tool.
///
/// `confidence` is always the keyword confidence for the tool's own text, whatever
/// path decided the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f64,
    #[serde(default)]
    pub best_for_tasks: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Audience name to fit score (1-10).
    #[serde(default)]
    pub audience_fit: BTreeMap<String, u8>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pricing_hint: PricingHint,
    pub method: ClassificationMethod,
}

impl ClassificationResult {
    /// Keyword-only terminal state: no enrichment, summary cut from the description.
    #[must_use]
    pub fn keyword_only(category: Category, confidence: f64, description: &str) -> Self {
        Self {
            category,
            confidence,
            best_for_tasks: Vec::new(),
            summary: truncate_chars(description, SUMMARY_FALLBACK_CHARS),
            audience_fit: BTreeMap::new(),
            tags: Vec::new(),
            pricing_hint: PricingHint::Unknown,
            method: ClassificationMethod::KeywordOnly,
        }
    }
}

/// First `max_chars` characters of `text` (char-boundary safe).
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn pricing_hint_parse_is_lenient() {
        assert_eq!(PricingHint::parse(" Freemium "), PricingHint::Freemium);
        assert_eq!(PricingHint::parse("open source"), PricingHint::OpenSource);
        assert_eq!(PricingHint::parse("Free/Paid"), PricingHint::Unknown);
    }

    #[test]
    fn keyword_only_result_has_empty_enrichment() {
        let description = "x".repeat(250);
        let result = ClassificationResult::keyword_only(Category::Other, 0.0, &description);
        assert_eq!(result.summary.chars().count(), SUMMARY_FALLBACK_CHARS);
        assert!(result.best_for_tasks.is_empty());
        assert!(result.audience_fit.is_empty());
        assert!(result.tags.is_empty());
        assert_eq!(result.pricing_hint, PricingHint::Unknown);
        assert_eq!(result.method, ClassificationMethod::KeywordOnly);
    }
}
