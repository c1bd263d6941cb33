//! Keyword scorer: pure, deterministic, no I/O.

use trend_types::Category;

use crate::keywords::KEYWORD_RULES;

/// Fraction of a category's keyword list that counts as full confidence.
const FULL_CONFIDENCE_SHARE: f64 = 0.3;

/// Outcome of scoring one text against the keyword table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordScore {
    pub category: Category,
    /// In `[0, 1]`, rounded to two decimals.
    pub confidence: f64,
    /// Raw keyword hits for `category`.
    pub hits: usize,
}

impl KeywordScore {
    const fn no_evidence(category: Category) -> Self {
        Self {
            category,
            confidence: 0.0,
            hits: 0,
        }
    }
}

/// Score `text` for tool classification. Zero hits yield `(Other, 0.0)`.
#[must_use]
pub fn score(text: &str) -> KeywordScore {
    best_match(text).unwrap_or(KeywordScore::no_evidence(Category::Other))
}

/// Score a task description. Zero hits default to `Chatbot & Assistant`, not `Other`.
#[must_use]
pub fn score_task(task: &str) -> KeywordScore {
    best_match(task).unwrap_or(KeywordScore::no_evidence(Category::ChatbotAssistant))
}

fn best_match(text: &str) -> Option<KeywordScore> {
    let lowered = text.to_lowercase();
    let mut best: Option<(Category, usize, usize)> = None;
    for (category, keywords) in KEYWORD_RULES {
        let hits = keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .count();
        // Strictly greater: the first declared category keeps ties.
        if best.is_none_or(|(_, best_hits, _)| hits > best_hits) {
            best = Some((category, hits, keywords.len()));
        }
    }
    let (category, hits, keyword_count) = best?;
    if hits == 0 {
        return None;
    }
    Some(KeywordScore {
        category,
        confidence: confidence_for(hits, keyword_count),
        hits,
    })
}

#[allow(clippy::cast_precision_loss)]
fn confidence_for(hits: usize, keyword_count: usize) -> f64 {
    let denominator = (keyword_count as f64 * FULL_CONFIDENCE_SHARE).max(1.0);
    let raw = (hits as f64 / denominator).min(1.0);
    (raw * 100.0).round() / 100.0
}
