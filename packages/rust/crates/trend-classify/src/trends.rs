//! Category distribution and the trend summary built on it.

use serde_json::Value;
use trend_llm::{LlmReply, LlmService};
use trend_types::{Category, CategoryCount, EnrichedTool};

use crate::prompts::{describe_counts, trend_prompt};

const TREND_TOP_CATEGORIES: usize = 5;
const TREND_MAX_TOKENS: u32 = 200;

/// Non-empty categories, most populated first; ties keep category order.
#[must_use]
pub fn category_counts(catalog: &[EnrichedTool]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: catalog
                .iter()
                .filter(|tool| tool.classification.category == category)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Deterministic summary used when the external service is unavailable.
#[must_use]
pub fn fallback_trend_summary(catalog: &[EnrichedTool]) -> String {
    let top = top_categories(catalog);
    format!(
        "Based on {} tools analyzed, the dominant categories are: {}. AI tools are rapidly expanding across code generation, content creation, and automation domains.",
        catalog.len(),
        describe_counts(&top)
    )
}

/// Short prose analysis of the catalog's category distribution.
pub async fn trend_summary(llm: &dyn LlmService, catalog: &[EnrichedTool]) -> String {
    let top = top_categories(catalog);
    let prompt = trend_prompt(catalog.len(), &top);
    let analysis = match llm.complete_json(&prompt, TREND_MAX_TOKENS).await {
        LlmReply::Success(object) => object
            .get("analysis")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(ToString::to_string),
        LlmReply::Unavailable(reason) => {
            tracing::debug!(
                event = "trends.summary.llm_unavailable",
                reason = %reason,
                "trend analysis unavailable; using deterministic summary"
            );
            None
        }
    };
    analysis.unwrap_or_else(|| fallback_trend_summary(catalog))
}

fn top_categories(catalog: &[EnrichedTool]) -> Vec<CategoryCount> {
    let mut counts = category_counts(catalog);
    counts.truncate(TREND_TOP_CATEGORIES);
    counts
}
