//! Ranks catalog entries against a free-text task.

use std::sync::Arc;

use serde_json::Value;
use trend_llm::{DisabledLlm, JsonObject, LlmReply, LlmService};
use trend_types::{
    Category, EnrichedTool, RankingMethod, RecommendationResult, truncate_chars,
};

use crate::prompts::recommendation_prompt;
use crate::scorer::score_task;

/// Catalog entries shown to the external service.
pub const PRESENTED_TOOLS: usize = 25;
/// Length of every ranked list.
pub const TOP_K: usize = 5;

const RECOMMEND_MAX_TOKENS: u32 = 250;
const REASON_SUMMARY_CHARS: usize = 150;

#[derive(Clone)]
pub struct RecommendationRanker {
    llm: Arc<dyn LlmService>,
}

impl RecommendationRanker {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    #[must_use]
    pub fn keyword_only() -> Self {
        Self::new(Arc::new(DisabledLlm))
    }

    /// Rank `catalog` for `task`. An empty catalog yields the error-shaped result.
    ///
    /// Only the presented prefix of the catalog can be picked by the external service;
    /// picks that name nothing presented are ignored.
    pub async fn recommend(&self, task: &str, catalog: &[EnrichedTool]) -> RecommendationResult {
        if catalog.is_empty() {
            tracing::info!(
                event = "recommend.empty_catalog",
                "recommendation requested with an empty catalog"
            );
            return RecommendationResult::empty_catalog();
        }
        let keyword_category = score_task(task).category;
        let presented = &catalog[..catalog.len().min(PRESENTED_TOOLS)];
        let prompt = recommendation_prompt(task, presented);
        let reply = self.llm.complete_json(&prompt, RECOMMEND_MAX_TOKENS).await;
        let result = match reply {
            LlmReply::Success(object) => {
                from_llm_answer(&object, keyword_category, presented, catalog)
                    .unwrap_or_else(|| keyword_fallback(keyword_category, catalog))
            }
            LlmReply::Unavailable(reason) => {
                tracing::debug!(
                    event = "recommend.llm_unavailable",
                    reason = %reason,
                    "external ranking unavailable; using keyword fallback"
                );
                keyword_fallback(keyword_category, catalog)
            }
        };
        tracing::debug!(
            event = "recommend.completed",
            method = result.method.as_str(),
            task_category = ?result.task_category,
            ranked = result.top5.len(),
            "recommendation produced"
        );
        result
    }
}

/// `None` when the answer names no presented tool.
///
/// The answer's category wins when it is a known label; it then drives both the
/// reported category and the synthesized ordering.
fn from_llm_answer(
    object: &JsonObject,
    keyword_category: Category,
    presented: &[EnrichedTool],
    catalog: &[EnrichedTool],
) -> Option<RecommendationResult> {
    let task_category = object
        .get("task_category")
        .and_then(Value::as_str)
        .and_then(Category::from_label)
        .unwrap_or(keyword_category);
    let primary = text_field(object, "recommended_tool");
    let alternative = text_field(object, "alternative");
    let reason = text_field(object, "reason");
    let named = [primary.as_deref(), alternative.as_deref()];
    let picks = resolve_unique(presented, named.into_iter().flatten());

    let listed = top5_names(object.get("top5"));
    let resolved = resolve_unique(presented, listed.iter().map(String::as_str));
    if !resolved.is_empty() {
        let top5: Vec<EnrichedTool> = resolved.into_iter().take(TOP_K).cloned().collect();
        let (recommended, alternative) = pick_names(&picks, &top5);
        let reason = reason.unwrap_or_else(|| fallback_reason(&top5, task_category));
        return Some(RecommendationResult {
            top5,
            task_category: Some(task_category),
            method: RankingMethod::Llm,
            recommended_tool: recommended,
            alternative,
            reason,
        });
    }

    if picks.is_empty() {
        tracing::debug!(
            event = "recommend.picks_unresolved",
            primary = ?primary,
            alternative = ?alternative,
            "answer named no presented tool; using keyword fallback"
        );
        return None;
    }
    let top5 = synthesize(task_category, catalog, picks.iter().map(|tool| tool.name.as_str()));
    let (recommended, alternative) = pick_names(&picks, &top5);
    let reason = reason.unwrap_or_else(|| fallback_reason(&top5, task_category));
    Some(RecommendationResult {
        top5,
        task_category: Some(task_category),
        method: RankingMethod::LlmPicks,
        recommended_tool: recommended,
        alternative,
        reason,
    })
}

/// Names of the resolved picks that made `top5`, topped up from `top5` in order.
fn pick_names(
    picks: &[&EnrichedTool],
    top5: &[EnrichedTool],
) -> (Option<String>, Option<String>) {
    let ranked = |name: &str| top5.iter().any(|tool| tool.name == name);
    let mut names = picks
        .iter()
        .map(|tool| tool.name.as_str())
        .filter(|name| ranked(*name))
        .chain(top5.iter().map(|tool| tool.name.as_str()));
    let recommended = names.next().map(ToString::to_string);
    let alternative = names
        .find(|name| Some(*name) != recommended.as_deref())
        .map(ToString::to_string);
    (recommended, alternative)
}

fn keyword_fallback(task_category: Category, catalog: &[EnrichedTool]) -> RecommendationResult {
    let top5 = synthesize(task_category, catalog, std::iter::empty());
    RecommendationResult {
        recommended_tool: top5.first().map(|tool| tool.name.clone()),
        alternative: top5.get(1).map(|tool| tool.name.clone()),
        reason: fallback_reason(&top5, task_category),
        top5,
        task_category: Some(task_category),
        method: RankingMethod::KeywordFallback,
    }
}

/// Named picks first, then `category` entries, then the rest; catalog order within
/// each group, no duplicates, at most [`TOP_K`].
#[must_use]
pub fn synthesize<'a>(
    category: Category,
    catalog: &[EnrichedTool],
    picks: impl IntoIterator<Item = &'a str>,
) -> Vec<EnrichedTool> {
    let mut ordered: Vec<&EnrichedTool> = resolve_unique(catalog, picks);
    let in_category = catalog
        .iter()
        .filter(|tool| tool.classification.category == category);
    let others = catalog
        .iter()
        .filter(|tool| tool.classification.category != category);
    for tool in in_category.chain(others) {
        if ordered.len() >= TOP_K {
            break;
        }
        if !ordered.iter().any(|seen| std::ptr::eq(*seen, tool)) {
            ordered.push(tool);
        }
    }
    ordered.truncate(TOP_K);
    ordered.into_iter().cloned().collect()
}

/// Catalog entries matching `names` case-insensitively, first match per name, no repeats.
fn resolve_unique<'c, 'n>(
    catalog: &'c [EnrichedTool],
    names: impl IntoIterator<Item = &'n str>,
) -> Vec<&'c EnrichedTool> {
    let mut resolved: Vec<&EnrichedTool> = Vec::new();
    for name in names {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let Some(tool) = catalog
            .iter()
            .find(|tool| tool.name.trim().to_lowercase() == needle)
        else {
            continue;
        };
        if !resolved.iter().any(|seen| std::ptr::eq(*seen, tool)) {
            resolved.push(tool);
        }
    }
    resolved
}

fn top5_names(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name.clone()),
            Value::Object(entry) => entry
                .get("name")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            _ => None,
        })
        .collect()
}

fn text_field(object: &JsonObject, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

fn fallback_reason(top5: &[EnrichedTool], category: Category) -> String {
    let Some(top) = top5.first() else {
        return format!("No tools matched the task under '{category}'.");
    };
    format!(
        "{} is the best match for your task under '{}'. {}",
        top.name,
        category,
        truncate_chars(top.summary_or_description(), REASON_SUMMARY_CHARS)
    )
}
