//! Prompt builders for the external completion service.

use std::fmt::Write as _;

use trend_types::{Category, CategoryCount, EnrichedTool, truncate_chars};

/// Summary characters shown per tool in the recommendation prompt.
const PROMPT_SUMMARY_CHARS: usize = 120;

fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn classification_prompt(name: &str, description: &str) -> String {
    format!(
        r#"
Analyze this AI tool and return a JSON object:

Tool Name: {name}
Description: {description}

Return this exact JSON structure:
{{
  "category": "one of: {categories}",
  "best_for_tasks": ["task1", "task2", "task3"],
  "summary": "A concise 1-2 sentence summary of what this tool does and who should use it.",
  "audience_fit": {{
    "developers": <score 1-10>,
    "designers": <score 1-10>,
    "marketers": <score 1-10>,
    "researchers": <score 1-10>,
    "businesses": <score 1-10>
  }},
  "tags": ["tag1", "tag2", "tag3"],
  "pricing_hint": "Free/Freemium/Paid/Open-source"
}}
"#,
        categories = category_list(),
    )
}

pub(crate) fn recommendation_prompt(task: &str, presented: &[EnrichedTool]) -> String {
    let mut tool_list = String::new();
    for tool in presented {
        let _ = writeln!(
            tool_list,
            "- {} ({}): {}",
            tool.name,
            tool.classification.category,
            truncate_chars(tool.summary_or_description(), PROMPT_SUMMARY_CHARS)
        );
    }
    format!(
        r#"
A user wants to accomplish this task: "{task}"

Here are available AI tools:
{tool_list}
Based on the task, pick the BEST tool from the list above.

Return ONLY this JSON (no extra text):
{{
  "recommended_tool": "<exact tool name from the list>",
  "reason": "<1-2 sentences explaining why this tool is best for this specific task>",
  "alternative": "<second best tool name from the list>",
  "task_category": "<one of: {categories}>",
  "top5": ["<up to five exact tool names from the list, best first>"]
}}
"#,
        categories = category_list(),
    )
}

pub(crate) fn trend_prompt(total: usize, top: &[CategoryCount]) -> String {
    format!(
        r#"
We scraped {total} AI tools. Top categories: {summary}

Write a 3-sentence trend analysis about the current state of AI tools.
What categories dominate? What does this tell us about where AI is heading?
Return this JSON: {{"analysis": "<the 3 sentences as plain text>"}}
"#,
        summary = describe_counts(top),
    )
}

/// `"Code Generation (4 tools), Other (1 tools)"`.
pub(crate) fn describe_counts(counts: &[CategoryCount]) -> String {
    counts
        .iter()
        .map(|entry| format!("{} ({} tools)", entry.category, entry.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_prompt_names_every_category_and_audience() {
        let prompt = classification_prompt("Cursor", "AI-first code editor");
        assert!(prompt.contains("Tool Name: Cursor"));
        for category in Category::ALL {
            assert!(prompt.contains(category.label()), "missing {category}");
        }
        for audience in trend_types::AUDIENCES {
            assert!(prompt.contains(audience), "missing {audience}");
        }
    }

    #[test]
    fn describe_counts_joins_entries() {
        let counts = [
            CategoryCount {
                category: Category::CodeGeneration,
                count: 4,
            },
            CategoryCount {
                category: Category::Other,
                count: 1,
            },
        ];
        assert_eq!(
            describe_counts(&counts),
            "Code Generation (4 tools), Other (1 tools)"
        );
    }
}
