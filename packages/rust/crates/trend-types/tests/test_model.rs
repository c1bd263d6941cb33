//! Tests for the shared data model: category labels and the persisted tool shape.

use trend_types::{
    Category, ClassificationMethod, ClassificationResult, EnrichedTool, RawTool,
    RecommendationResult,
};

#[test]
fn category_lookup_is_case_insensitive_and_closed() {
    assert_eq!(
        Category::from_label("  writing & content "),
        Some(Category::WritingContent)
    );
    assert_eq!(Category::from_label("Poetry"), None);
    assert_eq!(Category::from_label_or_other("Poetry"), Category::Other);
    assert_eq!(Category::ALL.first(), Some(&Category::CodeGeneration));
    assert_eq!(Category::ALL.last(), Some(&Category::Other));
}

#[test]
fn enriched_tool_serializes_flat_with_display_labels() {
    let raw = RawTool::new("Jasper AI", "AI writing assistant", "Sample");
    let classification =
        ClassificationResult::keyword_only(Category::WritingContent, 0.33, &raw.description);
    let tool = EnrichedTool::from_parts(raw, classification);

    let value = serde_json::to_value(&tool).unwrap();
    assert_eq!(value["name"], "Jasper AI");
    assert_eq!(value["category"], "Writing & Content");
    assert_eq!(value["method"], "keyword_only");
    assert_eq!(value["pricing_hint"], "Unknown");
    assert!(value.get("scraped_at").is_none());

    let back: EnrichedTool = serde_json::from_value(value).unwrap();
    assert_eq!(back.classification.method, ClassificationMethod::KeywordOnly);
    assert_eq!(back.summary_or_description(), "AI writing assistant");
}

#[test]
fn normalized_name_trims_and_lowercases() {
    let tool = RawTool::new("  GPT Helper ", "d", "s");
    assert_eq!(tool.normalized_name(), "gpt helper");
}

#[test]
fn empty_catalog_result_is_error_shaped() {
    let result = RecommendationResult::empty_catalog();
    assert!(result.is_error());
    assert!(result.top5.is_empty());
    assert!(result.task_category.is_none());
    assert!(result.reason.contains("Run pipeline first"));
}
