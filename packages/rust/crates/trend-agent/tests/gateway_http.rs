//! HTTP gateway integration tests: validation (400), routing, response shape.
//! Uses an in-memory catalog and a disabled service, so no network is required.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::body::to_bytes;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use trend_agent::{GATEWAY_NAME, MemoryToolStore, TrendService, router};
use trend_llm::DisabledLlm;
use trend_types::{Category, ClassificationResult, EMPTY_CATALOG_REASON, EnrichedTool, RawTool};

fn tool(name: &str, category: Category, description: &str) -> EnrichedTool {
    EnrichedTool::from_parts(
        RawTool::new(name, description, "Sample"),
        ClassificationResult::keyword_only(category, 0.5, description),
    )
}

fn app_with(tools: Vec<EnrichedTool>) -> Router {
    let store = Arc::new(MemoryToolStore::with_tools(tools));
    router(TrendService::new(store, Arc::new(DisabledLlm)))
}

fn populated_app() -> Router {
    app_with(vec![
        tool(
            "Cursor",
            Category::CodeGeneration,
            "AI-first code editor with codebase chat",
        ),
        tool(
            "Jasper AI",
            Category::WritingContent,
            "AI writing assistant for blog posts and SEO content",
        ),
        tool(
            "Midjourney",
            Category::ImageGeneration,
            "Image generation from text prompts",
        ),
        tool(
            "Copy.ai",
            Category::WritingContent,
            "Ad copy, product descriptions and sales emails",
        ),
    ])
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn root_reports_name_and_tool_count() {
    let (status, body) = get(populated_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], GATEWAY_NAME);
    assert_eq!(body["tools"], 4);
}

#[tokio::test]
async fn health_is_healthy() {
    let (status, body) = get(app_with(Vec::new()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn recommend_returns_400_for_blank_or_missing_task() {
    for uri in ["/recommend?task=", "/recommend?task=%20%20", "/recommend"] {
        let (status, _) = get(populated_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn recommend_on_empty_catalog_is_error_shaped() {
    let (status, body) = get(app_with(Vec::new()), "/recommend?task=write%20a%20blog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], EMPTY_CATALOG_REASON);
}

#[tokio::test]
async fn recommend_falls_back_to_keyword_ranking() {
    let (status, body) = get(
        populated_app(),
        "/recommend?task=write%20a%20blog%20post%20about%20SEO",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["method"], "keyword_fallback");
    assert_eq!(body["task_category"], "Writing & Content");
    assert_eq!(body["recommended_tool"], "Jasper AI");
    let top5: Vec<&str> = body["top5"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(top5, vec!["Jasper AI", "Copy.ai", "Cursor", "Midjourney"]);
}

#[tokio::test]
async fn tools_filters_by_category_and_search() {
    let (status, body) = get(populated_app(), "/tools?category=Writing%20%26%20Content").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tools"].as_array().unwrap().len(), 2);

    let (_, body) = get(populated_app(), "/tools?category=All&search=CODE").await;
    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cursor"]);

    let (_, body) = get(populated_app(), "/tools").await;
    assert_eq!(body["tools"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn stats_lists_counts_and_total() {
    let (status, body) = get(populated_app(), "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["stats"][0]["category"], "Writing & Content");
    assert_eq!(body["stats"][0]["count"], 2);
    assert_eq!(body["stats"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn categories_lists_populated_categories_most_common_first() {
    let (status, body) = get(populated_app(), "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["categories"],
        serde_json::json!(["Writing & Content", "Code Generation", "Image Generation"])
    );
}

#[tokio::test]
async fn trends_without_service_uses_deterministic_summary() {
    let (status, body) = get(populated_app(), "/trends").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["summary"]
            .as_str()
            .unwrap()
            .starts_with("Based on 4 tools analyzed")
    );
    assert_eq!(body["category_breakdown"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get(populated_app(), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
