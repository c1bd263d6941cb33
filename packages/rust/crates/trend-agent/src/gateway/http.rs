//! HTTP gateway: read-only JSON views over the catalog.
//!
//! `GET /recommend` answers 400 for a blank task. Store failures answer 500.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use trend_types::{Category, EnrichedTool};

use crate::service::{CatalogStats, TrendReport, TrendService};
use crate::store::{StoreError, ToolQuery};

pub const GATEWAY_NAME: &str = "Tool Trends API";

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct GatewayState {
    pub service: Arc<TrendService>,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub tools: usize,
}

#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<EnrichedTool>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Query string of `GET /recommend`.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub task: Option<String>,
}

type ApiError = (StatusCode, String);

fn store_failure(error: &StoreError) -> ApiError {
    tracing::warn!(
        event = "gateway.store.failed",
        error = %error,
        "catalog store request failed"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

/// Trimmed task text, or 400 when blank.
pub fn validate_task(query: &RecommendQuery) -> Result<String, ApiError> {
    let task = query.task.as_deref().map(str::trim).unwrap_or_default();
    if task.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "task must be non-empty".to_string(),
        ));
    }
    Ok(task.to_string())
}

async fn handle_root(State(state): State<GatewayState>) -> Result<Json<RootResponse>, ApiError> {
    let tools = state.service.count().map_err(|e| store_failure(&e))?;
    Ok(Json(RootResponse {
        message: GATEWAY_NAME,
        tools,
    }))
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn handle_tools(
    State(state): State<GatewayState>,
    Query(query): Query<ToolQuery>,
) -> Result<Json<ToolsResponse>, ApiError> {
    let tools = state.service.tools(&query).map_err(|e| store_failure(&e))?;
    Ok(Json(ToolsResponse { tools }))
}

async fn handle_stats(State(state): State<GatewayState>) -> Result<Json<CatalogStats>, ApiError> {
    state
        .service
        .stats()
        .map(Json)
        .map_err(|e| store_failure(&e))
}

async fn handle_recommend(
    State(state): State<GatewayState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Response, ApiError> {
    let task = validate_task(&query)?;
    let result = state
        .service
        .recommend(&task)
        .await
        .map_err(|e| store_failure(&e))?;
    if result.is_error() {
        return Ok(Json(json!({ "error": result.reason })).into_response());
    }
    Ok(Json(result).into_response())
}

async fn handle_trends(State(state): State<GatewayState>) -> Result<Json<TrendReport>, ApiError> {
    state
        .service
        .trends()
        .await
        .map(Json)
        .map_err(|e| store_failure(&e))
}

async fn handle_categories(
    State(state): State<GatewayState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state
        .service
        .categories()
        .map_err(|e| store_failure(&e))?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Build the gateway router.
pub fn router(service: TrendService) -> Router {
    let state = GatewayState {
        service: Arc::new(service),
    };
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/tools", get(handle_tools))
        .route("/stats", get(handle_stats))
        .route("/recommend", get(handle_recommend))
        .route("/trends", get(handle_trends))
        .route("/categories", get(handle_categories))
        .with_state(state)
}

/// Run the HTTP server; binds to `bind_addr` (e.g. `0.0.0.0:8000`).
/// Graceful shutdown on Ctrl+C (SIGINT) and SIGTERM (Unix).
pub async fn run_http(service: TrendService, bind_addr: &str) -> Result<()> {
    let app = router(service);
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(
        event = "gateway.listening",
        bind = %bind_addr,
        "gateway listening (Ctrl+C/SIGTERM to stop)"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!(event = "gateway.stopped", "gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
