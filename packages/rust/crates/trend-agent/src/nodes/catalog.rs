use std::path::PathBuf;

use serde_json::json;
use trend_agent::{RuntimeSettings, ToolQuery};

use crate::app_builder::build_service;
use crate::nodes::print_json;

pub(crate) fn run_tools_mode(
    category: Option<String>,
    search: Option<String>,
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let service = build_service(store, runtime_settings);
    let tools = service.tools(&ToolQuery { category, search })?;
    print_json(&json!({ "tools": tools }))
}

pub(crate) fn run_stats_mode(
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let service = build_service(store, runtime_settings);
    print_json(&service.stats()?)
}

pub(crate) fn run_categories_mode(
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let service = build_service(store, runtime_settings);
    print_json(&json!({ "categories": service.categories()? }))
}

pub(crate) async fn run_trends_mode(
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let service = build_service(store, runtime_settings);
    print_json(&service.trends().await?)
}
