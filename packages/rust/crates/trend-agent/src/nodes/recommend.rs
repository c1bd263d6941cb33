use std::path::PathBuf;

use anyhow::bail;
use trend_agent::RuntimeSettings;

use crate::app_builder::build_service;
use crate::nodes::print_json;

pub(crate) async fn run_recommend_mode(
    task: String,
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let task = task.trim();
    if task.is_empty() {
        bail!("--task must be non-empty");
    }
    let service = build_service(store, runtime_settings);
    let result = service.recommend(task).await?;
    if result.is_error() {
        tracing::warn!(
            event = "recommend.empty_catalog",
            "catalog is empty; run `trend-agent pipeline` first"
        );
    }
    print_json(&result)
}
