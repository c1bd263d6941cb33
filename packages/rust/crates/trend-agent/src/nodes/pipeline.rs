use std::path::PathBuf;

use trend_agent::RuntimeSettings;

use crate::app_builder::build_pipeline;
use crate::nodes::print_json;

pub(crate) async fn run_pipeline_mode(
    sample: bool,
    no_llm: bool,
    max_tools: Option<usize>,
    store: Option<PathBuf>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let pipeline = build_pipeline(store, max_tools, runtime_settings);
    let report = pipeline.run_pipeline(sample, !no_llm).await?;
    print_json(&report)
}
