mod catalog;
mod gateway;
mod pipeline;
mod recommend;

use serde::Serialize;

pub(crate) use catalog::{run_categories_mode, run_stats_mode, run_tools_mode, run_trends_mode};
pub(crate) use gateway::run_gateway_mode;
pub(crate) use pipeline::run_pipeline_mode;
pub(crate) use recommend::run_recommend_mode;

/// Command results go to stdout as pretty JSON; logs stay on stderr.
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
