//! trend-agent CLI: pipeline runs, catalog queries, or the HTTP gateway.
//!
//! Logging: set `RUST_LOG=trend_agent=info` (or `warn`, `debug`) to see logs on stderr.
//! The credential is read from the env var named by settings `llm.api_key_env`
//! (default `GROQ_API_KEY`); without it every step uses keyword fallbacks.

mod app_builder;
mod cli;
mod nodes;
mod resolve;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trend_agent::{load_runtime_settings, set_config_home_override};

use crate::cli::{Cli, Command};
use crate::nodes::{
    run_categories_mode, run_gateway_mode, run_pipeline_mode, run_recommend_mode,
    run_stats_mode, run_tools_mode, run_trends_mode,
};

const DEFAULT_LOG_FILTER: &str =
    "trend_agent=info,trend_llm=info,trend_sources=info,trend_classify=info";
const VERBOSE_LOG_FILTER: &str =
    "trend_agent=debug,trend_llm=debug,trend_sources=debug,trend_classify=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }
    let runtime_settings = load_runtime_settings();
    let store = cli.store;

    match cli.command {
        Command::Pipeline {
            sample,
            no_llm,
            max_tools,
        } => run_pipeline_mode(sample, no_llm, max_tools, store, &runtime_settings).await,
        Command::Recommend { task } => run_recommend_mode(task, store, &runtime_settings).await,
        Command::Tools { category, search } => {
            run_tools_mode(category, search, store, &runtime_settings)
        }
        Command::Stats => run_stats_mode(store, &runtime_settings),
        Command::Trends => run_trends_mode(store, &runtime_settings).await,
        Command::Categories => run_categories_mode(store, &runtime_settings),
        Command::Gateway { bind } => run_gateway_mode(bind, store, &runtime_settings).await,
    }
}
