//! Wire settings into the LLM service, sources, store and pipeline.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use trend_agent::{
    JsonFileToolStore, PipelineConfig, RuntimeSettings, ToolStore, TrendPipeline, TrendService,
    absolutize, project_root,
};
use trend_llm::{
    DEFAULT_INFERENCE_URL, DEFAULT_MODEL, LlmConfig, LlmInvoker, LlmService, RetryPolicy,
    sanitize_api_key,
};
use trend_sources::{
    AggregatorConfig, DEFAULT_AWESOME_LIST_URL, DEFAULT_MIN_LIVE_YIELD, DEFAULT_SPACES_URL,
    SourceAggregator,
};

use crate::resolve::{
    resolve_f32, resolve_optional_limit, resolve_positive_u64, resolve_positive_usize,
    resolve_string, resolve_u64,
};

const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
const DEFAULT_MAX_ATTEMPTS: u64 = 3;
const DEFAULT_BACKOFF_UNIT_MS: u64 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_THROTTLE_MS: u64 = 800;
const DEFAULT_STORE_PATH: &str = ".data/tool-trends/catalog.json";
pub(crate) const DEFAULT_GATEWAY_BIND: &str = "0.0.0.0:8000";

pub(crate) fn build_llm_config(settings: &RuntimeSettings) -> LlmConfig {
    let llm = &settings.llm;
    let api_key_env = resolve_string(
        None,
        "TREND_AGENT_API_KEY_ENV",
        llm.api_key_env.as_deref(),
        DEFAULT_API_KEY_ENV,
    );
    let api_key = sanitize_api_key(std::env::var(api_key_env.trim()).ok());
    if api_key.is_none() {
        tracing::info!(
            event = "llm.credential.missing",
            env_var = %api_key_env,
            "no service credential; classification and ranking use keyword fallbacks"
        );
    }
    let max_attempts = resolve_positive_u64(
        None,
        "TREND_AGENT_LLM_MAX_ATTEMPTS",
        llm.max_attempts.map(u64::from),
        DEFAULT_MAX_ATTEMPTS,
    );
    LlmConfig {
        inference_url: resolve_string(
            None,
            "TREND_AGENT_LLM_URL",
            llm.inference_url.as_deref(),
            DEFAULT_INFERENCE_URL,
        ),
        model: resolve_string(
            None,
            "TREND_AGENT_LLM_MODEL",
            llm.model.as_deref(),
            DEFAULT_MODEL,
        ),
        api_key,
        temperature: resolve_f32(
            "TREND_AGENT_LLM_TEMPERATURE",
            llm.temperature,
            DEFAULT_TEMPERATURE,
        ),
        request_timeout: Duration::from_secs(resolve_positive_u64(
            None,
            "TREND_AGENT_LLM_TIMEOUT_SECS",
            llm.request_timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )),
        retry: RetryPolicy {
            max_attempts: u32::try_from(max_attempts).unwrap_or(u32::MAX),
            backoff_step: Duration::from_millis(resolve_positive_u64(
                None,
                "TREND_AGENT_LLM_BACKOFF_MS",
                llm.backoff_unit_ms,
                DEFAULT_BACKOFF_UNIT_MS,
            )),
        },
    }
}

pub(crate) fn build_llm(settings: &RuntimeSettings) -> Arc<dyn LlmService> {
    Arc::new(LlmInvoker::from_config(&build_llm_config(settings)))
}

pub(crate) fn build_aggregator(settings: &RuntimeSettings) -> SourceAggregator {
    let sources = &settings.sources;
    let github_url = resolve_string(
        None,
        "TREND_AGENT_GITHUB_AWESOME_URL",
        sources.github_awesome_url.as_deref(),
        DEFAULT_AWESOME_LIST_URL,
    );
    let spaces_url = resolve_string(
        None,
        "TREND_AGENT_SPACES_URL",
        sources.huggingface_spaces_url.as_deref(),
        DEFAULT_SPACES_URL,
    );
    let config = AggregatorConfig {
        fetch_timeout: Duration::from_secs(resolve_positive_u64(
            None,
            "TREND_AGENT_FETCH_TIMEOUT_SECS",
            sources.fetch_timeout_secs,
            DEFAULT_FETCH_TIMEOUT_SECS,
        )),
        min_live_yield: resolve_positive_usize(
            None,
            "TREND_AGENT_MIN_LIVE_YIELD",
            sources.min_live_yield,
            DEFAULT_MIN_LIVE_YIELD,
        ),
    };
    SourceAggregator::live(&github_url, &spaces_url, config)
}

/// Catalog path; relative paths resolve against the project root.
pub(crate) fn resolve_store_path(
    cli_store: Option<PathBuf>,
    settings: &RuntimeSettings,
) -> PathBuf {
    let raw = resolve_string(
        cli_store.map(|path| path.to_string_lossy().into_owned()),
        "TREND_AGENT_STORE_PATH",
        settings.store.path.as_deref(),
        DEFAULT_STORE_PATH,
    );
    absolutize(&project_root(), PathBuf::from(raw))
}

pub(crate) fn build_store(
    cli_store: Option<PathBuf>,
    settings: &RuntimeSettings,
) -> Arc<dyn ToolStore> {
    let path = resolve_store_path(cli_store, settings);
    tracing::debug!(
        event = "store.catalog.opened",
        path = %path.display(),
        "using catalog file"
    );
    Arc::new(JsonFileToolStore::new(path))
}

pub(crate) fn build_pipeline(
    cli_store: Option<PathBuf>,
    cli_max_tools: Option<usize>,
    settings: &RuntimeSettings,
) -> TrendPipeline {
    let pipeline = &settings.pipeline;
    let config = PipelineConfig {
        throttle: Duration::from_millis(resolve_u64(
            None,
            "TREND_AGENT_THROTTLE_MS",
            pipeline.throttle_ms,
            DEFAULT_THROTTLE_MS,
        )),
        max_tools: resolve_optional_limit(
            cli_max_tools,
            "TREND_AGENT_MAX_TOOLS",
            pipeline.max_tools,
        ),
    };
    TrendPipeline::new(
        build_aggregator(settings),
        build_llm(settings),
        build_store(cli_store, settings),
        config,
    )
}

pub(crate) fn build_service(
    cli_store: Option<PathBuf>,
    settings: &RuntimeSettings,
) -> TrendService {
    TrendService::new(build_store(cli_store, settings), build_llm(settings))
}
