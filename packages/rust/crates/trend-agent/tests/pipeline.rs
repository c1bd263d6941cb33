//! Pipeline runs against in-memory stores and scripted services.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use trend_agent::{
    MemoryToolStore, PipelineConfig, StoreError, ToolQuery, ToolStore, TrendPipeline,
};
use trend_llm::{DisabledLlm, LlmReply, LlmService};
use trend_sources::{AggregatorConfig, SourceAggregator, StaticSource, baseline_tools};
use trend_types::{
    CategoryCount, ClassificationMethod, EnrichedTool, PipelineRun, RawTool, RunStatus,
};

/// Answers every prompt with the same JSON object and counts calls.
struct FixedAnswerLlm {
    answer: &'static str,
    calls: AtomicUsize,
}

impl FixedAnswerLlm {
    fn new(answer: &'static str) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmService for FixedAnswerLlm {
    async fn complete(&self, _prompt: &str, _max_output_tokens: u32) -> LlmReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LlmReply::Success(self.answer.to_string())
    }
}

const ANSWER: &str = r#"{"category": "Code Generation", "summary": "Enriched summary.", "pricing_hint": "Freemium", "analysis": "Code tools dominate this run."}"#;

fn live_tools(count: usize) -> Vec<RawTool> {
    (0..count)
        .map(|i| RawTool::new(format!("Live Tool {i}"), "An AI writing assistant", "live"))
        .collect()
}

fn pipeline(
    live: Vec<RawTool>,
    llm: Arc<dyn LlmService>,
    store: Arc<dyn ToolStore>,
    config: PipelineConfig,
) -> TrendPipeline {
    let aggregator = SourceAggregator::new(
        vec![Arc::new(StaticSource::new("live", live))],
        AggregatorConfig::default(),
    );
    TrendPipeline::new(aggregator, llm, store, config)
}

fn unthrottled() -> PipelineConfig {
    PipelineConfig {
        throttle: Duration::ZERO,
        max_tools: None,
    }
}

#[tokio::test]
async fn sample_run_without_llm_classifies_baseline_by_keywords() -> Result<()> {
    let llm = Arc::new(FixedAnswerLlm::new(ANSWER));
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(Vec::new(), llm.clone(), store.clone(), PipelineConfig::default());

    let report = pipeline.run_pipeline(true, false).await?;

    assert_eq!(llm.calls(), 0);
    assert!(report.used_sample_data);
    assert_eq!(report.collected, 30);
    assert_eq!(report.classified, 30);
    assert_eq!(report.keyword_only, 30);
    assert_eq!(report.enriched, 0);
    assert_eq!(report.catalog_size, 30);
    assert!(report.trend_summary.starts_with("Based on 30 tools analyzed"));

    let stored = store.query_all(&ToolQuery::all())?;
    let stored_names: Vec<&str> = stored.iter().map(|tool| tool.name.as_str()).collect();
    let baseline_names: Vec<String> = baseline_tools().into_iter().map(|tool| tool.name).collect();
    assert_eq!(stored_names, baseline_names);
    assert!(stored.iter().all(|tool| {
        tool.classification.method == ClassificationMethod::KeywordOnly
            && tool.scraped_at == Some(report.run.run_at)
    }));

    let runs = store.runs()?;
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].tools_found, 30);
    assert_eq!(runs[0].status, RunStatus::Success);
    Ok(())
}

#[tokio::test]
async fn stored_confidence_matches_keyword_scoring() -> Result<()> {
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(Vec::new(), Arc::new(DisabledLlm), store.clone(), unthrottled());

    pipeline.run_pipeline(true, true).await?;

    for tool in store.query_all(&ToolQuery::all())? {
        let expected = trend_classify::score(&format!("{} {}", tool.name, tool.description));
        assert_eq!(tool.classification.category, expected.category, "{}", tool.name);
        assert!((tool.classification.confidence - expected.confidence).abs() < f64::EPSILON);
    }
    Ok(())
}

#[tokio::test]
async fn live_run_with_llm_enriches_every_tool() -> Result<()> {
    let llm = Arc::new(FixedAnswerLlm::new(ANSWER));
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(live_tools(12), llm.clone(), store.clone(), unthrottled());

    let report = pipeline.run_pipeline(false, true).await?;

    assert!(!report.used_sample_data);
    assert!(!report.baseline_supplemented);
    assert_eq!(report.classified, 12);
    assert_eq!(report.enriched, 12);
    assert_eq!(report.keyword_only, 0);
    // One call per tool plus the trend summary.
    assert_eq!(llm.calls(), 13);
    assert_eq!(report.trend_summary, "Code tools dominate this run.");
    let stored = store.query_all(&ToolQuery::all())?;
    assert!(
        stored
            .iter()
            .all(|tool| tool.classification.summary == "Enriched summary.")
    );
    Ok(())
}

#[tokio::test]
async fn low_live_yield_is_supplemented_with_baseline() -> Result<()> {
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(live_tools(3), Arc::new(DisabledLlm), store.clone(), unthrottled());

    let report = pipeline.run_pipeline(false, false).await?;

    assert!(report.baseline_supplemented);
    assert_eq!(report.collected, 33);
    assert_eq!(store.count()?, 33);
    let first: Vec<EnrichedTool> = store.query_all(&ToolQuery::all())?;
    assert_eq!(first[0].name, "Live Tool 0");
    assert_eq!(first[3].name, "GitHub Copilot");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn max_tools_caps_the_run_and_throttle_follows_each_tool() -> Result<()> {
    let llm = Arc::new(FixedAnswerLlm::new(ANSWER));
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(
        live_tools(12),
        llm.clone(),
        store.clone(),
        PipelineConfig {
            throttle: Duration::from_millis(800),
            max_tools: Some(4),
        },
    );

    let started = tokio::time::Instant::now();
    let report = pipeline.run_pipeline(false, true).await?;

    assert_eq!(report.collected, 12);
    assert_eq!(report.classified, 4);
    assert_eq!(store.count()?, 4);
    assert!(started.elapsed() >= Duration::from_millis(3200));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn keyword_only_runs_are_not_throttled() -> Result<()> {
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(
        Vec::new(),
        Arc::new(DisabledLlm),
        store,
        PipelineConfig {
            throttle: Duration::from_secs(5),
            max_tools: None,
        },
    );

    let started = tokio::time::Instant::now();
    pipeline.run_pipeline(true, false).await?;

    assert!(started.elapsed() < Duration::from_secs(5));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn unreachable_service_is_not_throttled() -> Result<()> {
    let store = Arc::new(MemoryToolStore::new());
    let pipeline = pipeline(
        live_tools(12),
        Arc::new(DisabledLlm),
        store.clone(),
        PipelineConfig {
            throttle: Duration::from_secs(5),
            max_tools: None,
        },
    );

    let started = tokio::time::Instant::now();
    let report = pipeline.run_pipeline(false, true).await?;

    assert_eq!(report.keyword_only, 12);
    assert!(started.elapsed() < Duration::from_secs(5));
    Ok(())
}

#[tokio::test]
async fn rerun_replaces_the_previous_catalog() -> Result<()> {
    let store = Arc::new(MemoryToolStore::new());
    pipeline(Vec::new(), Arc::new(DisabledLlm), store.clone(), unthrottled())
        .run_pipeline(true, false)
        .await?;
    pipeline(live_tools(12), Arc::new(DisabledLlm), store.clone(), unthrottled())
        .run_pipeline(false, false)
        .await?;

    assert_eq!(store.count()?, 12);
    assert_eq!(store.runs()?.len(), 2);
    Ok(())
}

/// Delegates to a memory store but cannot replace the catalog.
struct ReadOnlyStore {
    inner: MemoryToolStore,
}

impl ReadOnlyStore {
    fn refused() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("catalog.json"),
            source: std::io::Error::other("read-only file system"),
        }
    }
}

impl ToolStore for ReadOnlyStore {
    fn save(&self, _tool: EnrichedTool) -> Result<(), StoreError> {
        Err(Self::refused())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(Self::refused())
    }

    fn replace_all(&self, _tools: Vec<EnrichedTool>) -> Result<(), StoreError> {
        Err(Self::refused())
    }

    fn query_all(&self, query: &ToolQuery) -> Result<Vec<EnrichedTool>, StoreError> {
        self.inner.query_all(query)
    }

    fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError> {
        self.inner.count_by_category()
    }

    fn count(&self) -> Result<usize, StoreError> {
        self.inner.count()
    }

    fn log_run(&self, run: PipelineRun) -> Result<(), StoreError> {
        self.inner.log_run(run)
    }

    fn runs(&self) -> Result<Vec<PipelineRun>, StoreError> {
        self.inner.runs()
    }
}

#[tokio::test]
async fn store_failure_aborts_the_run_and_logs_it() {
    let store = Arc::new(ReadOnlyStore {
        inner: MemoryToolStore::new(),
    });
    let pipeline = pipeline(Vec::new(), Arc::new(DisabledLlm), store.clone(), unthrottled());

    let outcome = pipeline.run_pipeline(true, false).await;

    assert!(outcome.is_err());
    let runs = store.runs().expect("runs");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].status, RunStatus::Failed);
    assert_eq!(runs[0].tools_found, 0);
}
