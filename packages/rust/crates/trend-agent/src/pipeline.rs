//! End-to-end run: collect, classify, replace the catalog, summarize.
//!
//! Classification is sequential on purpose. When the external service is in use and
//! reachable, a fixed throttle follows every tool so one run stays inside the shared
//! rate budget; `max_tools` bounds the total run time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use trend_classify::{HybridClassifier, trend_summary};
use trend_llm::{DisabledLlm, LlmService};
use trend_sources::{AggregatorConfig, SourceAggregator, baseline_source};
use trend_types::{ClassificationMethod, EnrichedTool, PipelineRun, RawTool, RunStatus};

use crate::store::{ToolQuery, ToolStore};

pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Delay after each classified tool while the external service is in use.
    pub throttle: Duration,
    /// Classify at most this many collected tools.
    pub max_tools: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            throttle: DEFAULT_THROTTLE,
            max_tools: None,
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub run: PipelineRun,
    /// Unique tools handed over by collection (before the `max_tools` cap).
    pub collected: usize,
    pub classified: usize,
    /// Tools whose classification used the external service.
    pub enriched: usize,
    pub keyword_only: usize,
    pub used_sample_data: bool,
    pub baseline_supplemented: bool,
    pub catalog_size: usize,
    pub trend_summary: String,
    pub elapsed_ms: u64,
}

pub struct TrendPipeline {
    aggregator: SourceAggregator,
    llm: Arc<dyn LlmService>,
    store: Arc<dyn ToolStore>,
    config: PipelineConfig,
}

impl TrendPipeline {
    pub fn new(
        aggregator: SourceAggregator,
        llm: Arc<dyn LlmService>,
        store: Arc<dyn ToolStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            aggregator,
            llm,
            store,
            config,
        }
    }

    /// Run once. `use_sample` skips live sources in favour of the baseline dataset;
    /// `use_llm = false` sends every tool down the keyword-only path.
    ///
    /// Only store failures abort the run; they are logged as a failed run first.
    pub async fn run_pipeline(&self, use_sample: bool, use_llm: bool) -> Result<PipelineReport> {
        let started = Instant::now();
        tracing::info!(
            event = "pipeline.started",
            use_sample,
            use_llm,
            max_tools = ?self.config.max_tools,
            "pipeline run started"
        );

        let (raw_tools, baseline_supplemented) = if use_sample {
            (sample_aggregator().collect().await, false)
        } else {
            let report = self.aggregator.collect_with_report().await;
            (report.tools, report.baseline_supplemented)
        };
        let collected = raw_tools.len();

        let llm: Arc<dyn LlmService> = if use_llm {
            Arc::clone(&self.llm)
        } else {
            Arc::new(DisabledLlm)
        };
        let throttled = use_llm && llm.is_available();
        let mut enriched = self.classify_all(&llm, raw_tools, throttled).await;

        let scraped_at = Utc::now();
        for tool in &mut enriched {
            tool.scraped_at = Some(scraped_at);
        }
        let classified = enriched.len();
        let keyword_only = enriched
            .iter()
            .filter(|tool| tool.classification.method == ClassificationMethod::KeywordOnly)
            .count();

        if let Err(error) = self.store.replace_all(enriched) {
            self.log_failed_run(scraped_at);
            return Err(error).context("failed to replace tool catalog");
        }
        let run = PipelineRun {
            run_at: scraped_at,
            tools_found: classified,
            status: RunStatus::Success,
        };
        self.store
            .log_run(run.clone())
            .context("failed to log pipeline run")?;

        let catalog = self
            .store
            .query_all(&ToolQuery::all())
            .context("failed to read back tool catalog")?;
        let summary = trend_summary(llm.as_ref(), &catalog).await;

        let report = PipelineReport {
            run,
            collected,
            classified,
            enriched: classified - keyword_only,
            keyword_only,
            used_sample_data: use_sample,
            baseline_supplemented,
            catalog_size: catalog.len(),
            trend_summary: summary,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            event = "pipeline.completed",
            collected = report.collected,
            classified = report.classified,
            enriched = report.enriched,
            keyword_only = report.keyword_only,
            catalog_size = report.catalog_size,
            elapsed_ms = report.elapsed_ms,
            "pipeline run completed"
        );
        Ok(report)
    }

    async fn classify_all(
        &self,
        llm: &Arc<dyn LlmService>,
        raw_tools: Vec<RawTool>,
        throttled: bool,
    ) -> Vec<EnrichedTool> {
        let classifier = HybridClassifier::new(Arc::clone(llm));
        let limit = self.config.max_tools.unwrap_or(usize::MAX);
        let total = raw_tools.len().min(limit);
        let mut enriched = Vec::with_capacity(total);
        for (index, raw) in raw_tools.into_iter().take(limit).enumerate() {
            tracing::debug!(
                event = "pipeline.tool.classifying",
                position = index + 1,
                total,
                tool = %raw.name,
                "classifying tool"
            );
            let classification = classifier.classify(&raw).await;
            enriched.push(EnrichedTool::from_parts(raw, classification));
            if throttled && !self.config.throttle.is_zero() {
                tokio::time::sleep(self.config.throttle).await;
            }
        }
        enriched
    }

    fn log_failed_run(&self, run_at: chrono::DateTime<Utc>) {
        let run = PipelineRun {
            run_at,
            tools_found: 0,
            status: RunStatus::Failed,
        };
        if let Err(error) = self.store.log_run(run) {
            tracing::warn!(
                event = "pipeline.run_log.failed",
                error = %error,
                "failed to record failed pipeline run"
            );
        }
    }
}

/// The baseline served as the only source, never supplemented.
fn sample_aggregator() -> SourceAggregator {
    SourceAggregator::new(
        vec![Arc::new(baseline_source())],
        AggregatorConfig {
            min_live_yield: 0,
            ..AggregatorConfig::default()
        },
    )
}
