//! Concurrent collection across sources.
//!
//! Every source runs in its own task under its own timeout. Failures, timeouts and
//! panics are recorded per source and contribute zero records; only the join point
//! merges results, in source-declared order.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinSet;
use trend_types::RawTool;

use crate::baseline::baseline_tools;
use crate::github::GitHubAwesomeListSource;
use crate::huggingface::HuggingFaceSpacesSource;
use crate::source::ToolSource;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
/// Live yields below this get the baseline appended.
pub const DEFAULT_MIN_LIVE_YIELD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub fetch_timeout: Duration,
    pub min_live_yield: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            min_live_yield: DEFAULT_MIN_LIVE_YIELD,
        }
    }
}

/// How one source's fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Ok,
    Failed(String),
    TimedOut,
    /// The fetch task panicked or was cancelled.
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceYield {
    pub source: String,
    pub records: usize,
    pub status: SourceStatus,
}

/// Deduplicated tools plus per-source bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectReport {
    pub tools: Vec<RawTool>,
    /// In source-declared order.
    pub sources: Vec<SourceYield>,
    /// Records from live sources, before baseline and dedup.
    pub live_records: usize,
    pub baseline_supplemented: bool,
}

pub struct SourceAggregator {
    sources: Vec<Arc<dyn ToolSource>>,
    config: AggregatorConfig,
    baseline: Vec<RawTool>,
}

impl SourceAggregator {
    pub fn new(sources: Vec<Arc<dyn ToolSource>>, config: AggregatorConfig) -> Self {
        Self {
            sources,
            config,
            baseline: baseline_tools(),
        }
    }

    /// GitHub awesome list and Hugging Face Spaces, in that order.
    pub fn live(github_url: &str, spaces_url: &str, config: AggregatorConfig) -> Self {
        let sources: Vec<Arc<dyn ToolSource>> = vec![
            Arc::new(GitHubAwesomeListSource::new(
                github_url,
                config.fetch_timeout,
            )),
            Arc::new(HuggingFaceSpacesSource::new(
                spaces_url,
                config.fetch_timeout,
            )),
        ];
        Self::new(sources, config)
    }

    pub async fn collect(&self) -> Vec<RawTool> {
        self.collect_with_report().await.tools
    }

    pub async fn collect_with_report(&self) -> CollectReport {
        let started = Instant::now();
        let mut slots: Vec<(Vec<RawTool>, SourceYield)> = self
            .sources
            .iter()
            .map(|source| {
                (
                    Vec::new(),
                    SourceYield {
                        source: source.name().to_string(),
                        records: 0,
                        status: SourceStatus::Aborted,
                    },
                )
            })
            .collect();

        let mut fetches = JoinSet::new();
        for (index, source) in self.sources.iter().enumerate() {
            let source = Arc::clone(source);
            let timeout = self.config.fetch_timeout;
            fetches.spawn(async move {
                let outcome = tokio::time::timeout(timeout, source.fetch()).await;
                (index, outcome)
            });
        }

        while let Some(joined) = fetches.join_next().await {
            let (index, outcome) = match joined {
                Ok(done) => done,
                Err(join_error) => {
                    tracing::warn!(
                        event = "sources.fetch.aborted",
                        error = %join_error,
                        "source fetch task aborted; contributing zero records"
                    );
                    continue;
                }
            };
            let Some((records, report)) = slots.get_mut(index) else {
                continue;
            };
            match outcome {
                Ok(Ok(tools)) => {
                    tracing::info!(
                        event = "sources.fetch.ok",
                        source = %report.source,
                        records = tools.len(),
                        "source fetch completed"
                    );
                    report.records = tools.len();
                    report.status = SourceStatus::Ok;
                    *records = tools;
                }
                Ok(Err(error)) => {
                    tracing::warn!(
                        event = "sources.fetch.failed",
                        source = %report.source,
                        error = %error,
                        "source fetch failed; contributing zero records"
                    );
                    report.status = SourceStatus::Failed(error.to_string());
                }
                Err(_elapsed) => {
                    tracing::warn!(
                        event = "sources.fetch.timed_out",
                        source = %report.source,
                        timeout_ms = self.config.fetch_timeout.as_millis(),
                        "source fetch timed out; contributing zero records"
                    );
                    report.status = SourceStatus::TimedOut;
                }
            }
        }

        let mut merged = Vec::new();
        let mut sources = Vec::with_capacity(slots.len());
        for (records, report) in slots {
            merged.extend(records);
            sources.push(report);
        }
        let live_records = merged.len();
        let baseline_supplemented = live_records < self.config.min_live_yield;
        if baseline_supplemented {
            tracing::info!(
                event = "sources.baseline.supplemented",
                live_records,
                min_live_yield = self.config.min_live_yield,
                baseline_records = self.baseline.len(),
                "live yield too low; appending baseline dataset"
            );
            merged.extend(self.baseline.iter().cloned());
        }
        let tools = dedupe(merged);
        tracing::info!(
            event = "sources.collect.completed",
            sources = sources.len(),
            live_records,
            unique = tools.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "source collection completed"
        );
        CollectReport {
            tools,
            sources,
            live_records,
            baseline_supplemented,
        }
    }
}

/// Keep the first record per trimmed, lowercased name; drop names of one char or less.
#[must_use]
pub fn dedupe(tools: Vec<RawTool>) -> Vec<RawTool> {
    let mut seen = HashSet::new();
    tools
        .into_iter()
        .filter(|tool| {
            let key = tool.normalized_name();
            key.chars().count() > 1 && seen.insert(key)
        })
        .collect()
}
