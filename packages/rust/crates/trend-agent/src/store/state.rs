use serde::{Deserialize, Serialize};
use trend_classify::category_counts;
use trend_types::{CategoryCount, EnrichedTool, PipelineRun};

use crate::store::query::ToolQuery;

/// Pipeline runs kept in the history; older entries are dropped first.
pub const RUN_HISTORY_LIMIT: usize = 100;

/// Whole catalog contents; also the on-disk document of the file store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CatalogState {
    #[serde(default)]
    pub(crate) tools: Vec<EnrichedTool>,
    #[serde(default)]
    pub(crate) runs: Vec<PipelineRun>,
}

impl CatalogState {
    /// Replace the entry with the same trimmed, lowercased name in place, or append.
    pub(crate) fn upsert(&mut self, tool: EnrichedTool) {
        let key = name_key(&tool.name);
        match self
            .tools
            .iter_mut()
            .find(|existing| name_key(&existing.name) == key)
        {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    pub(crate) fn replace_all(&mut self, tools: Vec<EnrichedTool>) {
        self.tools.clear();
        for tool in tools {
            self.upsert(tool);
        }
    }

    pub(crate) fn query(&self, query: &ToolQuery) -> Vec<EnrichedTool> {
        let matcher = query.matcher();
        self.tools
            .iter()
            .filter(|tool| matcher.matches(tool))
            .cloned()
            .collect()
    }

    pub(crate) fn record_run(&mut self, run: PipelineRun) {
        self.runs.push(run);
        let excess = self.runs.len().saturating_sub(RUN_HISTORY_LIMIT);
        self.runs.drain(..excess);
    }

    pub(crate) fn count_by_category(&self) -> Vec<CategoryCount> {
        category_counts(&self.tools)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
