//! Catalog storage: the record store the pipeline writes and the gateway reads.

mod error;
mod file;
mod memory;
mod persistence;
mod query;
mod state;

use trend_types::{CategoryCount, EnrichedTool, PipelineRun};

pub use error::StoreError;
pub use file::JsonFileToolStore;
pub use memory::MemoryToolStore;
pub use query::{ALL_CATEGORIES, ToolQuery};
pub use state::RUN_HISTORY_LIMIT;

/// Record store keyed by tool name (trimmed, case-insensitive).
///
/// Query results keep insertion order. A pipeline run replaces the whole catalog
/// through [`ToolStore::replace_all`].
pub trait ToolStore: Send + Sync {
    /// Insert, or replace the entry with the same name.
    fn save(&self, tool: EnrichedTool) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;

    /// Clear and insert `tools` as one batch.
    fn replace_all(&self, tools: Vec<EnrichedTool>) -> Result<(), StoreError>;

    fn query_all(&self, query: &ToolQuery) -> Result<Vec<EnrichedTool>, StoreError>;

    /// Non-empty categories, count descending, ties in category order.
    fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;

    fn log_run(&self, run: PipelineRun) -> Result<(), StoreError>;

    /// Logged runs, oldest first, at most [`RUN_HISTORY_LIMIT`].
    fn runs(&self) -> Result<Vec<PipelineRun>, StoreError>;
}
