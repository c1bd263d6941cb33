use std::sync::{PoisonError, RwLock};

use trend_types::{CategoryCount, EnrichedTool, PipelineRun};

use crate::store::ToolStore;
use crate::store::error::StoreError;
use crate::store::query::ToolQuery;
use crate::store::state::CatalogState;

/// Process-local catalog; used by tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryToolStore {
    state: RwLock<CatalogState>,
}

impl MemoryToolStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `tools`, in order.
    #[must_use]
    pub fn with_tools(tools: Vec<EnrichedTool>) -> Self {
        let mut state = CatalogState::default();
        state.replace_all(tools);
        Self {
            state: RwLock::new(state),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&CatalogState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut CatalogState) -> T) -> T {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl ToolStore for MemoryToolStore {
    fn save(&self, tool: EnrichedTool) -> Result<(), StoreError> {
        self.write(|state| state.upsert(tool));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.write(|state| state.tools.clear());
        Ok(())
    }

    fn replace_all(&self, tools: Vec<EnrichedTool>) -> Result<(), StoreError> {
        self.write(|state| state.replace_all(tools));
        Ok(())
    }

    fn query_all(&self, query: &ToolQuery) -> Result<Vec<EnrichedTool>, StoreError> {
        Ok(self.read(|state| state.query(query)))
    }

    fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError> {
        Ok(self.read(CatalogState::count_by_category))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read(|state| state.tools.len()))
    }

    fn log_run(&self, run: PipelineRun) -> Result<(), StoreError> {
        self.write(|state| state.record_run(run));
        Ok(())
    }

    fn runs(&self) -> Result<Vec<PipelineRun>, StoreError> {
        Ok(self.read(|state| state.runs.clone()))
    }
}
