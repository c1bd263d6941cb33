//! JSON-file catalog.
//!
//! Every read goes back to disk so a long-running gateway sees the catalog a separate
//! pipeline process just wrote. Writes replace the file via temp-then-rename, so a
//! reader observes either the previous catalog or the new one, never a mix.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use trend_types::{CategoryCount, EnrichedTool, PipelineRun};

use crate::store::ToolStore;
use crate::store::error::StoreError;
use crate::store::persistence::atomic_write_text;
use crate::store::query::ToolQuery;
use crate::store::state::CatalogState;

#[derive(Debug)]
pub struct JsonFileToolStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileToolStore {
    /// The file is created on the first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CatalogState, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CatalogState::default());
            }
            Err(error) => return Err(StoreError::io(&self.path, error)),
        };
        if raw.trim().is_empty() {
            return Ok(CatalogState::default());
        }
        serde_json::from_str(&raw).map_err(|error| StoreError::json(&self.path, error))
    }

    fn persist(&self, state: &CatalogState) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(state)
            .map_err(|error| StoreError::json(&self.path, error))?;
        atomic_write_text(&self.path, &content)?;
        tracing::debug!(
            event = "store.catalog.persisted",
            path = %self.path.display(),
            tools = state.tools.len(),
            runs = state.runs.len(),
            "catalog file replaced"
        );
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut CatalogState)) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut state = self.load()?;
        f(&mut state);
        self.persist(&state)
    }
}

impl ToolStore for JsonFileToolStore {
    fn save(&self, tool: EnrichedTool) -> Result<(), StoreError> {
        self.update(|state| state.upsert(tool))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.update(|state| state.tools.clear())
    }

    fn replace_all(&self, tools: Vec<EnrichedTool>) -> Result<(), StoreError> {
        self.update(|state| state.replace_all(tools))
    }

    fn query_all(&self, query: &ToolQuery) -> Result<Vec<EnrichedTool>, StoreError> {
        Ok(self.load()?.query(query))
    }

    fn count_by_category(&self) -> Result<Vec<CategoryCount>, StoreError> {
        Ok(self.load()?.count_by_category())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.tools.len())
    }

    fn log_run(&self, run: PipelineRun) -> Result<(), StoreError> {
        self.update(|state| state.record_run(run))
    }

    fn runs(&self) -> Result<Vec<PipelineRun>, StoreError> {
        Ok(self.load()?.runs)
    }
}
