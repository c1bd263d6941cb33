//! Read side of the catalog: listing, statistics, recommendations and trends.
//!
//! Shared by the HTTP gateway and the CLI query commands.

use std::sync::Arc;

use serde::Serialize;
use trend_classify::{RecommendationRanker, trend_summary};
use trend_llm::LlmService;
use trend_types::{Category, CategoryCount, EnrichedTool, RecommendationResult};

use crate::store::{StoreError, ToolQuery, ToolStore};

/// Per-category counts plus the catalog size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub stats: Vec<CategoryCount>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub summary: String,
    pub category_breakdown: Vec<CategoryCount>,
}

#[derive(Clone)]
pub struct TrendService {
    store: Arc<dyn ToolStore>,
    llm: Arc<dyn LlmService>,
    ranker: RecommendationRanker,
}

impl TrendService {
    pub fn new(store: Arc<dyn ToolStore>, llm: Arc<dyn LlmService>) -> Self {
        Self {
            ranker: RecommendationRanker::new(Arc::clone(&llm)),
            store,
            llm,
        }
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        self.store.count()
    }

    pub fn tools(&self, query: &ToolQuery) -> Result<Vec<EnrichedTool>, StoreError> {
        self.store.query_all(query)
    }

    pub fn stats(&self) -> Result<CatalogStats, StoreError> {
        Ok(CatalogStats {
            stats: self.store.count_by_category()?,
            total: self.store.count()?,
        })
    }

    /// Categories present in the catalog, most populated first.
    pub fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self
            .store
            .count_by_category()?
            .into_iter()
            .map(|entry| entry.category)
            .collect())
    }

    /// Rank the stored catalog for `task`; an empty catalog gives the error-shaped result.
    pub async fn recommend(&self, task: &str) -> Result<RecommendationResult, StoreError> {
        let catalog = self.store.query_all(&ToolQuery::all())?;
        Ok(self.ranker.recommend(task, &catalog).await)
    }

    pub async fn trends(&self) -> Result<TrendReport, StoreError> {
        let catalog = self.store.query_all(&ToolQuery::all())?;
        let summary = trend_summary(self.llm.as_ref(), &catalog).await;
        Ok(TrendReport {
            summary,
            category_breakdown: self.store.count_by_category()?,
        })
    }
}
