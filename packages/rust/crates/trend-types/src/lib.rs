//! trend-types - Shared data model for the tool-trends pipeline
//!
//! Every other crate in the workspace speaks these types:
//!
//! ```text
//! trend-types/src/
//! ├── lib.rs            # Re-exports (this file)
//! ├── category.rs       # Category (closed enumeration)
//! ├── tool.rs           # RawTool, EnrichedTool
//! ├── classification.rs # ClassificationResult, ClassificationMethod, PricingHint
//! ├── recommendation.rs # RecommendationResult, RankingMethod
//! └── catalog.rs        # CategoryCount, PipelineRun, RunStatus
//! ```

mod catalog;
mod category;
mod classification;
mod recommendation;
mod tool;

pub use catalog::{CategoryCount, PipelineRun, RunStatus};
pub use category::Category;
pub use classification::{
    AUDIENCES, ClassificationMethod, ClassificationResult, PricingHint, SUMMARY_FALLBACK_CHARS,
    truncate_chars,
};
pub use recommendation::{EMPTY_CATALOG_REASON, RankingMethod, RecommendationResult};
pub use tool::{EnrichedTool, RawTool};
