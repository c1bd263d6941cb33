//! trend-agent - pipeline runner, catalog store and HTTP gateway for tool trends.
//!
//! ```text
//! trend-agent/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── config/       # Layered YAML runtime settings
//! ├── store/        # ToolStore trait, in-memory and JSON-file catalogs
//! ├── pipeline.rs   # TrendPipeline::run_pipeline
//! ├── service.rs    # TrendService (listing, stats, recommend, trends)
//! ├── gateway/      # axum router + server
//! └── main.rs       # CLI binary
//! ```

#![allow(missing_docs)]

mod config;
mod gateway;
mod pipeline;
mod service;
mod store;

pub use config::{
    GatewaySettings, LlmSettings, PipelineSettings, RuntimeSettings, SourcesSettings,
    StoreSettings, absolutize, load_runtime_settings, load_runtime_settings_from_paths,
    project_root, runtime_settings_paths, set_config_home_override,
};
pub use gateway::{
    CategoriesResponse, GATEWAY_NAME, GatewayState, RecommendQuery, RootResponse, ToolsResponse,
    router, run_http, validate_task,
};
pub use pipeline::{DEFAULT_THROTTLE, PipelineConfig, PipelineReport, TrendPipeline};
pub use service::{CatalogStats, TrendReport, TrendService};
pub use store::{
    ALL_CATEGORIES, JsonFileToolStore, MemoryToolStore, RUN_HISTORY_LIMIT, StoreError, ToolQuery,
    ToolStore,
};
