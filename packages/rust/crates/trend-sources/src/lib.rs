//! trend-sources - Tool listings from independent, unreliable sources
//!
//! ```text
//! trend-sources/src/
//! ├── lib.rs          # Re-exports (this file)
//! ├── error.rs        # SourceError
//! ├── source.rs       # ToolSource trait, StaticSource, HTTP helpers
//! ├── github.rs       # Awesome-list markdown source
//! ├── huggingface.rs  # Hugging Face Spaces API source
//! ├── baseline.rs     # Baseline dataset
//! └── aggregator.rs   # SourceAggregator, dedupe
//! ```

#![allow(missing_docs)]

mod aggregator;
mod baseline;
mod error;
mod github;
mod huggingface;
mod source;

pub use aggregator::{
    AggregatorConfig, CollectReport, DEFAULT_FETCH_TIMEOUT, DEFAULT_MIN_LIVE_YIELD,
    SourceAggregator, SourceStatus, SourceYield, dedupe,
};
pub use baseline::{BASELINE_SOURCE, baseline_source, baseline_tools};
pub use error::SourceError;
pub use github::{
    AWESOME_LIST_SOURCE, DEFAULT_AWESOME_LIST_URL, GitHubAwesomeListSource, parse_awesome_list,
};
pub use huggingface::{
    CardData, DEFAULT_SPACES_URL, HuggingFaceSpacesSource, SPACES_SOURCE, SpaceEntry,
    space_to_tool, title_case,
};
pub use source::{MAX_DESCRIPTION_CHARS, StaticSource, ToolSource};
