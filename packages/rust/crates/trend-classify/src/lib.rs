//! trend-classify - Keyword scoring, hybrid classification and task ranking
//!
//! ```text
//! trend-classify/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── keywords.rs  # Static category -> keywords table
//! ├── scorer.rs    # score / score_task
//! ├── hybrid.rs    # HybridClassifier, ClassificationPath
//! ├── ranker.rs    # RecommendationRanker
//! ├── trends.rs    # category_counts, trend_summary
//! └── prompts.rs   # Prompt builders
//! ```
//!
//! The external service is an injected [`trend_llm::LlmService`]; an absent service
//! and a failing one take the same keyword fallback paths.

#![allow(missing_docs)]

mod hybrid;
mod keywords;
mod prompts;
mod ranker;
mod scorer;
mod trends;

pub use hybrid::{ClassificationPath, HIGH_CONFIDENCE, HybridClassifier, LOW_CONFIDENCE};
pub use keywords::{KEYWORD_RULES, keywords_for};
pub use ranker::{PRESENTED_TOOLS, RecommendationRanker, TOP_K, synthesize};
pub use scorer::{KeywordScore, score, score_task};
pub use trends::{category_counts, fallback_trend_summary, trend_summary};
