use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ClassificationResult;

/// A tool listing as collected from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTool {
    pub name: String,
    pub description: String,
    pub source: String,
}

impl RawTool {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: source.into(),
        }
    }

    /// Dedup key: trimmed, lowercased name.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// Raw listing plus its classification; the unit persisted in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTool {
    pub name: String,
    pub description: String,
    pub source: String,
    #[serde(flatten)]
    pub classification: ClassificationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl EnrichedTool {
    #[must_use]
    pub fn from_parts(raw: RawTool, classification: ClassificationResult) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            source: raw.source,
            classification,
            scraped_at: None,
        }
    }

    /// Summary when present, otherwise the raw description.
    #[must_use]
    pub fn summary_or_description(&self) -> &str {
        if self.classification.summary.trim().is_empty() {
            &self.description
        } else {
            &self.classification.summary
        }
    }
}
