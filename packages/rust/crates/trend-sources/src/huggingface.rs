//! Most-liked Hugging Face Spaces, via the public JSON API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use trend_types::{RawTool, truncate_chars};

use crate::error::SourceError;
use crate::source::{MAX_DESCRIPTION_CHARS, ToolSource, get_text, http_client};

pub const DEFAULT_SPACES_URL: &str =
    "https://huggingface.co/api/spaces?limit=30&sort=likes&direction=-1";
pub const SPACES_SOURCE: &str = "Hugging Face Spaces";

const MAX_NAME_CHARS: usize = 80;
const MIN_SHORT_DESCRIPTION_CHARS: usize = 10;
const DESCRIBED_TAGS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SpaceEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "cardData")]
    pub card_data: Option<CardData>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CardData {
    #[serde(default)]
    pub short_description: Option<String>,
}

pub struct HuggingFaceSpacesSource {
    client: Client,
    url: String,
}

impl HuggingFaceSpacesSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ToolSource for HuggingFaceSpacesSource {
    fn name(&self) -> &str {
        SPACES_SOURCE
    }

    async fn fetch(&self) -> Result<Vec<RawTool>, SourceError> {
        let body = get_text(&self.client, &self.url).await?;
        let spaces: Vec<SpaceEntry> =
            serde_json::from_str(&body).map_err(|error| SourceError::Decode(error.to_string()))?;
        Ok(spaces.iter().filter_map(space_to_tool).collect())
    }
}

/// `None` for entries without a usable id.
#[must_use]
pub fn space_to_tool(space: &SpaceEntry) -> Option<RawTool> {
    let slug = space.id.rsplit('/').next().unwrap_or_default();
    let name = truncate_chars(&title_case(&slug.replace('-', " ")), MAX_NAME_CHARS);
    if name.is_empty() {
        return None;
    }
    let short_description = space
        .card_data
        .as_ref()
        .and_then(|card| card.short_description.as_deref())
        .filter(|text| text.chars().count() >= MIN_SHORT_DESCRIPTION_CHARS);
    let description = match short_description {
        Some(text) => text.to_string(),
        None if space.tags.is_empty() => "AI tool hosted on Hugging Face Spaces.".to_string(),
        None => {
            let tags: Vec<&str> = space
                .tags
                .iter()
                .take(DESCRIBED_TAGS)
                .map(String::as_str)
                .collect();
            format!("AI tool on Hugging Face. Tags: {}", tags.join(", "))
        }
    };
    Some(RawTool::new(
        name,
        truncate_chars(&description, MAX_DESCRIPTION_CHARS),
        SPACES_SOURCE,
    ))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(ch);
            previous_alphabetic = false;
        }
    }
    out
}
