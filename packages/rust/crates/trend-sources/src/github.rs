//! Curated "awesome" list published as raw markdown.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use trend_types::{RawTool, truncate_chars};

use crate::error::SourceError;
use crate::source::{MAX_DESCRIPTION_CHARS, ToolSource, get_text, http_client};

pub const DEFAULT_AWESOME_LIST_URL: &str =
    "https://raw.githubusercontent.com/mahseema/awesome-ai-tools/main/README.md";
pub const AWESOME_LIST_SOURCE: &str = "GitHub Awesome AI Tools";

const MAX_RECORDS: usize = 40;
const MIN_DESCRIPTION_CHARS: usize = 15;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

/// `- [Name](url) - description`, also `*` bullets and `–` / `:` separators.
static LIST_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"^\s*[-*]\s+\[([^\]]+)\]\(([^)]+)\)\s*[-–:]\s*(.+)"));

pub struct GitHubAwesomeListSource {
    client: Client,
    url: String,
}

impl GitHubAwesomeListSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ToolSource for GitHubAwesomeListSource {
    fn name(&self) -> &str {
        AWESOME_LIST_SOURCE
    }

    async fn fetch(&self) -> Result<Vec<RawTool>, SourceError> {
        let markdown = get_text(&self.client, &self.url).await?;
        Ok(parse_awesome_list(&markdown))
    }
}

/// Extract list entries; names of 3..=59 chars, descriptions over 15 chars, first 40 kept.
#[must_use]
pub fn parse_awesome_list(markdown: &str) -> Vec<RawTool> {
    markdown
        .lines()
        .filter_map(|line| {
            let captures = LIST_ENTRY.captures(line)?;
            let name = captures.get(1)?.as_str().trim();
            let description = captures.get(3)?.as_str().trim();
            let name_chars = name.chars().count();
            let keep = name_chars > 2
                && name_chars < 60
                && description.chars().count() > MIN_DESCRIPTION_CHARS;
            keep.then(|| {
                RawTool::new(
                    name,
                    truncate_chars(description, MAX_DESCRIPTION_CHARS),
                    AWESOME_LIST_SOURCE,
                )
            })
        })
        .take(MAX_RECORDS)
        .collect()
}
