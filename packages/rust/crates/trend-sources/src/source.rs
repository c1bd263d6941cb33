use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use trend_types::RawTool;

use crate::error::SourceError;

/// Description length kept from any live source.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// One independent origin of tool listings.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// Label used in logs and in each record's `source` field.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<RawTool>, SourceError>;
}

/// Fixed list of records; never fails.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    tools: Vec<RawTool>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, tools: Vec<RawTool>) -> Self {
        Self {
            name: name.into(),
            tools,
        }
    }
}

#[async_trait]
impl ToolSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<RawTool>, SourceError> {
        Ok(self.tools.clone())
    }
}

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent("Mozilla/5.0 (compatible; tool-trends)")
        .build()
        .unwrap_or_default()
}

/// GET `url` and return the body, mapping non-success statuses to [`SourceError::Status`].
pub(crate) async fn get_text(client: &Client, url: &str) -> Result<String, SourceError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}
