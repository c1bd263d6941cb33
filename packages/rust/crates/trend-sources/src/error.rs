//! Error types for source fetches.
//!
//! A `SourceError` never leaves the aggregator: the failing source contributes zero records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Request could not be sent or the body could not be read.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// Body was not in the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}
