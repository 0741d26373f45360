//! Result sink trait and record types

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while publishing a record
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One summarized relevant page
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRecord {
    /// The page URL
    pub url: String,

    /// Short topical heading
    pub heading: String,

    /// Extractive summary of the page text
    pub body: String,

    /// When the record was produced
    pub emitted_at: DateTime<Utc>,
}

/// Consumes summary records as workers produce them
///
/// Implementations must be safe to call from concurrent worker tasks.
pub trait ResultSink: Send + Sync {
    /// Publishes one record; failures are logged by the caller and do not
    /// stop the crawl
    fn publish(&self, record: &SummaryRecord) -> Result<(), SinkError>;
}
