//! Summarization pipeline
//!
//! Turns extracted page text into a short heading and summary. The
//! [`Summarizer`] trait is the seam for a real NLP pipeline; the default
//! [`ExtractiveSummarizer`] approximates one with term-frequency scoring.

mod extractive;

pub use extractive::ExtractiveSummarizer;

use thiserror::Error;

/// Errors raised while summarizing extracted text
///
/// Treated by the scheduler as "no summary": the result is dropped silently
/// and the crawl continues.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No text to summarize")]
    EmptyText,

    #[error("Text too short to summarize")]
    TooShort,
}

/// A heading and summary produced for one relevant page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub heading: String,
    pub body: String,
}

/// Produces a heading and summary from plain text
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> Result<Summary, SummarizeError>;
}
