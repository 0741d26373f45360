//! Newswatch: a cyclic topical web watcher
//!
//! This crate implements a crawler that repeatedly walks a fixed set of seed
//! sites, filters discovered pages for topical relevance by keyword match on
//! the URL, and emits a short heading and summary for each relevant page.

pub mod config;
pub mod crawler;
pub mod output;
pub mod relevance;
pub mod summarize;

use crate::crawler::{HtmlExtractor, HttpFetcher};
use crate::output::{ConsoleSink, JsonlSink};
use crate::summarize::ExtractiveSummarizer;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Main error type for Newswatch operations
#[derive(Debug, Error)]
pub enum NewswatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sink error: {0}")]
    Sink(#[from] output::SinkError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Newswatch operations
pub type Result<T> = std::result::Result<T, NewswatchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlScheduler, CycleDriver, CycleStats, ShutdownHandle};
pub use output::{ResultSink, SummaryRecord};
pub use relevance::KeywordFilter;

/// Assembles a [`CycleDriver`] and its shutdown handle from configuration
///
/// Wires the reqwest fetcher, HTML extractor, extractive summarizer and
/// relevance filter together, choosing the JSON-lines sink when an output
/// path is configured and the console sink otherwise.
pub fn build_driver(
    config: &Config,
    max_cycles: Option<u64>,
) -> Result<(CycleDriver, ShutdownHandle)> {
    let seeds = config.parsed_seeds()?;
    let filter = Arc::new(KeywordFilter::new(&config.topics.keywords));
    tracing::info!(
        seeds = seeds.len(),
        keywords = filter.len(),
        "building crawl driver"
    );

    let fetcher = Arc::new(HttpFetcher::new(
        Duration::from_secs(config.crawler.fetch_timeout_secs),
        &config.crawler.user_agent,
    )?);
    let extractor = Arc::new(HtmlExtractor::new());
    let summarizer = Arc::new(ExtractiveSummarizer::default());

    let sink: Arc<dyn ResultSink> = match &config.output.jsonl_path {
        Some(path) => {
            tracing::info!("Appending summary records to {}", path);
            Arc::new(JsonlSink::open(Path::new(path))?)
        }
        None => Arc::new(ConsoleSink::new()),
    };

    let scheduler = CrawlScheduler::new(
        fetcher,
        extractor,
        summarizer,
        sink,
        filter,
        config.crawler.workers,
        config.crawler.max_frontier,
    );

    Ok(CycleDriver::new(
        scheduler,
        seeds,
        config.crawler.max_depth,
        Duration::from_secs(config.crawler.cycle_interval_secs),
        max_cycles,
    ))
}
