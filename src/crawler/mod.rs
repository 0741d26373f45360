//! Crawler module for cyclic page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded per-request timeout
//! - Plain-text and link extraction from HTML
//! - The frontier scheduler and its worker pool
//! - The cycle driver that repeats crawls on a fixed interval

mod driver;
mod extractor;
mod fetcher;
mod scheduler;

pub use driver::{CycleDriver, ShutdownHandle};
pub use extractor::{ContentExtractor, ExtractError, ExtractedContent, HtmlExtractor};
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use scheduler::{CrawlScheduler, CrawlTask, CycleStats, VisitedSet};
