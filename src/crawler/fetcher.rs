//! HTTP page fetcher
//!
//! The [`PageFetcher`] trait is the seam between the scheduler and the HTTP
//! transport; [`HttpFetcher`] is the reqwest-backed implementation. Every
//! request is bounded by the configured timeout, and failures are classified
//! into the small taxonomy the scheduler logs and abandons on.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors raised while fetching a page
///
/// All variants are task-local and non-fatal: the scheduler logs them with
/// the offending URL and abandons only that task.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Connection error for {url}: {message}")]
    Connection { url: String, message: String },
}

/// Retrieves raw content for a URL
///
/// Implementations must be safe to share across worker tasks.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the raw body for `url`, subject to a bounded timeout
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher with a fixed per-request timeout
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose client enforces `timeout` on every request
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total per-request timeout
    /// * `user_agent` - User agent string sent with every request
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_error(url, e))
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if let Some(status) = e.status() {
        FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        }
    } else {
        FetchError::Connection {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
