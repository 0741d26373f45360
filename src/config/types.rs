use crate::{ConfigError, ConfigResult};
use serde::Deserialize;
use url::Url;

/// Main configuration structure for Newswatch
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub topics: TopicsConfig,
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from seed URLs (inclusive)
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Number of concurrent worker tasks draining the frontier
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-request fetch timeout in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Pause between crawl cycles in seconds
    #[serde(rename = "cycle-interval-secs", default = "default_cycle_interval")]
    pub cycle_interval_secs: u64,

    /// Cap on outstanding frontier tasks within one cycle; links discovered
    /// beyond the cap are dropped
    #[serde(rename = "max-frontier", default = "default_max_frontier")]
    pub max_frontier: usize,

    /// User agent string sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Keyword set used for the relevance filter
#[derive(Debug, Clone, Deserialize)]
pub struct TopicsConfig {
    /// Keywords matched case-insensitively against discovered URLs
    pub keywords: Vec<String>,
}

/// Seed URLs that start every crawl cycle
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Absolute http/https URLs, crawled in every cycle at depth 0
    pub seeds: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// When set, summary records are appended to this JSON-lines file
    /// instead of being printed to stdout
    #[serde(rename = "jsonl-path")]
    pub jsonl_path: Option<String>,
}

impl Config {
    /// Parses the configured seed strings into URLs
    ///
    /// Validation has already checked each seed, so this only fails on a
    /// config that bypassed [`validate`](crate::config::validate).
    pub fn parsed_seeds(&self) -> ConfigResult<Vec<Url>> {
        self.sources
            .seeds
            .iter()
            .map(|seed| {
                Url::parse(seed)
                    .map_err(|e| ConfigError::InvalidUrl(format!("seed '{}': {}", seed, e)))
            })
            .collect()
    }
}

fn default_max_depth() -> u32 {
    2
}

fn default_workers() -> usize {
    8
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_cycle_interval() -> u64 {
    900
}

fn default_max_frontier() -> usize {
    100_000
}

fn default_user_agent() -> String {
    concat!("newswatch/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_seeds() {
        let config = Config {
            crawler: CrawlerConfig {
                max_depth: 2,
                workers: 4,
                fetch_timeout_secs: 10,
                cycle_interval_secs: 900,
                max_frontier: 1000,
                user_agent: "test".to_string(),
            },
            topics: TopicsConfig {
                keywords: vec!["cyber".to_string()],
            },
            sources: SourcesConfig {
                seeds: vec!["https://example.com/news".to_string()],
            },
            output: OutputConfig::default(),
        };

        let seeds = config.parsed_seeds().unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].as_str(), "https://example.com/news");
    }

    #[test]
    fn test_parsed_seeds_rejects_garbage() {
        let config = Config {
            crawler: CrawlerConfig {
                max_depth: 2,
                workers: 4,
                fetch_timeout_secs: 10,
                cycle_interval_secs: 900,
                max_frontier: 1000,
                user_agent: "test".to_string(),
            },
            topics: TopicsConfig {
                keywords: vec!["cyber".to_string()],
            },
            sources: SourcesConfig {
                seeds: vec!["not a url".to_string()],
            },
            output: OutputConfig::default(),
        };

        assert!(config.parsed_seeds().is_err());
    }
}
