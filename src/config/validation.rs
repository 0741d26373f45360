use crate::config::types::{Config, CrawlerConfig, SourcesConfig, TopicsConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawler_config(&config.crawler)?;
    validate_topics(&config.topics)?;
    validate_sources(&config.sources)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    if config.workers < 1 || config.workers > 100 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 100, got {}",
            config.workers
        )));
    }

    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.cycle_interval_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "cycle-interval-secs must be >= 1, got {}",
            config.cycle_interval_secs
        )));
    }

    if config.max_frontier < 1 {
        return Err(ConfigError::Validation(format!(
            "max-frontier must be >= 1, got {}",
            config.max_frontier
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the keyword set
fn validate_topics(topics: &TopicsConfig) -> ConfigResult<()> {
    if topics.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    for keyword in &topics.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the seed URL list
fn validate_sources(sources: &SourcesConfig) -> ConfigResult<()> {
    if sources.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &sources.seeds {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use an http or https scheme",
                seed
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OutputConfig;

    fn valid_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                max_depth: 2,
                workers: 8,
                fetch_timeout_secs: 10,
                cycle_interval_secs: 900,
                max_frontier: 100_000,
                user_agent: "newswatch/0.1".to_string(),
            },
            topics: TopicsConfig {
                keywords: vec!["cyber".to_string(), "ransomware".to_string()],
            },
            sources: SourcesConfig {
                seeds: vec!["https://example.com/news".to_string()],
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = valid_config();
        config.crawler.workers = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_too_many_workers_rejected() {
        let mut config = valid_config();
        config.crawler.workers = 101;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.crawler.fetch_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let mut config = valid_config();
        config.topics.keywords.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let mut config = valid_config();
        config.topics.keywords.push("   ".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_seeds_rejected() {
        let mut config = valid_config();
        config.sources.seeds.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let mut config = valid_config();
        config.sources.seeds.push("not-a-url".to_string());
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let mut config = valid_config();
        config.sources.seeds.push("ftp://example.com/feed".to_string());
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_http_seed_allowed() {
        let mut config = valid_config();
        config.sources.seeds.push("http://example.com/".to_string());
        assert!(validate(&config).is_ok());
    }
}
