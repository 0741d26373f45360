//! Configuration loading and validation
//!
//! Configuration is read from a TOML file once at startup, validated, and
//! never mutated afterwards. Seed URLs, the keyword set, and all crawl
//! tunables live here.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SourcesConfig, TopicsConfig};
pub use validation::validate;
