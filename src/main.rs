//! Newswatch main entry point
//!
//! Command-line interface for the cyclic topical web watcher.

use clap::Parser;
use newswatch::config::{load_config, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Newswatch: a cyclic topical web watcher
///
/// Newswatch crawls a fixed set of seed sites on a fixed interval, filters
/// discovered pages for topical relevance by keyword match on the URL, and
/// emits a heading and summary for each relevant page.
#[derive(Parser, Debug)]
#[command(name = "newswatch")]
#[command(version)]
#[command(about = "A cyclic topical web watcher", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run a single crawl cycle and exit
    #[arg(long, conflicts_with = "dry_run")]
    once: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_watch(config, cli.once).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("newswatch=info,warn"),
            1 => EnvFilter::new("newswatch=debug,info"),
            2 => EnvFilter::new("newswatch=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Newswatch Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Workers: {}", config.crawler.workers);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout_secs);
    println!("  Cycle interval: {}s", config.crawler.cycle_interval_secs);
    println!("  Frontier cap: {}", config.crawler.max_frontier);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nKeywords ({}):", config.topics.keywords.len());
    for keyword in &config.topics.keywords {
        println!("  - {}", keyword);
    }

    println!("\nSeed URLs ({}):", config.sources.seeds.len());
    for seed in &config.sources.seeds {
        println!("  - {}", seed);
    }

    match &config.output.jsonl_path {
        Some(path) => println!("\nOutput: JSON lines -> {}", path),
        None => println!("\nOutput: console"),
    }

    println!("\n✓ Configuration is valid");
}

/// Builds the crawl components and runs the cycle driver
async fn handle_watch(config: Config, once: bool) -> anyhow::Result<()> {
    let max_cycles = if once { Some(1) } else { None };
    let (driver, shutdown) = newswatch::build_driver(&config, max_cycles)?;

    let mut driver_task = tokio::spawn(driver.run());

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, draining in-flight cycle");
            shutdown.shutdown();
            driver_task.await?;
        }
        joined = &mut driver_task => {
            joined?;
        }
    }

    tracing::info!("Newswatch stopped");
    Ok(())
}
