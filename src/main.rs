//! # Newsletter Scraper
//!
//! Collects the posts a single author published on a newsletter index page
//! and saves them to a JSON file.
//!
//! ## Usage
//!
//! ```sh
//! newsletter_scraper
//! newsletter_scraper --author "Jane Doe" -o ./data/articles.json
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: download the index page once (30 s timeout, no retry)
//! 2. **Extract**: attribute `/p/` post links to the author by ancestor text
//! 3. **Save**: write `articles.json` with a timestamp and count
//!
//! A failed fetch or extraction is logged and an empty result is saved; the
//! process still exits successfully so an unattended job always leaves a file.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use config::ScraperConfig;
use error::ScrapeError;
use models::ArticleIndex;
use outputs::json;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsletter_scraper starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match ScraperConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let count = run(&config).await?;

    let elapsed = start_time.elapsed();
    info!(count, millis = elapsed.as_millis() as u64, "Done");
    Ok(())
}

/// Fetch, extract and save. Returns the number of articles written.
///
/// Scraping errors are recovered here by saving an empty index. Only a failure
/// to write the output file is returned.
async fn run(config: &ScraperConfig) -> Result<usize, ScrapeError> {
    let articles = match scrapers::newsletter::scrape_articles(config).await {
        Ok(articles) => articles,
        Err(e) if e.is_fetch() => {
            error!(error = %e, url = %config.url, "Error fetching page");
            Vec::new()
        }
        Err(e) => {
            error!(error = ?e, url = %config.url, "Unexpected error while scraping");
            Vec::new()
        }
    };

    let index = ArticleIndex::stamped(articles);
    json::write_articles(&index, &config.output).await?;
    info!(path = %config.output.display(), count = index.count, "Saved article index");
    Ok(index.count)
}
