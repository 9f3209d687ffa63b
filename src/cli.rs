//! Command-line interface definitions for the newsletter scraper.
//!
//! Every option is optional: running the binary with no arguments scrapes the
//! built-in newsletter for the built-in author. Each flag can also be supplied
//! through an environment variable.

use clap::Parser;

/// Command-line arguments for the newsletter scraper.
///
/// Values given here override the same keys from the `--config` file, which in
/// turn override the defaults in [`crate::config::ScraperConfig`].
///
/// # Examples
///
/// ```sh
/// # Defaults: fetch the index, write ./articles.json
/// newsletter_scraper
///
/// # Another author, output elsewhere
/// newsletter_scraper --author "Jane Doe" -o ./data/jane.json
///
/// # Settings from a YAML file
/// newsletter_scraper -c ./scraper.yaml
/// ```
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "SCRAPER_CONFIG")]
    pub config: Option<String>,

    /// Newsletter index page to fetch
    #[arg(short, long, env = "NEWSLETTER_URL")]
    pub url: Option<String>,

    /// Author whose posts should be collected
    #[arg(short, long, env = "NEWSLETTER_AUTHOR")]
    pub author: Option<String>,

    /// Path of the JSON file to write
    #[arg(short, long, env = "ARTICLES_OUTPUT")]
    pub output: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with the request
    #[arg(long, env = "FETCH_USER_AGENT")]
    pub user_agent: Option<String>,
}
