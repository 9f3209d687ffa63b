//! Newsletter index page fetcher.
//!
//! Downloads the configured index page once, with browser-like headers and a
//! fixed timeout, and hands the HTML to [`extract_articles`]. There is no
//! retry: a failed request surfaces as [`ScrapeError::Fetch`].

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::models::ArticleRecord;
use crate::scrapers::extract::extract_articles;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{info, instrument};
use url::Url;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

/// Fetch the index page and extract the configured author's posts.
///
/// The origin used for relative links is derived from `config.url` before any
/// request is made, so a malformed URL fails without touching the network.
#[instrument(level = "info", skip_all, fields(url = %config.url, author = %config.author))]
pub async fn scrape_articles(config: &ScraperConfig) -> Result<Vec<ArticleRecord>, ScrapeError> {
    let origin = base_origin(&config.url)?;
    let client = build_client(config)?;

    info!("Scraping newsletter index");
    let html = fetch_index_page(&client, &config.url).await?;
    info!(bytes = html.len(), "Fetched index page");

    Ok(extract_articles(&html, &config.author, &origin))
}

/// HTTP client carrying the browser-like headers and the request timeout.
pub fn build_client(config: &ScraperConfig) -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(config.timeout())
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_index_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Scheme and host (plus any non-default port) of `url`, without a trailing slash.
pub fn base_origin(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url)?;
    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(ScrapeError::InvalidConfig(format!("{url} has no origin")));
    }
    Ok(origin.ascii_serialization())
}
