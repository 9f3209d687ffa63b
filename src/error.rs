//! Error types for the scraper.
//!
//! Only [`ScrapeError::Fetch`] is expected in normal operation. The pipeline
//! in `main` recovers from every error raised while scraping (fetch or
//! otherwise) by saving an empty result; errors raised while loading
//! configuration or writing the output file end the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection failure, timeout, non-2xx status or unreadable body.
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize articles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to parse config file: {0}")]
    ConfigFile(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ScrapeError {
    /// `true` for network-level failures, as opposed to anything unexpected.
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fetch_only_for_network_errors() {
        let parse = url::Url::parse("not a url").unwrap_err();
        assert!(!ScrapeError::from(parse).is_fetch());
        assert!(!ScrapeError::InvalidConfig("author".into()).is_fetch());
    }

    #[test]
    fn test_display_includes_cause() {
        let err = ScrapeError::InvalidConfig("author must not be empty".into());
        assert_eq!(err.to_string(), "invalid config: author must not be empty");
    }
}
