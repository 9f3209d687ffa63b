//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line flags (or their environment variables). A YAML file only needs
//! the keys it wants to change:
//!
//! ```yaml
//! url: https://newsletter.blockspacemedia.com/
//! author: Charlie Spears
//! output: data/articles.json
//! timeout_secs: 30
//! user_agent: Mozilla/5.0 (compatible; newsletter_scraper)
//! ```

use crate::cli::Cli;
use crate::error::ScrapeError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const DEFAULT_URL: &str = "https://newsletter.blockspacemedia.com/";
pub const DEFAULT_AUTHOR: &str = "Charlie Spears";
pub const DEFAULT_OUTPUT: &str = "articles.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Index page to fetch. Root-relative post links resolve against its origin.
    pub url: String,
    /// Author to attribute posts to, matched literally.
    pub author: String,
    pub output: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Read a YAML config file. Missing keys keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn from_yaml_file(path: &Path) -> Result<Self, ScrapeError> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&raw)?;
        info!("Loaded config file");
        Ok(config)
    }

    /// Build the effective config from the CLI, consulting `--config` if given.
    pub fn resolve(cli: &Cli) -> Result<Self, ScrapeError> {
        let base = match cli.config.as_deref() {
            Some(path) => Self::from_yaml_file(Path::new(path))?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli);
        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.url {
            self.url = url.clone();
        }
        if let Some(author) = &cli.author {
            self.author = author.clone();
        }
        if let Some(output) = &cli.output {
            self.output = PathBuf::from(output);
        }
        if let Some(timeout_secs) = cli.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = &cli.user_agent {
            self.user_agent = user_agent.clone();
        }
        self
    }

    /// An empty author would match every container on the page.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.author.trim().is_empty() {
            return Err(ScrapeError::InvalidConfig("author must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ScrapeError::InvalidConfig("timeout_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::resolve(&Cli::default()).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.author, "Charlie Spears");
        assert_eq!(config.output, PathBuf::from("articles.json"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_yaml_partial_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scraper.yaml");
        fs::write(&path, "author: Jane Doe\ntimeout_secs: 10\n").unwrap();

        let config = ScraperConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.author, "Jane Doe");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn test_cli_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scraper.yaml");
        fs::write(&path, "author: Jane Doe\noutput: from-file.json\n").unwrap();

        let cli = Cli {
            config: Some(path.to_string_lossy().into_owned()),
            author: Some("John Roe".to_string()),
            ..Cli::default()
        };
        let config = ScraperConfig::resolve(&cli).unwrap();
        assert_eq!(config.author, "John Roe");
        assert_eq!(config.output, PathBuf::from("from-file.json"));
    }

    #[test]
    fn test_user_agent_from_file_and_cli() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scraper.yaml");
        fs::write(&path, "user_agent: file-agent/2.0\n").unwrap();

        let from_file = ScraperConfig::from_yaml_file(&path).unwrap();
        assert_eq!(from_file.user_agent, "file-agent/2.0");

        let cli = Cli {
            config: Some(path.to_string_lossy().into_owned()),
            user_agent: Some("cli-agent/3.0".to_string()),
            ..Cli::default()
        };
        assert_eq!(ScraperConfig::resolve(&cli).unwrap().user_agent, "cli-agent/3.0");
        assert_eq!(
            ScraperConfig::resolve(&Cli::default()).unwrap().user_agent,
            DEFAULT_USER_AGENT
        );
    }

    #[test]
    fn test_empty_author_rejected() {
        let cli = Cli {
            author: Some("   ".to_string()),
            ..Cli::default()
        };
        let err = ScraperConfig::resolve(&cli).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("scraper.yaml");
        fs::write(&path, "timeout_secs: [not, a, number]\n").unwrap();

        let err = ScraperConfig::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ScrapeError::ConfigFile(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScraperConfig::from_yaml_file(Path::new("/nonexistent/scraper.yaml")).unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }
}
