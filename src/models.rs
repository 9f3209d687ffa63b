//! Data models for extracted articles and the saved index.
//!
//! - [`ArticleRecord`]: one post attributed to the target author
//! - [`ArticleIndex`]: the document written to `articles.json`
//!
//! Field order matches the order keys appear in the JSON output.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A post link attributed to the target author.
///
/// Created once during an extraction pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Cleaned headline with the author name and any date removed.
    pub title: String,
    /// Absolute post URL. Unique within one extraction result.
    pub url: String,
    /// First `Mon D, YYYY` date found in the article's container, if any.
    pub date: Option<String>,
    /// The author the extraction was run for.
    pub author: String,
}

/// The saved result of one run.
///
/// `count` always equals `articles.len()`; build it with [`ArticleIndex::stamped`].
#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleIndex {
    /// Local save time, ISO-8601 with microseconds and no offset.
    pub last_updated: String,
    pub count: usize,
    pub articles: Vec<ArticleRecord>,
}

impl ArticleIndex {
    /// Wrap `articles` with a count and the current local timestamp.
    pub fn stamped(articles: Vec<ArticleRecord>) -> Self {
        Self {
            last_updated: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            count: articles.len(),
            articles,
        }
    }
}
