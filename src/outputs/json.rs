//! JSON output for the article index.
//!
//! The file is rewritten from scratch on every run; nothing from a previous
//! run is merged in.
//!
//! # Output Structure
//!
//! ```text
//! {
//!   "last_updated": "2024-01-05T09:30:00.123456",
//!   "count": 1,
//!   "articles": [
//!     { "title": "...", "url": "https://...", "date": "Jan 5, 2024", "author": "..." }
//!   ]
//! }
//! ```

use crate::error::ScrapeError;
use crate::models::ArticleIndex;
use crate::utils::ensure_parent_dir;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write an [`ArticleIndex`] as pretty-printed (2-space) JSON to `path`.
///
/// Missing parent directories are created first.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = index.count))]
pub async fn write_articles(index: &ArticleIndex, path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(index)?;

    if let Err(e) = ensure_parent_dir(path).await {
        error!(error = %e, "Failed to create output directory");
        return Err(e.into());
    }

    fs::write(path, json).await?;
    info!("Saved articles");
    Ok(())
}
