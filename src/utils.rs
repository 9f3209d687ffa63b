//! Small helpers for log formatting and output paths.

use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Shorten a string for a progress line.
///
/// Keeps the first `max` characters and appends `...` when anything was cut.
/// Counts characters, not bytes, so multi-byte titles are never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 50), "short");
/// assert_eq!(truncate_for_log("abcdef", 3), "abc...");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Create the parent directory of `path` if it does not exist yet.
///
/// A bare file name (no parent component) needs nothing.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).await?;
            debug!(parent = %parent.display(), "Output directory ready");
            Ok(())
        }
        _ => Ok(()),
    }
}
