//! Output writers.
//!
//! - [`json`]: writes the [`crate::models::ArticleIndex`] to `articles.json`
//!   (or the configured path)

pub mod json;
