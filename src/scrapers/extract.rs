//! Author attribution for post links on a newsletter index page.
//!
//! The index page has no structured byline markup we can rely on, so
//! attribution is a text heuristic:
//!
//! 1. Every `<a>` whose `href` contains [`POST_PATH_MARKER`] is a candidate.
//! 2. From each candidate we walk up at most [`MAX_ANCESTOR_DEPTH`] ancestors.
//!    The first ancestor whose text contains the author name is the article
//!    container. No match means the link is not the author's.
//! 3. The title comes from the first `h1`-`h4` inside the link (or the link
//!    text), with the author name and any date stripped out.
//! 4. The date is the first `Mon D, YYYY` match in the container text.
//!
//! Duplicates are removed twice: by raw `href` while scanning, and by
//! normalized URL afterwards. The two passes disagree when one post is linked
//! with both a relative and an absolute `href`; the first record wins.

use crate::models::ArticleRecord;
use crate::utils::truncate_for_log;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info};

/// Path segment that marks a post permalink on Beehiiv newsletters.
pub const POST_PATH_MARKER: &str = "/p/";

/// Levels above a link searched for the author name.
pub const MAX_ANCESTOR_DEPTH: usize = 10;

/// Titles shorter than this (in characters) once the author and date are removed are dropped.
pub const MIN_TITLE_CHARS: usize = 5;

// Only trimmed from an edge where the author name or a date was cut away.
const TITLE_SEPARATORS: &[char] = &[':', '|', '-', '–', '—', '·', '•', ','];

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{1,2},?\s+\d{4}")
        .expect("Invalid date pattern")
});

static POST_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!(r#"a[href*="{POST_PATH_MARKER}"]"#)).expect("Invalid selector")
});

static HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4").expect("Invalid selector"));

/// Extract the posts attributed to `author` from an index page.
///
/// `base_origin` (scheme and host, e.g. `https://newsletter.example.com`) is
/// prefixed onto root-relative links. Never fails: malformed markup is parsed
/// best-effort and an empty document yields an empty list.
///
/// Records come back in the order their links first appear in the document.
pub fn extract_articles(html: &str, author: &str, base_origin: &str) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let links: Vec<ElementRef<'_>> = document.select(&POST_LINK).collect();
    info!(count = links.len(), "Found article links");

    let origin = base_origin.trim_end_matches('/');
    let mut seen_hrefs: HashSet<&str> = HashSet::new();
    let mut articles = Vec::new();

    for link in links {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if seen_hrefs.contains(href) {
            continue;
        }

        let Some(container_text) = find_container_text(link, author) else {
            continue;
        };

        let raw_title = link_title(link);
        let stripped = strip_author_and_date(&raw_title, author);
        if stripped.chars().count() < MIN_TITLE_CHARS {
            debug!(href, title = %stripped, "Title too short after cleanup; skipping link");
            continue;
        }
        let title = trim_dangling_separators(&raw_title, &stripped, author).to_string();
        if title.is_empty() {
            debug!(href, "Title is only separators; skipping link");
            continue;
        }

        let date = DATE_PATTERN
            .find(&container_text)
            .map(|m| m.as_str().to_string());

        info!(title = %truncate_for_log(&title, 50), "Found article");
        articles.push(ArticleRecord {
            title,
            url: normalize_url(href, origin),
            date,
            author: author.to_string(),
        });
        seen_hrefs.insert(href);
    }

    let unique: Vec<ArticleRecord> = articles
        .into_iter()
        .unique_by(|article| article.url.clone())
        .collect();

    info!(count = unique.len(), author, "Found articles by author");
    unique
}

/// Text of the nearest ancestor (within [`MAX_ANCESTOR_DEPTH`]) that mentions `author`.
fn find_container_text(link: ElementRef<'_>, author: &str) -> Option<String> {
    let mut current = link;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        current = current.parent().and_then(ElementRef::wrap)?;
        let text: String = current.text().collect();
        if text.contains(author) {
            return Some(text);
        }
    }
    None
}

fn link_title(link: ElementRef<'_>) -> String {
    let source = link.select(&HEADING).next().unwrap_or(link);
    stripped_text(source)
}

/// Concatenate the element's text nodes, each trimmed, skipping blank ones.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Remove every occurrence of the author name and of a date, then trim whitespace.
fn strip_author_and_date(raw: &str, author: &str) -> String {
    let without_author = raw.replace(author, "");
    DATE_PATTERN
        .replace_all(without_author.trim(), "")
        .trim()
        .to_string()
}

/// Drop separators left at an edge of `stripped` whose author name or date was removed.
///
/// `"Charlie Spears: Big Report Jan 5, 2024"` becomes `"Big Report"`, while a
/// title with nothing removed at an edge, like `"-5% Hashrate Drop"`, keeps its
/// punctuation.
fn trim_dangling_separators<'a>(raw: &str, stripped: &'a str, author: &str) -> &'a str {
    let raw = raw.trim();
    let without_author = raw.replace(author, "");
    let without_author = without_author.trim();

    let led_by_removal = raw.starts_with(author)
        || DATE_PATTERN
            .find(without_author)
            .is_some_and(|m| m.start() == 0);
    let trailed_by_removal = raw.ends_with(author)
        || DATE_PATTERN
            .find_iter(without_author)
            .last()
            .is_some_and(|m| m.end() == without_author.len());

    let mut title = stripped;
    if led_by_removal {
        title = title.trim_start_matches(is_title_separator);
    }
    if trailed_by_removal {
        title = title.trim_end_matches(is_title_separator);
    }
    title
}

fn is_title_separator(c: char) -> bool {
    c.is_whitespace() || TITLE_SEPARATORS.contains(&c)
}

fn normalize_url(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        href.to_string()
    }
}
