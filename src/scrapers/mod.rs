//! Fetching the newsletter index and attributing its posts.
//!
//! - [`newsletter`]: downloads the index page (the only network call)
//! - [`extract`]: finds post links and attributes them to an author
//!
//! Extraction is a pure function of the HTML, the author and the site origin,
//! so it is tested without any network access.

pub mod extract;
pub mod newsletter;
