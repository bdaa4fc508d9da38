//! HTTP utilities for stats.nba.com communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Headers the stats service expects before it will answer.
///
/// Requests without a browser-like agent and the `x-nba-stats-*` pair tend to
/// hang until the timeout fires.
pub fn stats_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_str("stats")?,
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_str("true")?,
    );
    Ok(h)
}
