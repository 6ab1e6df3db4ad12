//! Scraping helpers for adventofcode.com pages

use regex::Regex;
use std::sync::LazyLock;

static USER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(anonymous user #(\d+)\)").expect("user id pattern is valid")
});

/// Pull the numeric user id out of the settings page
pub(crate) fn extract_user_id(html: &str) -> Option<u64> {
    USER_ID
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
