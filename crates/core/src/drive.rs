//! Google Drive share-link rewriting.
//!
//! Customers paste Drive "view" links, which serve an HTML viewer instead of
//! image bytes. The proxy rewrites them to the direct-download form before
//! fetching.

use std::sync::LazyLock;

use regex::Regex;

/// Host fragment that marks a URL as a Google Drive link.
pub const DRIVE_HOST: &str = "drive.google.com";

/// File id inside a path-style link: `.../file/d/<id>/view`.
static PATH_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/(.+?)(?:/|$|\?)").expect("valid regex"));

/// File id inside a query-style link: `...?id=<id>` or `...&id=<id>`.
static QUERY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=(.+?)(?:&|$)").expect("valid regex"));

/// Extract the Drive file id from a share link, if present.
///
/// The path form (`/d/<id>`) takes precedence over the query form.
pub fn extract_file_id(url: &str) -> Option<&str> {
    PATH_ID_RE
        .captures(url)
        .or_else(|| QUERY_ID_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite a Drive share link to its direct-view URL.
///
/// Non-Drive URLs, and Drive URLs without a recognizable file id, are
/// returned unchanged.
pub fn direct_image_url(url: &str) -> String {
    if !url.contains(DRIVE_HOST) {
        return url.to_string();
    }
    match extract_file_id(url) {
        Some(id) => format!("https://drive.google.com/uc?export=view&id={id}"),
        None => url.to_string(),
    }
}
