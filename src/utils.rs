//! Utility functions for text normalization, link handling, edition naming,
//! and file system checks.

use chrono::{Local, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use unicode_normalization::UnicodeNormalization;
use url::Url;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Unicode NFKD normalization.
pub fn nfkd(s: &str) -> String {
    s.nfkd().collect()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Resolve `href` against `base`, dropping the fragment and, unless
/// `keep_query` is set, the query string.
pub fn resolve_link(base: &Url, href: &str, keep_query: bool) -> Result<Url, url::ParseError> {
    let mut url = base.join(href.trim())?;
    url.set_fragment(None);
    if !keep_query {
        url.set_query(None);
    }
    Ok(url)
}

/// Classify a wall-clock time into morning, afternoon, or evening.
///
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
pub fn time_of_day_at(tod: NaiveTime) -> &'static str {
    match tod.hour() {
        0..=7 => "morning",
        8..=15 => "afternoon",
        _ => "evening",
    }
}

/// Classify the current local time into an edition name.
#[instrument]
pub fn time_of_day() -> String {
    let tod = Local::now().time();
    let which = time_of_day_at(tod);
    tracing::debug!(%tod, %which, "Computed time_of_day");
    which.to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last char boundary before `max` bytes and
/// get `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // Hebrew letters are two bytes each in UTF-8.
        let result = truncate_for_log("שלום עולם", 3);
        assert!(result.starts_with("ש"));
        assert!(result.contains("bytes)"));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  12/03/24  \n 10:15 "), "12/03/24 10:15");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_nfkd_folds_nbsp() {
        assert_eq!(nfkd("10:15\u{a0}12.03.24"), "10:15 12.03.24");
    }

    #[test]
    fn test_resolve_link_drops_query_and_fragment() {
        let base = Url::parse("https://www.inn.co.il/").unwrap();
        let url = resolve_link(&base, "/News/News.aspx/123?utm=x#top", false).unwrap();
        assert_eq!(url.as_str(), "https://www.inn.co.il/News/News.aspx/123");
    }

    #[test]
    fn test_resolve_link_keeps_query_when_asked() {
        let base = Url::parse("https://www.0404.co.il/").unwrap();
        let url = resolve_link(&base, "?p=815123", true).unwrap();
        assert_eq!(url.as_str(), "https://www.0404.co.il/?p=815123");
    }

    #[test]
    fn test_resolve_link_absolute_href() {
        let base = Url::parse("https://www.maariv.co.il/").unwrap();
        let url = resolve_link(&base, "https://sport1.maariv.co.il/a/1", false).unwrap();
        assert_eq!(url.host_str(), Some("sport1.maariv.co.il"));
    }

    #[test]
    fn test_time_of_day_boundaries() {
        let at = |h, m| time_of_day_at(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(at(0, 0), "morning");
        assert_eq!(at(7, 59), "morning");
        assert_eq!(at(8, 0), "afternoon");
        assert_eq!(at(15, 59), "afternoon");
        assert_eq!(at(16, 0), "evening");
        assert_eq!(at(23, 59), "evening");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("editions/2024-03-12");
        let path = nested.to_str().unwrap();
        ensure_writable_dir(path).await.unwrap();
        assert!(nested.is_dir());
    }
}
