//! Error types shared by every adapter and driver.
//!
//! Scrapers are brittle by nature: a site changes its markup and a selector
//! stops matching. Each failure mode gets its own variant so callers can tell
//! a network problem from a layout change.

use thiserror::Error;

/// Errors raised while fetching or parsing a news site.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("{site}: nothing matches `{selector}` on {url}")]
    MissingElement {
        site: String,
        selector: String,
        url: String,
    },

    #[error("Couldn't get category for {0}")]
    Category(String),

    #[error("Couldn't get times for {0}")]
    Times(String),

    #[error("Unparseable timestamp `{text}` (expected `{format}`)")]
    Timestamp {
        text: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feed parse error: {0}")]
    Feed(String),

    #[error("Blocked. Case number {0}")]
    Blocked(String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("{site} has no {kind} feed")]
    NoFeed { site: String, kind: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_message_names_url() {
        let err = ScrapeError::Category("https://www.ynet.co.il/news/article/abc".to_string());
        assert_eq!(
            err.to_string(),
            "Couldn't get category for https://www.ynet.co.il/news/article/abc"
        );
    }

    #[test]
    fn test_blocked_message() {
        let err = ScrapeError::Blocked("12345".to_string());
        assert_eq!(err.to_string(), "Blocked. Case number 12345");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ScrapeError = parse.unwrap_err().into();
        assert!(matches!(err, ScrapeError::Json(_)));
    }
}
