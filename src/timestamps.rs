//! Timestamp parsing for article pages and feeds.
//!
//! Every timestamp is reduced to the site's local wall-clock time
//! ([`NaiveDateTime`]). Offset-aware inputs keep their local reading; naive
//! inputs are taken as-is.

use crate::error::{Result, ScrapeError};
use crate::utils::collapse_whitespace;
use chrono::{DateTime, NaiveDateTime};

/// Parse `text` with a strftime `format`.
///
/// Whitespace runs in the input are collapsed first. Formats carrying `%z`
/// are parsed offset-aware; a trailing ` %Z` zone name (`GMT`, `IST`) is
/// dropped from both input and format, since zone abbreviations carry no
/// usable offset.
pub fn parse_timestamp(text: &str, format: &str) -> Result<NaiveDateTime> {
    let text = collapse_whitespace(text);
    let err = |source| ScrapeError::Timestamp {
        text: text.clone(),
        format: format.to_string(),
        source,
    };

    if let Some(base_format) = format.strip_suffix(" %Z") {
        let base_text = match text.rsplit_once(' ') {
            Some((head, zone)) if zone.chars().all(|c| c.is_ascii_alphabetic()) => head,
            _ => text.as_str(),
        };
        return NaiveDateTime::parse_from_str(base_text, base_format).map_err(err);
    }

    if format.contains("%z") {
        return DateTime::parse_from_str(&text, format)
            .map(|dt| dt.naive_local())
            .map_err(err);
    }

    NaiveDateTime::parse_from_str(&text, format).map_err(err)
}

/// Parse an ISO-8601 timestamp, with or without an offset and fractional
/// seconds.
pub fn parse_iso_timestamp(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").map_err(|source| {
        ScrapeError::Timestamp {
            text: text.to_string(),
            format: "ISO-8601".to_string(),
            source,
        }
    })
}
