//! Normalized shapes every adapter produces.
//!
//! - [`Headline`]: a homepage link with its display text
//! - [`ArticleMeta`]: what an article page says about itself
//! - [`Story`] / [`FrontPage`]: a site's homepage, optionally enriched
//! - [`Edition`]: every front page scraped in one run
//! - [`FeedItem`]: a single RSS entry
//!
//! Timestamps are the site's local wall-clock time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A homepage link as extracted from the site's markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Headline {
    pub headline: String,
    /// Absolute article URL.
    pub url: String,
}

/// Metadata resolved from an article page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleMeta {
    pub category: Option<String>,
    pub published: Option<NaiveDateTime>,
    pub updated: Option<NaiveDateTime>,
    pub tags: Vec<String>,
    pub premium: bool,
}

/// A homepage story, with article metadata when it was requested and could
/// be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Story {
    pub headline: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ArticleMeta>,
}

impl From<Headline> for Story {
    fn from(h: Headline) -> Self {
        Story {
            headline: h.headline,
            url: h.url,
            meta: None,
        }
    }
}

/// One site's homepage at the time it was fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontPage {
    /// Adapter name, e.g. `"ynet"`.
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub top_story: Story,
    pub substories: Vec<Story>,
}

impl FrontPage {
    /// Top story followed by substories.
    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        std::iter::once(&self.top_story).chain(self.substories.iter())
    }

    pub fn stories_mut(&mut self) -> impl Iterator<Item = &mut Story> {
        std::iter::once(&mut self.top_story).chain(self.substories.iter_mut())
    }
}

/// Every front page scraped in a single run.
///
/// The `time_of_day` field names the edition:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Deserialize, Serialize)]
pub struct Edition {
    /// `YYYY-MM-DD`
    pub local_date: String,
    pub time_of_day: String,
    pub local_time: String,
    pub front_pages: Vec<FrontPage>,
}

/// A single entry from a source's RSS feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedItem {
    pub guid: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
    pub published: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
    pub tags: Vec<String>,
}
