//! Maariv, [maariv.co.il](https://www.maariv.co.il/).
//!
//! Article times come from the page's JSON-LD blocks rather than the
//! visible markup. The homepage's top story has no headline of its own, so
//! it is read from the article page.

use crate::error::{Result, ScrapeError};
use crate::html::{self, href, select_one_in, text_of, trimmed_text};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::parse_iso_timestamp;
use crate::utils::truncate_for_log;
use scraper::{ElementRef, Html};
use serde_json::Value;
use tracing::debug;
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://www.maariv.co.il/Rss/RssChadashot"),
        news_flashes: Some("https://www.maariv.co.il/Rss/RssFeedsMivzakiChadashot"),
        guid_tag: "itemID",
        tags_tag: "Tags",
        modified_tag: Some("UpdateDate"),
        datetime_format: "%a, %d %b %Y %H:%M:%S %Z",
        ..FeedSpec::DEFAULT
    },
    tags_selector: Some(".article-tags > ul > li > a"),
    ..SourceInfo::new("maariv", "https://www.maariv.co.il/")
};

const JSON_METADATA_SELECTOR: &str = "head > script[type='application/ld+json']";
const SPORTS_CATEGORY: &str = "ספורט";

#[derive(Debug, Clone, Copy, Default)]
pub struct MaarivSource;

/// Undo the site's broken escaping of JSON-LD: raw CRLFs inside strings and
/// HTML-escaped quotes.
fn unescape_json_ld(raw: &str) -> String {
    raw.trim().replace("\r\n", "").replace("&quot;", "\\\"")
}

/// The `NewsArticle` object among a JSON-LD payload's top-level nodes.
fn news_article(value: &Value) -> Option<&Value> {
    let is_news_article = |v: &&Value| v.get("@type").and_then(Value::as_str) == Some("NewsArticle");
    match value {
        Value::Array(nodes) => nodes.iter().find(is_news_article),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(nodes)) => nodes.iter().find(is_news_article),
            _ => Some(value).filter(is_news_article),
        },
        _ => None,
    }
}

fn date_field(article: &Value, field: &str) -> Result<Option<chrono::NaiveDateTime>> {
    article
        .get(field)
        .and_then(Value::as_str)
        .map(parse_iso_timestamp)
        .transpose()
}

impl Source for MaarivSource {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        ".top-story-img-big > a"
    }

    fn substories_selector(&self) -> &'static str {
        ".three-articles-in-row > a"
    }

    fn category_selector(&self) -> &'static str {
        ".article-breadcrumbs > ul > li:last-child > a"
    }

    fn published_selector(&self) -> &'static str {
        ".article-publish-date"
    }

    fn headline(&self, a: ElementRef<'_>, _top_article: bool) -> Result<String> {
        let css = ".three-articles-in-row-title";
        let url = self.root_url()?;
        Ok(trimmed_text(require(self, select_one_in(a, css)?, css, &url)?))
    }

    fn top_headline_from_article(&self) -> bool {
        true
    }

    fn article_headline(&self, doc: &Html, url: &Url) -> Result<String> {
        let css = "section.article-title";
        Ok(trimmed_text(require(self, html::select_one(doc, css)?, css, url)?))
    }

    /// Sport1 is a sister site with its own layout.
    fn valid_substory(&self, a: ElementRef<'_>) -> bool {
        href(a).is_some_and(|h| !h.contains("sport1.maariv.co.il"))
    }

    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        if url.host_str().is_some_and(|h| h.starts_with("sport1.")) {
            return Ok(Some(SPORTS_CATEGORY.to_string()));
        }
        let category = html::select_one(doc, self.category_selector())?
            .ok_or_else(|| ScrapeError::Category(url.to_string()))?;
        Ok(Some(html::normalized_text(category)))
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        for script in html::select_all(doc, JSON_METADATA_SELECTOR)? {
            let raw = unescape_json_ld(&text_of(script));
            let metadata: Value = match serde_json::from_str(&raw) {
                Ok(v) => v,
                Err(e) => {
                    debug!(
                        error = %e,
                        payload = %truncate_for_log(&raw, 200),
                        "Skipping unparseable JSON-LD block"
                    );
                    continue;
                }
            };
            if let Some(article) = news_article(&metadata) {
                let published = date_field(article, "datePublished")?;
                let modified = date_field(article, "dateModified")?;
                return Ok((published, modified));
            }
        }
        Err(ScrapeError::Times(url.to_string()))
    }
}
