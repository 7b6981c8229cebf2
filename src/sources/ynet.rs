//! Ynet, [ynet.co.il](https://www.ynet.co.il/).
//!
//! Ynet serves two article layouts (legacy `art_header_footer` pages and the
//! newer `authorAndDateContainer` ones), so most selectors are unions of
//! both.

use crate::error::{Result, ScrapeError};
use crate::html::{
    self, child_elements, next_element_sibling, normalized_text, previous_element, select_one_in,
    trimmed_text,
};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::parse_timestamp;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html};
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("http://www.ynet.co.il/Integration/StoryRss2.xml"),
        news_flashes: Some("http://www.ynet.co.il/Integration/StoryRss1854.xml"),
        ..FeedSpec::DEFAULT
    },
    tags_selector: Some("#articletags > a"),
    ..SourceInfo::new("ynet", "https://www.ynet.co.il/")
};

const PREMIUM_SELECTOR: &str = "#ynet_premium_blocked";
const UPDATED_SELECTOR: &str =
    "div.art_header_footer > span:nth-child(3), div.authorAndDateContainer div.date";
const FIND_ERROR_SELECTOR: &str = "#find_error";
const FALLBACK_BREADCRUMBS: &str = "nav.categoryBreadcrumbs";
const BLOCK_CASE_SELECTOR: &str = "#lblCase";

const NEWS_CRUMB: &str = "חדשות";
const OPINION_CRUMB: &str = "פרשנות וטורים";
const PUBLISHED_LABEL: &str = "פורסם";
const UPDATED_LABELS: [&str; 2] = ["עודכן", "עדכון"];

#[derive(Debug, Clone, Copy, Default)]
pub struct YnetSource;

/// Parse the "originally published" line, e.g. `פורסם לראשונה: 09:30 , 12.03.24`
/// or `תאריך פרסום: 12/03/2024 09:30`. The stamp follows the second space.
fn originally_published(text: &str) -> Result<NaiveDateTime> {
    let stamp = text.splitn(3, ' ').last().unwrap_or_default().trim();
    if stamp.contains(',') {
        parse_timestamp(stamp, "%H:%M , %d.%m.%y")
    } else {
        parse_timestamp(stamp, "%d/%m/%Y %H:%M")
    }
}

impl YnetSource {
    fn originally_published_element<'a>(&self, doc: &'a Html) -> Result<Option<ElementRef<'a>>> {
        if let Some(el) = html::select_one(doc, self.published_selector())? {
            return Ok(Some(el));
        }
        Ok(html::select_one(doc, FIND_ERROR_SELECTOR)?.and_then(previous_element))
    }
}

impl Source for YnetSource {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        ".TopStoryComponenta .slotTitle > a"
    }

    fn substories_selector(&self) -> &'static str {
        ".strip-1150 .textDiv a"
    }

    fn category_selector(&self) -> &'static str {
        "ul.trj_trajectory, nav.categoryBreadcrumbs > ul"
    }

    fn published_selector(&self) -> &'static str {
        "div.originalLaunchDate"
    }

    fn headline(&self, a: ElementRef<'_>, _top_article: bool) -> Result<String> {
        Ok(match select_one_in(a, ".title")? {
            Some(title) => trimmed_text(title),
            None => trimmed_text(a),
        })
    }

    fn is_premium(&self, doc: &Html, _url: &Url) -> bool {
        matches!(html::select_one(doc, PREMIUM_SELECTOR), Ok(Some(_)))
    }

    /// Under the generic "news" crumb the section is the last crumb, except
    /// for opinion columns which sit right after it.
    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let breadcrumbs = match html::select_one(doc, self.category_selector())? {
            Some(el) => el,
            None => html::select_one(doc, FALLBACK_BREADCRUMBS)?
                .ok_or_else(|| ScrapeError::Category(url.to_string()))?,
        };
        let first = require(
            self,
            select_one_in(breadcrumbs, "li:first-child")?,
            "breadcrumbs li:first-child",
            url,
        )?;

        if trimmed_text(first) != NEWS_CRUMB {
            return Ok(Some(trimmed_text(first)));
        }
        if let Some(next) = next_element_sibling(first) {
            if trimmed_text(next) == OPINION_CRUMB {
                return Ok(Some(OPINION_CRUMB.to_string()));
            }
        }
        let last = child_elements(breadcrumbs)
            .pop()
            .ok_or_else(|| ScrapeError::Category(url.to_string()))?;
        Ok(Some(trimmed_text(last)))
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let date_line = require(
            self,
            html::select_one(doc, UPDATED_SELECTOR)?,
            UPDATED_SELECTOR,
            url,
        )?;
        let date_line = normalized_text(date_line);

        let mut published = None;
        let mut last_updated = None;

        if let Some(el) = self.originally_published_element(doc)? {
            if el.children().next().is_some() {
                published = Some(originally_published(&normalized_text(el))?);
            }
        }

        let (date_type, date_text) = date_line
            .split_once(':')
            .ok_or_else(|| ScrapeError::Times(url.to_string()))?;
        if date_type.contains(PUBLISHED_LABEL) {
            published = Some(parse_timestamp(date_text, "%d.%m.%y , %H:%M")?);
        } else if UPDATED_LABELS.iter().any(|l| date_type.contains(l)) {
            last_updated = Some(parse_timestamp(date_text, "%d.%m.%y , %H:%M")?);
        }

        Ok((published, last_updated))
    }

    fn check_feed_error(&self, body: &str) -> Result<()> {
        if !body.contains("lblCase") {
            return Ok(());
        }
        let doc = Html::parse_document(body);
        match html::select_one(&doc, BLOCK_CASE_SELECTOR)? {
            Some(case) => Err(ScrapeError::Blocked(trimmed_text(case))),
            None => Ok(()),
        }
    }
}
