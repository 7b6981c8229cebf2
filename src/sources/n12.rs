//! N12 (Channel 12 news), [n12.co.il](https://www.n12.co.il/).

use crate::error::Result;
use crate::html::{self, next_element_sibling, trimmed_text};
use crate::source::{Source, SourceInfo, Times, require};
use crate::timestamps::parse_timestamp;
use crate::utils::collapse_whitespace;
use chrono::NaiveDateTime;
use scraper::Html;
use url::Url;

static INFO: SourceInfo = SourceInfo::new("n12", "https://www.n12.co.il/");

const TIME_FORMAT: &str = "%d/%m/%y %H:%M";
/// Leading breadcrumb on every news article; the real section follows it.
const NEWS_CRUMB: &str = "החדשות";

#[derive(Debug, Clone, Copy, Default)]
pub struct N12Source;

/// Join a date span and a time span, dropping separators and a label.
fn labelled_time(date: &str, time: &str, label: &str) -> Result<NaiveDateTime> {
    let text = format!("{date} {time}").replace('|', "").replace(label, "");
    parse_timestamp(&collapse_whitespace(&text), TIME_FORMAT)
}

impl Source for N12Source {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "#part1 > .grid-ordering.main1 > li:first-child strong > a"
    }

    fn substories_selector(&self) -> &'static str {
        "#part1 > .grid-ordering.main1 > li:not(:first-child) strong > a"
    }

    fn category_selector(&self) -> &'static str {
        "nav.breadcrumbs-v_2017 ul > li"
    }

    fn published_selector(&self) -> &'static str {
        ".writer-data > span.display-date"
    }

    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let mut crumb = require(
            self,
            html::select_one(doc, self.category_selector())?,
            self.category_selector(),
            url,
        )?;
        if trimmed_text(crumb) == NEWS_CRUMB {
            crumb = require(self, next_element_sibling(crumb), "breadcrumb after news", url)?;
        }
        Ok(Some(trimmed_text(crumb)))
    }

    /// The display-date holds four spans: published date and time, then
    /// (optionally) updated date and time.
    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let display = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let spans: Vec<String> = html::select_all_in(display, "span")?
            .into_iter()
            .map(html::text_of)
            .collect();

        let (Some(date), Some(time)) = (spans.first(), spans.get(1)) else {
            return Err(crate::error::ScrapeError::Times(url.to_string()));
        };
        let published = labelled_time(date, time, "פורסם")?;

        let updated = if spans.len() == 4 {
            labelled_time(&spans[2], &spans[3], "עודכן")?
        } else {
            published
        };

        Ok((Some(published), Some(updated)))
    }
}
