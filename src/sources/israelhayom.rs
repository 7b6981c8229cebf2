//! Israel Hayom, [israelhayom.co.il](https://www.israelhayom.co.il/).
//!
//! The live homepage is rendered client-side; the selectors target the
//! server-rendered layout.

use crate::error::Result;
use crate::html::{self, select_one_in, trimmed_text};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require, require_attr};
use crate::timestamps::parse_timestamp;
use scraper::{ElementRef, Html};
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://www.israelhayom.co.il/rss.xml"),
        ..FeedSpec::DEFAULT
    },
    tags_selector: Some(".tags-list > li:not(.first) > a"),
    ..SourceInfo::new("israelhayom", "https://www.israelhayom.co.il/")
};

#[derive(Debug, Clone, Copy, Default)]
pub struct IsraelHayomSource;

impl Source for IsraelHayomSource {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "#block-system-main > div > div.panel-panel.line.top.clearfix.mquery-hp-1 > div > \
         div.top-wide > div.panel-pane.pane-ih-main-lobby-topstory > div > div > \
         div.wrapper-top > section > article .content-second > a"
    }

    fn substories_selector(&self) -> &'static str {
        ".line.top .top-wide > .pane-ih-main-lobby-topstory > div > div > .wrapper-bottom \
         .item-sub-article > article > div > a"
    }

    fn category_selector(&self) -> &'static str {
        ".field-section-breadcrumb .last"
    }

    fn published_selector(&self) -> &'static str {
        ".time time"
    }

    fn headline(&self, a: ElementRef<'_>, top_article: bool) -> Result<String> {
        let css = if top_article { ".title" } else { ".teaser-title" };
        let url = self.root_url()?;
        Ok(trimmed_text(require(self, select_one_in(a, css)?, css, &url)?))
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let time = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let stamp = require_attr(self, time, "datetime", url)?;
        let published = parse_timestamp(stamp, "%Y-%m-%dT%H:%M:%S")?;
        Ok((Some(published), None))
    }
}
