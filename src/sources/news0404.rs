//! 0404 news, [0404.co.il](https://www.0404.co.il/).
//!
//! WordPress site: articles are addressed as `/?p=<id>`, so links keep
//! their query string.

use crate::error::Result;
use crate::html::{self, normalized_text};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::parse_timestamp;
use scraper::Html;
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://www.0404.co.il/?call_custom_simple_rss=1&csrp_cat=1"),
        news_flashes: Some("https://www.0404.co.il/?call_custom_simple_rss=1&csrp_cat=14"),
        created_tag: "dc:created",
        modified_tag: Some("dc:modified"),
        datetime_format: "%Y-%m-%d %H:%M:%S",
        ..FeedSpec::DEFAULT
    },
    include_query_string: true,
    ..SourceInfo::new("0404", "https://www.0404.co.il/")
};

#[derive(Debug, Clone, Copy, Default)]
pub struct News0404Source;

impl Source for News0404Source {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "div.topcategory > ul > li:nth-child(1) .topcattext h4 a"
    }

    fn substories_selector(&self) -> &'static str {
        "div.topcategory > ul > li:not(:nth-child(1)) .topcattext h4 a"
    }

    fn category_selector(&self) -> &'static str {
        "#main_container > div.wrap > div.single_content.desktop > div > div.right_content > \
         div.breadcrumbs > span:nth-child(2) > a > span"
    }

    fn published_selector(&self) -> &'static str {
        "#main_container > div.wrap > div.single_content.desktop > div > div.right_content > \
         div.article_section > div.post_meta.cf > div.post_date"
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let date = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let published = parse_timestamp(&normalized_text(date), "%d/%m/%Y %H:%M")?;
        Ok((Some(published), None))
    }
}
