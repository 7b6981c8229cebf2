//! News 13 (Reshet 13), [13news.co.il](https://13news.co.il/).
//!
//! The live homepage is rendered client-side.

use crate::error::Result;
use crate::html;
use crate::source::{Source, SourceInfo, Times, require, require_attr};
use crate::timestamps::parse_timestamp;
use scraper::Html;
use url::Url;

static INFO: SourceInfo = SourceInfo::new("news13", "https://13news.co.il/");

#[derive(Debug, Clone, Copy, Default)]
pub struct News13Source;

impl Source for News13Source {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        ".about-five-group-items .about-block-wrp .titleComp a"
    }

    fn substories_selector(&self) -> &'static str {
        ".about-five-group-items .four-group-ul a"
    }

    fn category_selector(&self) -> &'static str {
        ".breadCrumbs_2"
    }

    fn published_selector(&self) -> &'static str {
        "time"
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let time = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let stamp = require_attr(self, time, "datetime", url)?;
        Ok((Some(parse_timestamp(stamp, "%d/%m/%Y %H:%M")?), None))
    }
}
