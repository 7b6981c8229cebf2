//! Arutz 7 (Israel National News), [inn.co.il](https://www.inn.co.il/).

use crate::error::Result;
use crate::html::{self, href, normalized_text, select_one_in, trimmed_text};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::parse_timestamp;
use scraper::{ElementRef, Html};
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://www.inn.co.il/Rss.aspx?act=0.1"),
        news_flashes: Some("https://www.inn.co.il/Rss.aspx"),
        ..FeedSpec::DEFAULT
    },
    ..SourceInfo::new("arutz7", "https://www.inn.co.il/")
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Arutz7Source;

impl Source for Arutz7Source {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "#HPMain a.HPTLink"
    }

    fn substories_selector(&self) -> &'static str {
        "#main > div.HPTitles.HPTitles1 a.HPTLink"
    }

    fn category_selector(&self) -> &'static str {
        "#BreadCrumbs"
    }

    fn published_selector(&self) -> &'static str {
        "span[itemprop='datePublished']"
    }

    fn valid_substory(&self, a: ElementRef<'_>) -> bool {
        href(a).is_some_and(|h| h.starts_with("/News/"))
    }

    fn headline(&self, a: ElementRef<'_>, top_article: bool) -> Result<String> {
        let css = if top_article { "strong" } else { "h2" };
        let url = self.root_url()?;
        Ok(trimmed_text(require(self, select_one_in(a, css)?, css, &url)?))
    }

    /// Third link of the breadcrumb trail (home, section, category).
    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let crumbs = require(
            self,
            html::select_one(doc, self.category_selector())?,
            self.category_selector(),
            url,
        )?;
        let links = html::select_all_in(crumbs, "a")?;
        let third = require(self, links.get(2).copied(), "#BreadCrumbs a:nth(3)", url)?;
        Ok(Some(trimmed_text(third)))
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let published = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let published = parse_timestamp(&normalized_text(published), "%d/%m/%y %H:%M")?;
        Ok((Some(published), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use chrono::NaiveDate;

    const HOME: &str = r#"
        <div id="HPMain">
          <a class="HPTLink" href="/News/News.aspx/560001"><strong> הכותרת הראשית </strong><span>תקציר</span></a>
        </div>
        <div id="main">
          <div class="HPTitles HPTitles1">
            <a class="HPTLink" href="/News/News.aspx/560002"><h2>ידיעה שנייה</h2></a>
            <a class="HPTLink" href="/Articles/Article.aspx/9"><h2>מאמר דעה</h2></a>
            <a class="HPTLink" href="/News/Flash.aspx/560003"><h2>מבזק</h2></a>
          </div>
        </div>
    "#;

    const ARTICLE: &str = r#"
        <div id="BreadCrumbs">
          <a href="/">ראשי</a> &gt; <a href="/News">חדשות</a> &gt; <a href="/News/Politics">פוליטיקה</a>
        </div>
        <span itemprop="datePublished">12/03/24&nbsp;10:15</span>
    "#;

    fn url() -> Url {
        Url::parse("https://www.inn.co.il/News/News.aspx/560001").unwrap()
    }

    #[test]
    fn test_front_page() {
        let doc = Html::parse_document(HOME);
        let (top, subs) = Arutz7Source.parse_front(&doc).unwrap();
        assert_eq!(top.headline, "הכותרת הראשית");
        assert_eq!(top.url, "https://www.inn.co.il/News/News.aspx/560001");
        let headlines: Vec<_> = subs.iter().map(|s| s.headline.as_str()).collect();
        assert_eq!(headlines, vec!["ידיעה שנייה", "מבזק"]);
    }

    #[test]
    fn test_article_meta() {
        let doc = Html::parse_document(ARTICLE);
        let meta = Arutz7Source.article_meta(&doc, &url()).unwrap();
        assert_eq!(meta.category.as_deref(), Some("פוליטיקה"));
        assert_eq!(
            meta.published,
            NaiveDate::from_ymd_opt(2024, 3, 12)
                .unwrap()
                .and_hms_opt(10, 15, 0)
        );
        assert_eq!(meta.updated, None);
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_short_breadcrumbs_is_error() {
        let doc = Html::parse_document(r#"<div id="BreadCrumbs"><a href="/">ראשי</a></div>"#);
        let err = Arutz7Source.category(&doc, &url()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { .. }));
    }
}
