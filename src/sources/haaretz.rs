//! Haaretz, [haaretz.co.il](https://www.haaretz.co.il/news).

use crate::error::Result;
use crate::html::{self, select_one_in, text_of};
use crate::rss::RawFeedItem;
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::{parse_iso_timestamp, parse_timestamp};
use scraper::{ElementRef, Html};
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://www.haaretz.co.il/cmlink/1.1470869"),
        tags_tag: "category",
        ..FeedSpec::DEFAULT
    },
    tags_selector: Some("article > div > section > div > div > div > div > ul a"),
    ..SourceInfo::new("haaretz", "https://www.haaretz.co.il/news")
};

#[derive(Debug, Clone, Copy, Default)]
pub struct HaaretzSource;

impl Source for HaaretzSource {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "article > div > div > a"
    }

    fn substories_selector(&self) -> &'static str {
        "article > div > a"
    }

    fn category_selector(&self) -> &'static str {
        "nav"
    }

    fn published_selector(&self) -> &'static str {
        "time"
    }

    /// Teaser links carry their title in an `h2`; other anchors in the same
    /// grid are author and section links.
    fn valid_substory(&self, a: ElementRef<'_>) -> bool {
        matches!(select_one_in(a, "h2"), Ok(Some(_)))
    }

    fn headline(&self, a: ElementRef<'_>, top_article: bool) -> Result<String> {
        let url = self.root_url()?;
        if top_article {
            let h1 = require(self, select_one_in(a, "h1")?, "h1", &url)?;
            return Ok(text_of(h1));
        }
        let title = match select_one_in(a, "h2 > span")? {
            Some(span) => Some(span),
            None => select_one_in(a, "h2")?,
        };
        Ok(text_of(require(self, title, "h2", &url)?))
    }

    fn is_premium(&self, _doc: &Html, url: &Url) -> bool {
        url.as_str().contains(".premium")
    }

    /// Breadcrumbs under `/news/` start with the "news" crumb itself.
    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let Some(nav) = html::select_one(doc, self.category_selector())? else {
            return Ok(None);
        };
        let crumbs = html::select_all_in(nav, "span > a")?;
        let index = if url.path().starts_with("/news/") { 1 } else { 0 };
        let crumb = require(self, crumbs.get(index).copied(), "nav span > a", url)?;
        Ok(Some(text_of(crumb)))
    }

    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let time = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let published = match time.value().attr("datetime") {
            Some(stamp) => Some(
                parse_timestamp(stamp, "%Y-%m-%dT%H:%M:%S%z")
                    .or_else(|_| parse_iso_timestamp(stamp))?,
            ),
            None => None,
        };
        Ok((published, None))
    }

    fn feed_item_tags(&self, item: &RawFeedItem) -> Vec<String> {
        item.all(self.info().feed.tags_tag)
            .iter()
            .map(|t| t.trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HOME: &str = r#"
        <article>
          <div>
            <div><a href="/news/politics/2024-03-12/ty-article/0000018e"><h1>כותרת ראשית</h1></a></div>
            <a href="/news/education/2024-03-12/ty-article/0000018f"><h2><span>חינוך</span></h2></a>
            <a href="/opinion/2024-03-12/ty-article-opinion/.premium/0000018a"><h2>דעה</h2></a>
            <a href="/ty-WRITER/0000017f">כתב</a>
          </div>
        </article>
    "#;

    const ARTICLE: &str = r#"
        <nav><span><a href="/news">חדשות</a></span><span><a href="/news/politics">פוליטי</a></span></nav>
        <time datetime="2024-03-12T10:15:00+0200">12.03.2024</time>
        <article><div><section><div><div><div><div><ul>
          <li><a href="/ty-tag/1">בנימין נתניהו</a></li>
          <li><a href="/ty-tag/2">ממשלה</a></li>
        </ul></div></div></div></div></section></div></article>
    "#;

    #[test]
    fn test_front_page() {
        let doc = Html::parse_document(HOME);
        let (top, subs) = HaaretzSource.parse_front(&doc).unwrap();
        assert_eq!(top.headline, "כותרת ראשית");
        assert_eq!(
            top.url,
            "https://www.haaretz.co.il/news/politics/2024-03-12/ty-article/0000018e"
        );
        let headlines: Vec<_> = subs.iter().map(|s| s.headline.as_str()).collect();
        assert_eq!(headlines, vec!["חינוך", "דעה"]);
    }

    #[test]
    fn test_article_meta_under_news() {
        let doc = Html::parse_document(ARTICLE);
        let url = Url::parse("https://www.haaretz.co.il/news/politics/2024-03-12/ty-article/0000018e")
            .unwrap();
        let meta = HaaretzSource.article_meta(&doc, &url).unwrap();
        assert_eq!(meta.category.as_deref(), Some("פוליטי"));
        assert_eq!(
            meta.published,
            NaiveDate::from_ymd_opt(2024, 3, 12)
                .unwrap()
                .and_hms_opt(10, 15, 0)
        );
        assert_eq!(meta.tags, vec!["בנימין נתניהו", "ממשלה"]);
        assert!(!meta.premium);
    }

    #[test]
    fn test_category_outside_news_and_premium() {
        let doc = Html::parse_document(ARTICLE);
        let url = Url::parse("https://www.haaretz.co.il/opinion/2024-03-12/ty-article-opinion/.premium/0000018a")
            .unwrap();
        assert_eq!(
            HaaretzSource.category(&doc, &url).unwrap().as_deref(),
            Some("חדשות")
        );
        assert!(HaaretzSource.is_premium(&doc, &url));
    }

    #[test]
    fn test_no_nav_means_no_category() {
        let doc = Html::parse_document("<time>היום</time>");
        let url = Url::parse("https://www.haaretz.co.il/news/1").unwrap();
        assert_eq!(HaaretzSource.category(&doc, &url).unwrap(), None);
        assert_eq!(HaaretzSource.times(&doc, &url).unwrap(), (None, None));
    }
}
