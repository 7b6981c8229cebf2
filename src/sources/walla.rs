//! Walla! News, [news.walla.co.il](https://news.walla.co.il/).

use crate::error::{Result, ScrapeError};
use crate::html::{self, next_element_sibling, select_one_in, trimmed_text};
use crate::source::{FeedSpec, Source, SourceInfo, Times, require};
use crate::timestamps::parse_timestamp;
use scraper::{ElementRef, Html};
use url::Url;

static INFO: SourceInfo = SourceInfo {
    feed: FeedSpec {
        news_link: Some("https://rss.walla.co.il/feed/1?type=main"),
        news_flashes: Some("https://rss.walla.co.il/feed/22"),
        guid_tag: "link",
        datetime_format: "%a, %d %b %Y %H:%M:%S %Z",
        ..FeedSpec::DEFAULT
    },
    tags_selector: Some(
        "#container > section.fc.common-section.grid-1-1.sticky-content-will-change-position > \
         section > article > section.tags.target-editorial > ul > li > a",
    ),
    ..SourceInfo::new("walla", "https://news.walla.co.il/")
};

const NEWS_CRUMB: &str = "חדשות";

#[derive(Debug, Clone, Copy, Default)]
pub struct WallaSource;

impl Source for WallaSource {
    fn info(&self) -> &SourceInfo {
        &INFO
    }

    fn top_article_selector(&self) -> &'static str {
        "section.top-section > a"
    }

    fn substories_selector(&self) -> &'static str {
        "#container > section.fc.common-section.grid-1-2 > section > \
         section.sequence.common-articles.editor-selections.no-title > ul > li > article > a"
    }

    fn category_selector(&self) -> &'static str {
        "nav.breadcrumb > ul > li"
    }

    fn published_selector(&self) -> &'static str {
        "time"
    }

    fn headline(&self, a: ElementRef<'_>, _top_article: bool) -> Result<String> {
        let url = self.root_url()?;
        Ok(trimmed_text(require(self, select_one_in(a, "h3")?, "h3", &url)?))
    }

    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let crumb = html::select_one(doc, self.category_selector())?
            .ok_or_else(|| ScrapeError::Category(url.to_string()))?;
        if trimmed_text(crumb) == NEWS_CRUMB {
            if let Some(next) = next_element_sibling(crumb) {
                return Ok(Some(trimmed_text(next)));
            }
        }
        Ok(Some(trimmed_text(crumb)))
    }

    /// A `time` element without `datetime` (live blogs) has no usable time.
    fn times(&self, doc: &Html, url: &Url) -> Result<Times> {
        let time = require(
            self,
            html::select_one(doc, self.published_selector())?,
            self.published_selector(),
            url,
        )?;
        let published = time
            .value()
            .attr("datetime")
            .map(|stamp| parse_timestamp(stamp, "%Y-%m-%d %H:%M"))
            .transpose()?;
        Ok((published, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const HOME: &str = r#"
        <section class="top-section"><a href="https://news.walla.co.il/item/3650001"><h3> ראשית </h3></a></section>
        <div id="container">
          <section class="fc common-section grid-1-2"><section>
            <section class="sequence common-articles editor-selections no-title"><ul>
              <li><article><a href="/item/3650002"><h3>שנייה</h3></a></article></li>
              <li><article><a href="https://sports.walla.co.il/item/3650003"><h3>ספורט</h3></a></article></li>
            </ul></section>
          </section></section>
        </div>
    "#;

    const ARTICLE: &str = r#"
        <nav class="breadcrumb"><ul><li>חדשות</li><li> פוליטי-מדיני </li></ul></nav>
        <time datetime="2024-03-12 10:15">12.03.24</time>
        <div id="container">
          <section class="fc common-section grid-1-1 sticky-content-will-change-position"><section><article>
            <section class="tags target-editorial"><ul><li><a>הכנסת</a></li><li><a>בחירות</a></li></ul></section>
          </article></section></section>
        </div>
    "#;

    #[test]
    fn test_front_page() {
        let doc = Html::parse_document(HOME);
        let (top, subs) = WallaSource.parse_front(&doc).unwrap();
        assert_eq!(top.headline, "ראשית");
        assert_eq!(top.url, "https://news.walla.co.il/item/3650001");
        assert_eq!(subs[0].url, "https://news.walla.co.il/item/3650002");
        assert_eq!(subs[1].headline, "ספורט");
    }

    #[test]
    fn test_article_meta() {
        let doc = Html::parse_document(ARTICLE);
        let url = Url::parse("https://news.walla.co.il/item/3650001").unwrap();
        let meta = WallaSource.article_meta(&doc, &url).unwrap();
        assert_eq!(meta.category.as_deref(), Some("פוליטי-מדיני"));
        assert_eq!(
            meta.published,
            NaiveDate::from_ymd_opt(2024, 3, 12)
                .unwrap()
                .and_hms_opt(10, 15, 0)
        );
        assert_eq!(meta.tags, vec!["הכנסת", "בחירות"]);
    }

    #[test]
    fn test_lone_news_crumb_is_category() {
        let doc = Html::parse_document(
            r#"<nav class="breadcrumb"><ul><li>חדשות</li></ul></nav><time>עכשיו</time>"#,
        );
        let url = Url::parse("https://news.walla.co.il/item/1").unwrap();
        let meta = WallaSource.article_meta(&doc, &url).unwrap();
        assert_eq!(meta.category.as_deref(), Some("חדשות"));
        assert_eq!(meta.published, None);
    }
}
