//! The contract every site adapter fulfils.
//!
//! An adapter is mostly data: a [`SourceInfo`] block, four selectors, and a
//! handful of hooks that override the defaults where a site's markup
//! deviates. The provided methods turn those pieces into normalized
//! [`Headline`]s and [`ArticleMeta`].
//!
//! Everything here is synchronous and works on already-parsed documents;
//! fetching lives in [`crate::scrape`].

use crate::error::{Result, ScrapeError};
use crate::html::{self, href, normalized_text, trimmed_text};
use crate::models::{ArticleMeta, Headline};
use crate::rss::RawFeedItem;
use chrono::NaiveDateTime;
use itertools::Itertools;
use scraper::{ElementRef, Html};
use url::Url;

/// Published and last-updated times of an article.
pub type Times = (Option<NaiveDateTime>, Option<NaiveDateTime>);

/// RSS configuration for a source.
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec {
    /// Main news feed.
    pub news_link: Option<&'static str>,
    /// Breaking news ("flashes") feed.
    pub news_flashes: Option<&'static str>,
    pub guid_tag: &'static str,
    pub tags_tag: &'static str,
    pub created_tag: &'static str,
    pub modified_tag: Option<&'static str>,
    /// strftime format of the created/modified tags.
    pub datetime_format: &'static str,
}

impl FeedSpec {
    pub const DEFAULT: FeedSpec = FeedSpec {
        news_link: None,
        news_flashes: None,
        guid_tag: "guid",
        tags_tag: "tags",
        created_tag: "pubDate",
        modified_tag: None,
        datetime_format: "%a, %d %b %Y %H:%M:%S %z",
    };

    pub fn url(&self, kind: FeedKind) -> Option<&'static str> {
        match kind {
            FeedKind::News => self.news_link,
            FeedKind::Flashes => self.news_flashes,
        }
    }
}

impl Default for FeedSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which of a source's feeds to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    News,
    Flashes,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::News => f.write_str("news"),
            FeedKind::Flashes => f.write_str("flashes"),
        }
    }
}

/// Static description of a source.
#[derive(Debug, Clone, Copy)]
pub struct SourceInfo {
    pub name: &'static str,
    /// Homepage; relative links resolve against it.
    pub root: &'static str,
    pub feed: FeedSpec,
    /// Keep the query string on article links (some sites route by `?p=`).
    pub include_query_string: bool,
    pub tags_selector: Option<&'static str>,
}

impl SourceInfo {
    pub const fn new(name: &'static str, root: &'static str) -> Self {
        SourceInfo {
            name,
            root,
            feed: FeedSpec::DEFAULT,
            include_query_string: false,
            tags_selector: None,
        }
    }
}

/// A news site adapter.
pub trait Source: Send + Sync {
    fn info(&self) -> &SourceInfo;

    fn top_article_selector(&self) -> &'static str;
    fn substories_selector(&self) -> &'static str;
    fn category_selector(&self) -> &'static str;
    fn published_selector(&self) -> &'static str;

    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Headline text for a homepage anchor.
    fn headline(&self, a: ElementRef<'_>, _top_article: bool) -> Result<String> {
        Ok(trimmed_text(a))
    }

    /// Whether the top story's headline must be read from its article page.
    fn top_headline_from_article(&self) -> bool {
        false
    }

    /// Headline as printed on the article page itself.
    fn article_headline(&self, _doc: &Html, url: &Url) -> Result<String> {
        Err(ScrapeError::MissingElement {
            site: self.name().to_string(),
            selector: "article headline".to_string(),
            url: url.to_string(),
        })
    }

    fn valid_substory(&self, _a: ElementRef<'_>) -> bool {
        true
    }

    fn is_premium(&self, _doc: &Html, _url: &Url) -> bool {
        false
    }

    fn times(&self, _doc: &Html, _url: &Url) -> Result<Times> {
        Ok((None, None))
    }

    /// Article category. `Ok(None)` means the page legitimately has none.
    fn category(&self, doc: &Html, url: &Url) -> Result<Option<String>> {
        let category = html::select_one(doc, self.category_selector())?
            .ok_or_else(|| ScrapeError::Category(url.to_string()))?;
        Ok(Some(normalized_text(category)))
    }

    fn tags(&self, doc: &Html) -> Result<Vec<String>> {
        let Some(css) = self.info().tags_selector else {
            return Ok(Vec::new());
        };
        Ok(html::select_all(doc, css)?
            .into_iter()
            .map(trimmed_text)
            .filter(|t| !t.is_empty())
            .unique()
            .collect())
    }

    /// Reject feed bodies that are really an error page.
    fn check_feed_error(&self, _body: &str) -> Result<()> {
        Ok(())
    }

    /// Tags of a feed item: the first `tags_tag` element, comma separated.
    fn feed_item_tags(&self, item: &RawFeedItem) -> Vec<String> {
        item.first(self.info().feed.tags_tag)
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn root_url(&self) -> Result<Url> {
        Ok(Url::parse(self.info().root)?)
    }

    /// Absolute article URL for a homepage `href`.
    fn resolve_link(&self, href: &str) -> Result<Url> {
        let root = self.root_url()?;
        Ok(crate::utils::resolve_link(
            &root,
            href,
            self.info().include_query_string,
        )?)
    }

    fn top_article<'a>(&self, doc: &'a Html) -> Result<ElementRef<'a>> {
        html::select_one(doc, self.top_article_selector())?.ok_or_else(|| {
            ScrapeError::MissingElement {
                site: self.name().to_string(),
                selector: self.top_article_selector().to_string(),
                url: self.info().root.to_string(),
            }
        })
    }

    fn substories<'a>(&self, doc: &'a Html) -> Result<Vec<ElementRef<'a>>> {
        Ok(html::select_all(doc, self.substories_selector())?
            .into_iter()
            .filter(|a| self.valid_substory(*a))
            .collect())
    }

    /// Top story and substories of a parsed homepage.
    ///
    /// # Arguments
    ///
    /// * `doc` - The homepage, as served from [`SourceInfo::root`].
    ///
    /// # Returns
    ///
    /// The top story and the valid substories in page order, with absolute
    /// links. Substory anchors without an `href` are skipped. A missing top
    /// story is [`ScrapeError::MissingElement`].
    ///
    /// When [`Source::top_headline_from_article`] is set the returned top
    /// headline is empty and must be filled in from the article page.
    ///
    /// # Examples
    ///
    /// ```
    /// use newslib::source::Source;
    /// use newslib::sources::walla::WallaSource;
    /// use scraper::Html;
    ///
    /// let doc = Html::parse_document(
    ///     r#"<section class="top-section"><a href="/item/1"><h3> ראשית </h3></a></section>"#,
    /// );
    /// let (top, substories) = WallaSource.parse_front(&doc).unwrap();
    /// assert_eq!(top.headline, "ראשית");
    /// assert!(top.url.ends_with("/item/1"));
    /// assert!(substories.is_empty());
    /// ```
    fn parse_front(&self, doc: &Html) -> Result<(Headline, Vec<Headline>)> {
        let top = self.top_article(doc)?;
        let top_href = href(top).ok_or_else(|| ScrapeError::MissingElement {
            site: self.name().to_string(),
            selector: format!("{}[href]", self.top_article_selector()),
            url: self.info().root.to_string(),
        })?;
        let top_headline = if self.top_headline_from_article() {
            String::new()
        } else {
            self.headline(top, true)?
        };
        let top_story = Headline {
            headline: top_headline,
            url: self.resolve_link(top_href)?.to_string(),
        };

        let mut substories = Vec::new();
        for a in self.substories(doc)? {
            let Some(link) = href(a) else {
                continue;
            };
            substories.push(Headline {
                headline: self.headline(a, false)?,
                url: self.resolve_link(link)?.to_string(),
            });
        }

        Ok((top_story, substories))
    }

    /// Category, times, tags and premium status of a parsed article page.
    ///
    /// # Arguments
    ///
    /// * `doc` - The article page.
    /// * `url` - The URL the page was finally served from; some adapters
    ///   read the category or premium status from it.
    ///
    /// # Returns
    ///
    /// The page's [`ArticleMeta`], or the first hook error (missing
    /// category, unparseable timestamp, ...).
    fn article_meta(&self, doc: &Html, url: &Url) -> Result<ArticleMeta> {
        let (published, updated) = self.times(doc, url)?;
        Ok(ArticleMeta {
            category: self.category(doc, url)?,
            published,
            updated,
            tags: self.tags(doc)?,
            premium: self.is_premium(doc, url),
        })
    }
}

impl std::fmt::Debug for dyn Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Source {}>", self.name())
    }
}

/// Required element lookup with a [`ScrapeError::MissingElement`] on miss.
pub(crate) fn require<'a>(
    source: &dyn Source,
    found: Option<ElementRef<'a>>,
    selector: &str,
    url: &Url,
) -> Result<ElementRef<'a>> {
    found.ok_or_else(|| ScrapeError::MissingElement {
        site: source.name().to_string(),
        selector: selector.to_string(),
        url: url.to_string(),
    })
}

/// Required attribute lookup with a [`ScrapeError::MissingElement`] on miss.
pub(crate) fn require_attr<'a>(
    source: &dyn Source,
    el: ElementRef<'a>,
    attr: &str,
    url: &Url,
) -> Result<&'a str> {
    el.value().attr(attr).ok_or_else(|| ScrapeError::MissingElement {
        site: source.name().to_string(),
        selector: format!("{}[{}]", el.value().name(), attr),
        url: url.to_string(),
    })
}
