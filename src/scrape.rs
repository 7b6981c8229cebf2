//! Drivers that combine fetching with a [`Source`]'s parsing.
//!
//! Parsing is kept in synchronous scopes so no parsed document is held
//! across an `.await`.

use crate::error::{Result, ScrapeError};
use crate::fetch::Fetcher;
use crate::models::{ArticleMeta, FeedItem, FrontPage, Story};
use crate::rss;
use crate::source::{FeedKind, Source};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fetch a source's homepage and extract its top story and substories.
///
/// # Arguments
///
/// * `source` - The site adapter.
/// * `fetcher` - Shared HTTP client.
///
/// # Returns
///
/// A [`FrontPage`] without article metadata. For sources whose top
/// headline lives on the article page, that page is fetched as well.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> newslib::error::Result<()> {
/// use newslib::{config::Config, fetch::Fetcher, scrape, sources::ynet::YnetSource};
///
/// let fetcher = Fetcher::new(&Config::default())?;
/// let front = scrape::front_page(&YnetSource, &fetcher).await?;
/// println!("{}", front.top_story.headline);
/// # Ok(())
/// # }
/// ```
#[instrument(level = "info", skip_all, fields(source = source.name()))]
pub async fn front_page(source: &dyn Source, fetcher: &Fetcher) -> Result<FrontPage> {
    let (mut top, substories) = {
        let doc = fetcher.get_html(source.info().root).await?;
        source.parse_front(&doc)?
    };

    if source.top_headline_from_article() {
        let article = fetcher.get(&top.url).await?;
        top.headline = source.article_headline(&article.html(), &article.url)?;
        debug!(url = %top.url, "Read top headline from article page");
    }

    info!(
        top = %top.headline,
        substories = substories.len(),
        "Parsed front page"
    );

    Ok(FrontPage {
        source: source.name().to_string(),
        fetched_at: Utc::now(),
        top_story: top.into(),
        substories: substories.into_iter().map(Story::from).collect(),
    })
}

/// Fetch one article page and resolve its metadata.
///
/// # Arguments
///
/// * `source` - The site adapter the article belongs to.
/// * `fetcher` - Shared HTTP client.
/// * `url` - Absolute article URL.
///
/// # Returns
///
/// The article's [`ArticleMeta`]. Metadata is computed against the final
/// URL, so redirects to a sister site (e.g. a sports subdomain) are visible
/// to the adapter.
#[instrument(level = "info", skip(source, fetcher), fields(source = source.name()))]
pub async fn article(source: &dyn Source, fetcher: &Fetcher, url: &str) -> Result<ArticleMeta> {
    let page = fetcher.get(url).await?;
    source.article_meta(&page.html(), &page.url)
}

/// [`front_page`], then resolve metadata for every story with at most
/// `concurrency` article fetches in flight.
///
/// # Arguments
///
/// * `source` - The site adapter.
/// * `fetcher` - Shared HTTP client.
/// * `concurrency` - Article pages fetched at once; `0` is treated as `1`.
///
/// # Returns
///
/// The front page with `meta` filled in. Stories whose article fails to
/// fetch or parse keep `meta: None`; only a homepage failure is an error.
#[instrument(level = "info", skip_all, fields(source = source.name()))]
pub async fn front_page_with_meta(
    source: &dyn Source,
    fetcher: &Fetcher,
    concurrency: usize,
) -> Result<FrontPage> {
    let mut front = front_page(source, fetcher).await?;
    let urls: Vec<String> = front.stories().map(|s| s.url.clone()).collect();

    let metas: Vec<Option<ArticleMeta>> = stream::iter(urls)
        .map(|url| async move {
            match article(source, fetcher, &url).await {
                Ok(meta) => Some(meta),
                Err(e) => {
                    warn!(error = %e, %url, "Article metadata failed");
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let resolved = attach_metas(&mut front, metas);
    info!(
        stories = front.substories.len() + 1,
        resolved, "Resolved article metadata"
    );
    Ok(front)
}

/// Pair `metas` with the front page's stories in order (top story first)
/// and return how many stories got metadata.
pub fn attach_metas(front: &mut FrontPage, metas: Vec<Option<ArticleMeta>>) -> usize {
    let mut resolved = 0;
    for (story, meta) in front.stories_mut().zip(metas) {
        resolved += usize::from(meta.is_some());
        story.meta = meta;
    }
    resolved
}

/// Fetch and parse one of a source's RSS feeds.
///
/// # Returns
///
/// The feed's items, or [`ScrapeError::NoFeed`] when the source publishes
/// no feed of that kind.
#[instrument(level = "info", skip_all, fields(source = source.name(), %kind))]
pub async fn feed(source: &dyn Source, fetcher: &Fetcher, kind: FeedKind) -> Result<Vec<FeedItem>> {
    let url = source
        .info()
        .feed
        .url(kind)
        .ok_or_else(|| ScrapeError::NoFeed {
            site: source.name().to_string(),
            kind: kind.to_string(),
        })?;
    let page = fetcher.get(url).await?;
    let items = rss::parse_feed(source, &page.body)?;
    info!(count = items.len(), "Parsed feed");
    Ok(items)
}

/// Whether `url` belongs to `source`'s site.
///
/// The root host is stripped of a leading `www.` or `news.` and the URL's
/// host must equal it or be a subdomain of it, so `sport1.maariv.co.il`
/// belongs to maariv. The CLI uses this to warn about mismatched articles.
pub fn belongs_to(source: &dyn Source, url: &Url) -> bool {
    let Ok(root) = source.root_url() else {
        return false;
    };
    let (Some(root_host), Some(host)) = (root.host_str(), url.host_str()) else {
        return false;
    };
    let site = root_host.trim_start_matches("www.").trim_start_matches("news.");
    host == site || host.ends_with(&format!(".{site}"))
}
