//! Live checks against the real sites.
//!
//! These hit the network and break whenever a site changes its markup, which
//! is exactly what they are for. Run them explicitly:
//!
//! ```sh
//! cargo test --test live_sources -- --ignored --nocapture
//! ```

use newslib::config::Config;
use newslib::fetch::Fetcher;
use newslib::scrape;
use newslib::source::{FeedKind, Source};
use newslib::sources;

#[tokio::test]
#[ignore = "hits the network"]
async fn every_source_resolves_top_article_and_category() {
    let fetcher = Fetcher::new(&Config::default()).expect("client");
    let mut failures = Vec::new();

    for source in sources::all() {
        let front = match scrape::front_page(source.as_ref(), &fetcher).await {
            Ok(front) => front,
            Err(e) => {
                failures.push(format!("{}: front page: {e}", source.name()));
                continue;
            }
        };
        assert!(!front.top_story.url.is_empty(), "{}", source.name());

        match scrape::article(source.as_ref(), &fetcher, &front.top_story.url).await {
            Ok(meta) => eprintln!(
                "{}: {:?} / {} substories",
                source.name(),
                meta.category,
                front.substories.len()
            ),
            Err(e) => failures.push(format!("{}: category: {e}", source.name())),
        }
    }

    assert!(failures.is_empty(), "{failures:#?}");
}

#[tokio::test]
#[ignore = "hits the network"]
async fn feeds_parse() {
    let fetcher = Fetcher::new(&Config::default()).expect("client");
    for source in sources::all() {
        if source.info().feed.news_link.is_none() {
            continue;
        }
        let items = scrape::feed(source.as_ref(), &fetcher, FeedKind::News)
            .await
            .unwrap_or_else(|e| panic!("{}: {e}", source.name()));
        eprintln!("{}: {} feed items", source.name(), items.len());
    }
}
