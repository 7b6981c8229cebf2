//! # newslib
//!
//! Command-line front end for the newslib site adapters.
//!
//! ## Usage
//!
//! ```sh
//! newslib front-page -s ynet --metadata -j ./json
//! ```
//!
//! ## Flow
//!
//! 1. **Configuration**: optional YAML file, overridden by flags
//! 2. **Scraping**: one source at a time; a failing source is logged and skipped
//! 3. **Output**: JSON on stdout, or an edition file under `--json-output-dir`

use clap::Parser;
use newslib::config::Config;
use newslib::fetch::Fetcher;
use newslib::models::FrontPage;
use newslib::outputs::json;
use newslib::scrape;
use newslib::source::{FeedKind, Source};
use newslib::sources;
use newslib::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newslib starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    let fetcher = Fetcher::new(&config)?;

    match args.command {
        Command::Sources => list_sources(),
        Command::FrontPage {
            sources: names,
            metadata,
            concurrency,
            json_output_dir,
        } => {
            if let Some(dir) = &json_output_dir {
                // Fail before any scraping if the output can't be written.
                if let Err(e) = ensure_writable_dir(dir).await {
                    error!(path = %dir, error = %e, "JSON output directory is not writable");
                    return Err(e);
                }
            }

            let names = if names.is_empty() { config.sources.clone() } else { names };
            let selected = sources::select(&names)?;
            let concurrency = concurrency.unwrap_or(config.concurrency);

            let front_pages = scrape_front_pages(&selected, &fetcher, metadata, concurrency).await;
            info!(
                requested = selected.len(),
                scraped = front_pages.len(),
                "Front pages complete"
            );

            let edition = json::new_edition(front_pages);
            match json_output_dir {
                Some(dir) => {
                    let path = json::write_edition(&edition, &dir).await?;
                    info!(path = %path.display(), "Edition written");
                }
                None => println!("{}", serde_json::to_string_pretty(&edition)?),
            }
        }
        Command::Article { source, url } => {
            let source = sources::by_name(&source)?;
            if Url::parse(&url).is_ok_and(|u| !scrape::belongs_to(source.as_ref(), &u)) {
                warn!(source = source.name(), %url, "URL is not on this source's site");
            }
            let meta = scrape::article(source.as_ref(), &fetcher, &url).await?;
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        Command::Feed { source, flashes } => {
            let source = sources::by_name(&source)?;
            let kind = if flashes { FeedKind::Flashes } else { FeedKind::News };
            let items = scrape::feed(source.as_ref(), &fetcher, kind).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

/// Scrape each source in turn; failures are logged and the source skipped.
async fn scrape_front_pages(
    selected: &[Box<dyn Source>],
    fetcher: &Fetcher,
    metadata: bool,
    concurrency: usize,
) -> Vec<FrontPage> {
    let mut front_pages = Vec::with_capacity(selected.len());
    for source in selected {
        let result = if metadata {
            scrape::front_page_with_meta(source.as_ref(), fetcher, concurrency).await
        } else {
            scrape::front_page(source.as_ref(), fetcher).await
        };
        match result {
            Ok(page) => front_pages.push(page),
            Err(e) => error!(source = source.name(), error = %e, "Front page failed; skipping source"),
        }
    }
    front_pages
}

fn list_sources() {
    for source in sources::all() {
        let info = source.info();
        let feeds = [
            info.feed.url(FeedKind::News).map(|u| format!("news={u}")),
            info.feed.url(FeedKind::Flashes).map(|u| format!("flashes={u}")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        println!("{:<12} {:<36} {}", info.name, info.root, feeds);
    }
}
