//! # newslib
//!
//! Scraping adapters for Israeli news outlets. Each adapter knows one site's
//! homepage layout (top story plus secondary stories), how to read an
//! article page's metadata (category, publish/update times, tags, premium
//! status) and where its RSS feeds live. Results come out in one common
//! shape ([`models`]).
//!
//! ## Layout
//!
//! - [`source`]: the [`Source`](source::Source) contract and its defaults
//! - [`sources`]: the nine site adapters and the registry
//! - [`scrape`]: async drivers (fetch + parse)
//! - [`fetch`] / [`html`] / [`rss`] / [`timestamps`]: shared helpers
//!
//! ```ignore
//! let config = newslib::config::Config::default();
//! let fetcher = newslib::fetch::Fetcher::new(&config)?;
//! let ynet = newslib::sources::by_name("ynet")?;
//! let page = newslib::scrape::front_page(ynet.as_ref(), &fetcher).await?;
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod html;
pub mod models;
pub mod outputs;
pub mod rss;
pub mod scrape;
pub mod source;
pub mod sources;
pub mod timestamps;
pub mod utils;
