//! HTTP fetching.
//!
//! One shared [`reqwest::Client`] per run. No retries: a failed request is
//! reported to the caller, who decides whether to skip the source.

use crate::config::Config;
use crate::error::Result;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// A fetched document and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects.
    pub url: Url,
    pub body: String,
}

impl Page {
    pub fn html(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url`, following redirects.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of a homepage, article or feed.
    ///
    /// # Returns
    ///
    /// The body together with the URL it was finally served from. Non-2xx
    /// statuses and transport failures are
    /// [`ScrapeError::Http`](crate::error::ScrapeError::Http).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> newslib::error::Result<()> {
    /// use newslib::{config::Config, fetch::Fetcher};
    ///
    /// let fetcher = Fetcher::new(&Config::default())?;
    /// let page = fetcher.get("https://www.ynet.co.il/").await?;
    /// println!("{} bytes from {}", page.body.len(), page.url);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(level = "info", skip(self))]
    pub async fn get(&self, url: &str) -> Result<Page> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let final_url = response.url().clone();
        if final_url.as_str() != url {
            debug!(%final_url, "Followed redirect");
        }
        let body = response.text().await?;
        info!(bytes = body.len(), status = "ok", "Fetched page");
        Ok(Page {
            url: final_url,
            body,
        })
    }

    /// [`Fetcher::get`] followed by [`Html::parse_document`], for callers
    /// that don't need the final URL.
    pub async fn get_html(&self, url: &str) -> Result<Html> {
        Ok(self.get(url).await?.html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use axum::{Router, response::Redirect, routing::get};

    async fn serve() -> String {
        let app = Router::new()
            .route("/page", get(|| async { axum::response::Html("<h3>כותרת</h3>") }))
            .route("/old", get(|| async { Redirect::permanent("/page") }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}")
    }

    #[test]
    fn test_fetcher_builds_from_default_config() {
        assert!(Fetcher::new(&Config::default()).is_ok());
    }

    #[test]
    fn test_page_html_parses_body() {
        let page = Page {
            url: Url::parse("https://www.walla.co.il/").unwrap(),
            body: "<html><body><h3>כותרת</h3></body></html>".to_string(),
        };
        let doc = page.html();
        let h3 = crate::html::select_one(&doc, "h3").unwrap().unwrap();
        assert_eq!(crate::html::trimmed_text(h3), "כותרת");
    }

    #[tokio::test]
    async fn test_get_reports_final_url_after_redirect() {
        let base = serve().await;
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let page = fetcher.get(&format!("{base}/old")).await.unwrap();
        assert_eq!(page.url.path(), "/page");
        assert!(page.body.contains("כותרת"));
    }

    #[tokio::test]
    async fn test_get_html_parses_document() {
        let base = serve().await;
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let doc = fetcher.get_html(&format!("{base}/page")).await.unwrap();
        let h3 = crate::html::select_one(&doc, "h3").unwrap().unwrap();
        assert_eq!(crate::html::trimmed_text(h3), "כותרת");
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let base = serve().await;
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let err = fetcher.get(&format!("{base}/missing")).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Http(_)));
    }
}
