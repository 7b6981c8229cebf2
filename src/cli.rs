//! Command-line interface definitions for newslib.
//!
//! Options can be given as flags; the config file path can also come from
//! the environment.

use clap::{Parser, Subcommand};

/// Scrape Israeli news sites: front pages, article metadata and RSS feeds.
///
/// # Examples
///
/// ```sh
/// # Front pages of every source, printed as JSON
/// newslib front-page
///
/// # Two sources with article metadata, written to ./json/<date>/<edition>.json
/// newslib front-page -s ynet -s walla --metadata -j ./json
///
/// # One article's metadata
/// newslib article -s haaretz https://www.haaretz.co.il/news/politics/...
///
/// # Breaking news feed
/// newslib feed -s maariv --flashes
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWSLIB_CONFIG", global = true)]
    pub config: Option<String>,

    /// HTTP timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available sources and their feeds
    Sources,

    /// Scrape homepages for their top story and substories
    FrontPage {
        /// Sources to scrape (repeatable); defaults to the config file's list, then all
        #[arg(short, long = "source")]
        sources: Vec<String>,

        /// Also fetch every article for category, times, tags and premium status
        #[arg(short, long)]
        metadata: bool,

        /// Article pages fetched at once with --metadata (overrides the config file)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Write the edition JSON under this directory instead of printing it
        #[arg(short, long)]
        json_output_dir: Option<String>,
    },

    /// Resolve one article's metadata
    Article {
        /// Source the article belongs to
        #[arg(short, long)]
        source: String,

        /// Article URL
        url: String,
    },

    /// Read a source's RSS feed
    Feed {
        /// Source whose feed to read
        #[arg(short, long)]
        source: String,

        /// Read the breaking-news feed instead of the main one
        #[arg(long)]
        flashes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_page_parsing() {
        let cli = Cli::parse_from([
            "newslib",
            "front-page",
            "-s",
            "ynet",
            "--source",
            "walla",
            "--metadata",
            "--json-output-dir",
            "./json",
        ]);

        match cli.command {
            Command::FrontPage {
                sources,
                metadata,
                json_output_dir,
                concurrency,
            } => {
                assert_eq!(sources, vec!["ynet", "walla"]);
                assert!(metadata);
                assert_eq!(json_output_dir.as_deref(), Some("./json"));
                assert_eq!(concurrency, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "newslib",
            "feed",
            "-s",
            "maariv",
            "--flashes",
            "--config",
            "/tmp/newslib.yaml",
            "--timeout-secs",
            "5",
        ]);

        assert_eq!(cli.config.as_deref(), Some("/tmp/newslib.yaml"));
        assert_eq!(cli.timeout_secs, Some(5));
        assert!(matches!(
            cli.command,
            Command::Feed { ref source, flashes: true } if source == "maariv"
        ));
    }

    #[test]
    fn test_article_positional_url() {
        let cli = Cli::parse_from([
            "newslib",
            "article",
            "--source",
            "n12",
            "https://www.n12.co.il/news/politics/Article-1.htm",
        ]);
        assert!(matches!(cli.command, Command::Article { .. }));
    }
}
