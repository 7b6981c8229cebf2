//! Runtime configuration.
//!
//! Settings come from an optional YAML file; command-line flags override
//! individual values. Every key is optional.
//!
//! ```yaml
//! user_agent: "Mozilla/5.0 ..."
//! timeout_secs: 20
//! concurrency: 4
//! sources: [ynet, walla, haaretz]
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Article pages fetched at once when resolving metadata.
    pub concurrency: usize,
    /// Sources to scrape when none are named on the command line; empty
    /// means all of them.
    pub sources: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 20,
            concurrency: 4,
            sources: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            timeout_secs = config.timeout_secs,
            concurrency = config.concurrency,
            sources = config.sources.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}
