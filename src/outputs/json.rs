//! JSON output for scraped editions.
//!
//! Files are grouped by date and named after the edition:
//! `{json_output_dir}/{local_date}/{time_of_day}.json`. A later run in the
//! same edition window overwrites the earlier file.

use crate::error::Result;
use crate::models::{Edition, FrontPage};
use crate::utils::time_of_day;
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Wrap front pages into an [`Edition`] stamped with the current local time.
pub fn new_edition(front_pages: Vec<FrontPage>) -> Edition {
    let now = Local::now();
    Edition {
        local_date: now.date_naive().to_string(),
        time_of_day: time_of_day(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        front_pages,
    }
}

/// Write an [`Edition`] as pretty JSON, creating the dated directory.
///
/// Returns the path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.as_ref().display()))]
pub async fn write_edition(edition: &Edition, json_output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(edition)?;

    let full_json_dir = json_output_dir.as_ref().join(&edition.local_date);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join(format!("{}.json", edition.time_of_day));
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        front_pages = edition.front_pages.len(),
        "Wrote edition JSON"
    );

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Story;
    use chrono::Utc;

    fn front_page() -> FrontPage {
        FrontPage {
            source: "n12".to_string(),
            fetched_at: Utc::now(),
            top_story: Story {
                headline: "ראשית".to_string(),
                url: "https://www.n12.co.il/news/politics/Article-1.htm".to_string(),
                meta: None,
            },
            substories: vec![],
        }
    }

    #[test]
    fn test_new_edition_stamps() {
        let edition = new_edition(vec![front_page()]);
        assert_eq!(edition.local_date.len(), 10);
        assert!(["morning", "afternoon", "evening"].contains(&edition.time_of_day.as_str()));
        assert_eq!(edition.front_pages.len(), 1);
    }

    #[tokio::test]
    async fn test_write_edition_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let edition = Edition {
            local_date: "2024-03-12".to_string(),
            time_of_day: "morning".to_string(),
            local_time: "07:30:00".to_string(),
            front_pages: vec![front_page()],
        };

        let path = write_edition(&edition, tmp.path()).await.unwrap();
        assert_eq!(path, tmp.path().join("2024-03-12").join("morning.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        let back: Edition = serde_json::from_str(&written).unwrap();
        assert_eq!(back.front_pages[0].top_story.headline, "ראשית");
    }
}
