use std::path::{Path, PathBuf};

use log::debug;

use crate::clients::entities::{PlaylistItem, PlaylistPage};
use crate::clients::errors::{Error, Result};

const DEFAULT_LOG_FILE: &str = "playlist.txt";

// Label line written above the marker timestamp. The value is part of the
// on-disk format and must not change.
const MARKER_LABEL: &str = "Date du dernier ajout :";

/// Result of one record pass over a fetched page.
#[derive(Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The log did not exist; every entry of the page was written.
    Created { entries: usize },
    /// Newer entries were found and the log was rewritten.
    Rewritten {
        /// Historical "tracks added" figure: the previous file's line count
        /// minus 2. It conflates lines and entries and does not equal the
        /// number of newly written entries; kept for output compatibility.
        reported: usize,
        /// Number of entries actually written to the new log.
        kept: usize,
    },
    /// The page holds nothing newer than the recorded marker.
    UpToDate,
}

/// Flat text log of playlist additions with a trailing timestamp marker.
///
/// Layout: one rendered line per entry in page order, a blank line, the
/// marker label, and the added-at timestamp of the last recorded entry.
/// Timestamps are compared as plain strings, which is chronologically
/// correct for the zero-padded UTC values the API returns.
pub struct PlaylistLog {
    path: PathBuf,
}

impl PlaylistLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PlaylistLog { path: path.into() }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the page, rewriting the whole file when it holds entries newer
    /// than the current marker.
    ///
    /// The log is small (bounded by playlist size), so a full rewrite is
    /// preferred over appending.
    pub async fn record(&self, page: &PlaylistPage) -> Result<RecordOutcome> {
        let Some(newest) = page.last() else {
            return Ok(RecordOutcome::UpToDate);
        };

        if !tokio::fs::try_exists(&self.path).await? {
            let contents = render(&page.items, &newest.added_at);
            tokio::fs::write(&self.path, contents).await?;
            debug!("Created playlist log at {:?}", self.path);
            return Ok(RecordOutcome::Created {
                entries: page.items.len(),
            });
        }

        let previous = tokio::fs::read_to_string(&self.path).await?;
        let marker = previous
            .lines()
            .last()
            .ok_or_else(|| Error::ParseError(format!("{:?} has no marker line", self.path)))?;

        if marker < newest.added_at.as_str() {
            let fresh: Vec<&PlaylistItem> = page
                .items
                .iter()
                .filter(|item| item.added_at.as_str() > marker)
                .collect();
            let previous_lines = previous.lines().count();

            let contents = render(fresh.iter().copied(), &newest.added_at);
            tokio::fs::write(&self.path, contents).await?;
            debug!("Rewrote playlist log with {} entries", fresh.len());
            Ok(RecordOutcome::Rewritten {
                reported: previous_lines.saturating_sub(2),
                kept: fresh.len(),
            })
        } else {
            Ok(RecordOutcome::UpToDate)
        }
    }
}

impl Default for PlaylistLog {
    fn default() -> Self {
        PlaylistLog::new(DEFAULT_LOG_FILE)
    }
}

// Render entries in order, then the marker block: a blank line, the label,
// and the timestamp of the last recorded entry with no trailing newline.
fn render<'a>(items: impl IntoIterator<Item = &'a PlaylistItem>, marker: &str) -> String {
    let mut contents = String::new();
    for item in items {
        contents.push_str(&item.render_line());
        contents.push('\n');
    }
    contents.push('\n');
    contents.push_str(MARKER_LABEL);
    contents.push('\n');
    contents.push_str(marker);
    contents
}
