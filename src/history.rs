//! Append-only search history log.
//!
//! One JSON object per line in a flat file. A durable sequence, not a
//! database: single writer assumed, readers tolerate malformed lines.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLogEntry {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub search_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_number: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to open history log file: {0}")]
    Open(#[source] std::io::Error),
    #[error("Failed to write history log entry: {0}")]
    Write(#[source] std::io::Error),
    #[error("Failed to serialize history log entry: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SearchHistoryLog {
    path: PathBuf,
}

impl SearchHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one entry as a JSON line, creating the file (and its parent
    /// directory) on first use.
    pub fn append(&self, entry: &SearchLogEntry) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(HistoryError::Open)?;
            }
        }

        let line = serde_json::to_string(entry).map_err(HistoryError::Serialize)?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(HistoryError::Open)?;

        writeln!(file, "{}", line).map_err(HistoryError::Write)?;
        Ok(())
    }

    /// Returns up to `count` of the most recent GET-method entries, newest
    /// first. A missing or empty log yields an empty list; malformed lines
    /// are skipped with a warning.
    pub fn recent(&self, count: usize) -> Vec<SearchLogEntry> {
        if count == 0 || !Path::new(&self.path).exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to read search history log: {}", e);
                return Vec::new();
            }
        };

        let mut entries: Vec<SearchLogEntry> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping malformed history log line: {}", e);
                    None
                }
            })
            .filter(|entry: &SearchLogEntry| entry.method == "GET")
            .collect();

        entries.reverse();
        entries.truncate(count);
        entries
    }
}
