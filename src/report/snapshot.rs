use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{MatchRecord, MatchSummary};
use crate::matching::CrossrefReport;

/// Default location of the written snapshot
pub const DEFAULT_REPORT_PATH: &str = "cinema_matching_report.json";

/// Fixed cap on entries in each example list
pub const SAMPLE_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializable snapshot format
///
/// `timestamp` holds the working directory the run happened in; the field
/// name is historical and downstream consumers key on it. `created_at`
/// carries the actual RFC 3339 time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub timestamp: String,
    pub created_at: String,
    pub summary: MatchSummary,
    pub matches: Vec<MatchRecord>,
    pub sample_unmatched_scripts: Vec<String>,
    pub sample_unmatched_films: Vec<String>,
}

impl ReportSnapshot {
    /// Build a snapshot from a full report, trimming each example list to
    /// [`SAMPLE_LIMIT`] entries.
    #[must_use]
    pub fn from_report(report: &CrossrefReport) -> Self {
        let workdir = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            timestamp: workdir,
            created_at: chrono::Utc::now().to_rfc3339(),
            summary: report.summary.clone(),
            matches: report.matches.iter().take(SAMPLE_LIMIT).cloned().collect(),
            sample_unmatched_scripts: take_sample(&report.unmatched_scripts),
            sample_unmatched_films: take_sample(&report.unmatched_films),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn take_sample(items: &[String]) -> Vec<String> {
    items.iter().take(SAMPLE_LIMIT).cloned().collect()
}

/// Write a snapshot to disk as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ReportError::Serialize`] if serialization fails, or
/// [`ReportError::Write`] if the file cannot be written.
pub fn write_snapshot(path: &Path, snapshot: &ReportSnapshot) -> Result<(), ReportError> {
    let json = snapshot.to_json()?;
    std::fs::write(path, json)?;
    Ok(())
}
