//! Report data models
//!
//! A report is a named collection of JSON records gathered from the source
//! directory. Staged exports are described by a manifest written next to the
//! archive file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named batch of report records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report name, derived from the source file stem
    pub name: String,

    /// Report records as raw JSON values
    pub records: Vec<serde_json::Value>,
}

impl Report {
    /// Create a new report
    pub fn new(name: impl Into<String>, records: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Number of records in the report
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the report carries no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Manifest describing a staged export archive
///
/// Written alongside the archive so downstream consumers can verify
/// integrity before transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Unique identifier for this export run
    pub export_id: Uuid,

    /// File name of the staged archive (relative to the staging directory)
    pub archive_file: String,

    /// Hex-encoded SHA-256 checksum of the archive bytes
    pub checksum: String,

    /// Total number of records across all reports in the archive
    pub record_count: usize,

    /// Names of the reports included in the archive
    pub reports: Vec<String>,

    /// When the archive was staged
    pub created_at: DateTime<Utc>,
}

impl ExportManifest {
    /// Create a new manifest for a staged archive
    pub fn new(
        archive_file: impl Into<String>,
        checksum: impl Into<String>,
        record_count: usize,
        reports: Vec<String>,
    ) -> Self {
        Self {
            export_id: Uuid::new_v4(),
            archive_file: archive_file.into(),
            checksum: checksum.into(),
            record_count,
            reports,
            created_at: Utc::now(),
        }
    }
}
