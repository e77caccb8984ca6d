//! Report collection from the source directory
//!
//! Reports are plain JSON files dropped into the configured source directory
//! by upstream report writers. Each file holds either a JSON array of records
//! or a single record object.

use crate::domain::{BeaconError, Report, Result};
use std::path::{Path, PathBuf};

/// Collects report files from a source directory
pub struct ReportCollector {
    source_dir: PathBuf,
}

impl ReportCollector {
    /// Create a collector for the given source directory
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Collect all readable reports from the source directory
    ///
    /// Files that cannot be read or parsed are skipped with a warning so a
    /// single corrupt report does not abort the whole export. Reports are
    /// returned sorted by name for deterministic archive contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory itself cannot be read.
    pub fn collect(&self) -> Result<Vec<Report>> {
        if !self.source_dir.is_dir() {
            return Err(BeaconError::Export(format!(
                "Report source directory not found: {}",
                self.source_dir.display()
            )));
        }

        let entries = std::fs::read_dir(&self.source_dir).map_err(|e| {
            BeaconError::Export(format!(
                "Failed to read report source directory {}: {}",
                self.source_dir.display(),
                e
            ))
        })?;

        let mut reports = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BeaconError::Io(e.to_string()))?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match Self::read_report(&path) {
                Ok(report) => {
                    tracing::debug!(
                        report = %report.name,
                        records = report.record_count(),
                        "Collected report"
                    );
                    reports.push(report);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable report file"
                    );
                }
            }
        }

        reports.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!(
            source_dir = %self.source_dir.display(),
            report_count = reports.len(),
            "Report collection completed"
        );

        Ok(reports)
    }

    /// Read a single report file
    fn read_report(path: &Path) -> Result<Report> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                BeaconError::Export(format!("Invalid report file name: {}", path.display()))
            })?
            .to_string();

        let contents = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;

        // A report file is either an array of records or a single record
        let records = match value {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };

        Ok(Report::new(name, records))
    }
}
