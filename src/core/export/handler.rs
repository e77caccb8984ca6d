//! Export data preparation
//!
//! This module defines the preparation seam ([`ExportDataHandler`]) and the
//! concrete handler that stages collected reports as an NDJSON archive with
//! a checksummed manifest.

use crate::config::ExportConfig;
use crate::core::export::collector::ReportCollector;
use crate::domain::{BeaconError, ExportManifest, Report, Result};
use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use uuid::Uuid;

/// Capability for preparing export data
///
/// Implementations stage whatever data the analytics service should pick up
/// next. The boolean result reports whether any data was staged; an error
/// means preparation itself failed.
#[async_trait]
pub trait ExportDataHandler: Send + Sync {
    /// Prepare export data for transmission to the analytics service
    ///
    /// # Returns
    ///
    /// Returns `Ok(true)` if data was staged, `Ok(false)` if there was
    /// nothing to stage.
    ///
    /// # Errors
    ///
    /// Returns an error if preparation fails.
    async fn prepare_export_data(&self) -> Result<bool>;
}

/// Export handler that stages report data as an NDJSON archive
///
/// Preparation collects reports from the source directory, writes them as
/// newline-delimited JSON into the staging directory, and records a manifest
/// carrying the archive checksum.
pub struct ReportExportHandler {
    collector: ReportCollector,
    staging_dir: PathBuf,
    archive_prefix: String,
    dry_run: bool,
}

impl ReportExportHandler {
    /// Create a handler from export configuration
    pub fn new(config: &ExportConfig, dry_run: bool) -> Self {
        Self {
            collector: ReportCollector::new(&config.source_dir),
            staging_dir: PathBuf::from(&config.staging_dir),
            archive_prefix: config.archive_prefix.clone(),
            dry_run,
        }
    }

    /// Serialize reports as newline-delimited JSON
    ///
    /// Each line carries the report name alongside the record so the archive
    /// is self-describing.
    fn render_archive(reports: &[Report]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        for report in reports {
            for record in &report.records {
                let line = serde_json::to_string(&serde_json::json!({
                    "report": report.name,
                    "record": record,
                }))?;
                buffer.extend_from_slice(line.as_bytes());
                buffer.push(b'\n');
            }
        }
        Ok(buffer)
    }

    /// Hex-encoded SHA-256 checksum of the archive bytes
    fn checksum(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write the archive and its manifest into the staging directory
    fn stage_archive(&self, reports: &[Report]) -> Result<ExportManifest> {
        let bytes = Self::render_archive(reports)?;
        let checksum = Self::checksum(&bytes);
        let record_count: usize = reports.iter().map(Report::record_count).sum();

        let export_id = Uuid::new_v4();
        let archive_file = format!(
            "{}-{}-{}.ndjson",
            self.archive_prefix,
            Utc::now().format("%Y%m%dT%H%M%S"),
            export_id.simple()
        );

        std::fs::create_dir_all(&self.staging_dir).map_err(|e| {
            BeaconError::Export(format!(
                "Failed to create staging directory {}: {}",
                self.staging_dir.display(),
                e
            ))
        })?;

        let archive_path = self.staging_dir.join(&archive_file);
        std::fs::write(&archive_path, &bytes).map_err(|e| {
            BeaconError::Export(format!(
                "Failed to write archive {}: {}",
                archive_path.display(),
                e
            ))
        })?;

        let mut manifest = ExportManifest::new(
            archive_file.clone(),
            checksum,
            record_count,
            reports.iter().map(|r| r.name.clone()).collect(),
        );
        manifest.export_id = export_id;

        let manifest_path = self.staging_dir.join(format!("{archive_file}.manifest.json"));
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(&manifest_path, manifest_json).map_err(|e| {
            BeaconError::Export(format!(
                "Failed to write manifest {}: {}",
                manifest_path.display(),
                e
            ))
        })?;

        Ok(manifest)
    }
}

#[async_trait]
impl ExportDataHandler for ReportExportHandler {
    async fn prepare_export_data(&self) -> Result<bool> {
        let reports = self.collector.collect()?;
        let reports: Vec<Report> = reports.into_iter().filter(|r| !r.is_empty()).collect();

        if reports.is_empty() {
            tracing::info!("No report data to stage");
            return Ok(false);
        }

        if self.dry_run {
            tracing::info!(
                report_count = reports.len(),
                "Dry run - skipping archive staging"
            );
            return Ok(true);
        }

        let manifest = self.stage_archive(&reports)?;

        tracing::info!(
            export_id = %manifest.export_id,
            archive = %manifest.archive_file,
            records = manifest.record_count,
            checksum = %manifest.checksum,
            "Export data staged"
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_archive_one_line_per_record() {
        let reports = vec![
            Report::new("orders", vec![json!({"id": 1}), json!({"id": 2})]),
            Report::new("customers", vec![json!({"id": 7})]),
        ];

        let bytes = ReportExportHandler::render_archive(&reports).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["report"], "orders");
        assert_eq!(first["record"]["id"], 1);
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let a = ReportExportHandler::checksum(b"payload");
        let b = ReportExportHandler::checksum(b"payload");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_checksum_differs_for_different_payloads() {
        let a = ReportExportHandler::checksum(b"payload-a");
        let b = ReportExportHandler::checksum(b"payload-b");
        assert_ne!(a, b);
    }
}
