//! Core business logic for Beacon.
//!
//! # Export Workflow
//!
//! The typical export workflow:
//!
//! 1. **Collect**: Read report files from the source directory
//! 2. **Stage**: Write an NDJSON archive and checksummed manifest
//! 3. **Notify**: Dispatch `notifyDataChanged` to the analytics service
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use beacon::adapters::connector::HttpConnector;
//! use beacon::config::load_config;
//! use beacon::core::export::{ExportDataHandler, ExportNotification, ReportExportHandler};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("beacon.toml")?;
//!
//! let connector = Arc::new(HttpConnector::new(&config.connector)?);
//! let handler = ReportExportHandler::new(&config.export, config.application.dry_run);
//! let export = ExportNotification::new(handler, connector);
//!
//! let staged = export.prepare_export_data().await?;
//! println!("Data staged: {staged}");
//! # Ok(())
//! # }
//! ```

pub mod export;
