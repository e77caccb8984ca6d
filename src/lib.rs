// Beacon - Analytics Export Staging Tool
// Copyright (c) 2026 Beacon Contributors
// Licensed under the MIT License

//! # Beacon - Analytics Export Staging Tool
//!
//! Beacon is a CLI tool that stages analytics report data for export and
//! notifies a remote analytics service that new data is available.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Collecting** report files from a source directory
//! - **Staging** reports as NDJSON archives with checksummed manifests
//! - **Notifying** the analytics service via a named-command connector
//!
//! ## Architecture
//!
//! Beacon follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (collection, staging, notification)
//! - [`adapters`] - External integrations (analytics connector)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use beacon::adapters::connector::HttpConnector;
//! use beacon::config::load_config;
//! use beacon::core::export::{ExportDataHandler, ExportNotification, ReportExportHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("beacon.toml")?;
//!
//!     // Wrap the preparation handler with change notification
//!     let connector = Arc::new(HttpConnector::new(&config.connector)?);
//!     let handler = ReportExportHandler::new(&config.export, false);
//!     let export = ExportNotification::new(handler, connector);
//!
//!     // Stage data; the connector is notified after preparation succeeds
//!     let staged = export.prepare_export_data().await?;
//!
//!     println!("Data staged: {staged}");
//!     Ok(())
//! }
//! ```
//!
//! ## Notification Semantics
//!
//! The export pipeline is an [`core::export::ExportNotification`] decorator
//! around an [`core::export::ExportDataHandler`]:
//!
//! - A preparation error propagates immediately and no notification is sent.
//! - On non-error preparation, `notifyDataChanged` is dispatched exactly
//!   once, even when nothing was staged.
//! - A connector error propagates after preparation already succeeded; the
//!   notification is fire-after-success, not guaranteed delivery.
//!
//! ## Error Handling
//!
//! Beacon uses the [`domain::BeaconError`] type for all errors:
//!
//! ```rust,no_run
//! use beacon::domain::BeaconError;
//!
//! fn example() -> Result<(), BeaconError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = beacon::config::load_config("beacon.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Beacon uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(report = "orders", "Skipping unreadable report file");
//! error!(error = "timeout", "Notification dispatch failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
