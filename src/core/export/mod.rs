//! Export staging and notification
//!
//! This module provides the core export logic for Beacon, including:
//! - Report collection from the source directory
//! - Archive staging with checksummed manifests
//! - Change notification after successful preparation

pub mod collector;
pub mod handler;
pub mod notification;

pub use collector::ReportCollector;
pub use handler::{ExportDataHandler, ReportExportHandler};
pub use notification::ExportNotification;
