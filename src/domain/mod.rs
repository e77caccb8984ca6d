//! Domain models and types for Beacon.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Command identifiers** ([`CommandName`]) for the analytics service
//! - **Report models** ([`Report`], [`ExportManifest`])
//! - **Error types** ([`BeaconError`], [`ConnectorError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use beacon::domain::{BeaconError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(BeaconError::Export("nothing staged".to_string()))
//! }
//! ```

pub mod command;
pub mod errors;
pub mod report;
pub mod result;

// Re-export commonly used types for convenience
pub use command::CommandName;
pub use errors::{BeaconError, ConnectorError};
pub use report::{ExportManifest, Report};
pub use result::Result;
