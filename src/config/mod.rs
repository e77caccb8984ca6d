//! Configuration management for Beacon.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Beacon uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`BEACON_*` prefix)
//! - Default values for optional settings
//! - Type-safe configuration structs with per-section validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use beacon::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("beacon.toml")?;
//!
//! println!("Source dir: {}", config.export.source_dir);
//! println!("Analytics service: {}", config.connector.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "beacon"
//! log_level = "info"
//!
//! [export]
//! source_dir = "/var/beacon/reports"
//! staging_dir = "/var/beacon/staging"
//!
//! [connector]
//! base_url = "https://analytics.example.com"
//! api_token = "${BEACON_CONNECTOR_API_TOKEN}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BeaconConfig, ConnectorConfig, ExportConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
