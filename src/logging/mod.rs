//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output for development
//! - Optional JSON file logging with rotation

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
