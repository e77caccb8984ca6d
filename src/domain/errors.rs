//! Domain error types
//!
//! This module defines the error hierarchy for Beacon. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Beacon error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export preparation errors
    #[error("Export error: {0}")]
    Export(String),

    /// Connector-related errors
    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Connector-specific errors
///
/// Errors that occur when dispatching commands to the analytics service.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Failed to connect to the analytics service
    #[error("Failed to connect to analytics service: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Command is not part of the known command set
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after: {0}")]
    RateLimited(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Invalid response from the service
    #[error("Invalid response from service: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for BeaconError {
    fn from(err: std::io::Error) -> Self {
        BeaconError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BeaconError {
    fn from(err: serde_json::Error) -> Self {
        BeaconError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BeaconError {
    fn from(err: toml::de::Error) -> Self {
        BeaconError::Configuration(format!("TOML parse error: {err}"))
    }
}
