//! Result type alias for Beacon
//!
//! This module provides a convenient Result type alias that uses BeaconError
//! as the error type.

use super::errors::BeaconError;

/// Result type alias for Beacon operations
///
/// This is a convenience type alias that uses `BeaconError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use beacon::domain::result::Result;
/// use beacon::domain::errors::BeaconError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BeaconError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BeaconError>;
