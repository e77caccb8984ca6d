//! Configuration schema types
//!
//! This module defines the configuration structure for Beacon.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Beacon configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Export staging settings
    pub export: ExportConfig,

    /// Analytics connector settings
    pub connector: ConnectorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BeaconConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.connector.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (collect and report, but stage nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export staging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory containing report files (*.json) to stage
    pub source_dir: String,

    /// Directory where staged archives and manifests are written
    pub staging_dir: String,

    /// Prefix for staged archive file names
    #[serde(default = "default_archive_prefix")]
    pub archive_prefix: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.source_dir.is_empty() {
            return Err("export.source_dir cannot be empty".to_string());
        }
        if self.staging_dir.is_empty() {
            return Err("export.staging_dir cannot be empty".to_string());
        }
        if self.archive_prefix.is_empty() {
            return Err("export.archive_prefix cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Analytics connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL of the analytics service
    pub base_url: String,

    /// API token for authenticating command dispatch
    /// Stored securely in memory and automatically zeroized on drop
    pub api_token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ConnectorConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("connector.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("connector.base_url must start with http:// or https://".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!(
                "connector.base_url is not a valid URL: {}",
                self.base_url
            ));
        }

        if self.api_token.expose_secret().is_empty() {
            return Err("connector.api_token cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("connector.timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log file rotation strategy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".into());
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "beacon".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_archive_prefix() -> String {
    "export".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn valid_config() -> BeaconConfig {
        BeaconConfig {
            application: ApplicationConfig {
                name: "beacon".to_string(),
                log_level: "info".to_string(),
                dry_run: false,
            },
            export: ExportConfig {
                source_dir: "/var/beacon/reports".to_string(),
                staging_dir: "/var/beacon/staging".to_string(),
                archive_prefix: "export".to_string(),
            },
            connector: ConnectorConfig {
                base_url: "https://analytics.example.com".to_string(),
                api_token: secret_string("token-123".to_string()),
                timeout_seconds: 30,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_source_dir_rejected() {
        let mut config = valid_config();
        config.export.source_dir = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("source_dir"));
    }

    #[test]
    fn test_connector_url_scheme_required() {
        let mut config = valid_config();
        config.connector.base_url = "analytics.example.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("http"));
    }

    #[test]
    fn test_empty_api_token_rejected() {
        let mut config = valid_config();
        config.connector.api_token = secret_string(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.connector.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
