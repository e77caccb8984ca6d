//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Beacon configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a successful load is a
        // fully validated configuration
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Report Source: {}", config.export.source_dir);
        println!("  Staging Directory: {}", config.export.staging_dir);
        println!("  Archive Prefix: {}", config.export.archive_prefix);
        println!("  Analytics Service: {}", config.connector.base_url);
        println!("  Request Timeout: {}s", config.connector.timeout_seconds);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_missing_file_returns_config_error_code() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/beacon.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
