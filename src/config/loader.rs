//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BeaconConfig;
use crate::config::secret_string;
use crate::domain::errors::BeaconError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BeaconConfig
/// 4. Applies environment variable overrides (BEACON_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use beacon::config::loader::load_config;
///
/// let config = load_config("beacon.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BeaconConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BeaconError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BeaconError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: BeaconConfig = toml::from_str(&contents)
        .map_err(|e| BeaconError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config.validate().map_err(|e| {
        BeaconError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BeaconError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using BEACON_* prefix
///
/// Environment variables follow the pattern: BEACON_<SECTION>_<KEY>
/// For example: BEACON_CONNECTOR_BASE_URL, BEACON_EXPORT_SOURCE_DIR
fn apply_env_overrides(config: &mut BeaconConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("BEACON_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("BEACON_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Export overrides
    if let Ok(val) = std::env::var("BEACON_EXPORT_SOURCE_DIR") {
        config.export.source_dir = val;
    }
    if let Ok(val) = std::env::var("BEACON_EXPORT_STAGING_DIR") {
        config.export.staging_dir = val;
    }

    // Connector overrides
    if let Ok(val) = std::env::var("BEACON_CONNECTOR_BASE_URL") {
        config.connector.base_url = val;
    }
    if let Ok(val) = std::env::var("BEACON_CONNECTOR_API_TOKEN") {
        config.connector.api_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("BEACON_CONNECTOR_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.connector.timeout_seconds = secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars_replaces_set_variable() {
        std::env::set_var("BEACON_TEST_SUBST_TOKEN", "substituted");
        let input = r#"api_token = "${BEACON_TEST_SUBST_TOKEN}""#;
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("substituted"));
        std::env::remove_var("BEACON_TEST_SUBST_TOKEN");
    }

    #[test]
    fn test_substitute_env_vars_missing_variable_errors() {
        let input = r#"api_token = "${BEACON_TEST_DEFINITELY_NOT_SET}""#;
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("BEACON_TEST_DEFINITELY_NOT_SET"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# token = \"${BEACON_TEST_COMMENTED_OUT}\"\nname = \"beacon\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("BEACON_TEST_COMMENTED_OUT"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/beacon.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
