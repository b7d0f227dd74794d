//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{EventHiveError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_storage_config(&settings.storage)?;
    validate_auth_config(&settings.auth)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventHiveError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| EventHiveError::Config(format!("Invalid API base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(EventHiveError::Config(
            format!("API base URL must use http or https, got: {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(EventHiveError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate persisted state storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.dir.is_empty() {
        return Err(EventHiveError::Config(
            "Storage directory is required".to_string()
        ));
    }

    for (name, key) in [("token key", &config.token_key), ("admin flag key", &config.admin_flag_key)] {
        if key.is_empty() {
            return Err(EventHiveError::Config(format!("Storage {} is required", name)));
        }
        // Keys become file names under the storage directory
        if key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(EventHiveError::Config(
                format!("Storage {} must not contain path separators: {}", name, key)
            ));
        }
    }

    if config.token_key == config.admin_flag_key {
        return Err(EventHiveError::Config(
            "Token key and admin flag key must be distinct".to_string()
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.min_password_length == 0 {
        return Err(EventHiveError::Config(
            "Minimum password length must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventHiveError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventHiveError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
