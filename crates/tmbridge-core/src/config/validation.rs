//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::{Config, Tm4jConfig, ZephyrConfig};

/// Validate configuration.
///
/// Disabled sections are skipped entirely.
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    if config.tm4j.enabled {
        validate_tm4j(&config.tm4j)?;
    }
    if config.zephyr.enabled {
        validate_zephyr(&config.zephyr)?;
    }
    debug!("configuration validation passed");
    Ok(())
}

/// Validate the TM4J section
pub fn validate_tm4j(config: &Tm4jConfig) -> Result<()> {
    require("tm4j.projectKey", &config.project_key)?;
    require("tm4j.testCycleKey", &config.test_cycle_key)?;
    let url = require("tm4j.server.url", &config.server.url)?;
    validate_url("tm4j.server.url", url)?;
    config.server.basic_auth_token()?;
    Ok(())
}

/// Validate the Zephyr section
pub fn validate_zephyr(config: &ZephyrConfig) -> Result<()> {
    require("zephyr.projectKey", &config.project_key)?;
    require("zephyr.defaultTestCycleKey", &config.default_test_cycle_key)?;
    validate_url("zephyr.server.url", &config.server.url)?;
    config.server.bearer_token()?;

    if let Some(jira) = config.server.jira_credentials()? {
        validate_url("zephyr.server.jiraUrl", &jira.url)?;
    }

    for (tag, key) in &config.test_cycle_keys {
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("zephyr.testCycleKeys.{}", tag),
                message: "test cycle key cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn require<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingField(field.to_string()).into())
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("not a valid URL: {}", e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "must use http or https".to_string(),
        }
        .into());
    }

    Ok(())
}
