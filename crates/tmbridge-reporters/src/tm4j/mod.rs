//! TM4J (Test Management for Jira, Server / Data Center) reporting
//!
//! Every result goes into the single configured test cycle, which must exist
//! when the reporter is created.
//!
//! ## Usage
//!
//! ```ignore
//! use tmbridge_reporters::tm4j;
//!
//! let reporter = tm4j::create_reporter(&config.tm4j).await?;
//! reporter.report_success(&record).await?;
//! ```

mod client;
mod model;

pub use client::Tm4jService;
pub use model::Tm4jExecution;

use std::sync::Arc;

use tmbridge_core::config::{validate_tm4j, Tm4jConfig};
use tmbridge_core::error::{ConfigError, Result};
use tmbridge_core::{
    select_reporter, ExecutionReporter, ReporterSettings, TestCycleResolver, TestResultReporter,
};

use crate::auth::AuthHeader;

/// Create the configured reporter; a no-op one when TM4J reporting is disabled
pub async fn create_reporter(config: &Tm4jConfig) -> Result<Arc<dyn TestResultReporter>> {
    select_reporter(config.enabled, || connect(config)).await
}

/// Validate the configuration and connect a live TM4J reporter
pub async fn connect(config: &Tm4jConfig) -> Result<ExecutionReporter<Tm4jService>> {
    validate_tm4j(config)?;

    let server_url = required(&config.server.url, "tm4j.server.url")?;
    let auth = AuthHeader::basic(&config.server.basic_auth_token()?)?;
    let settings = ReporterSettings {
        project_key: required(&config.project_key, "tm4j.projectKey")?,
        environment: config.environment.clone(),
        test_cycles: TestCycleResolver::Fixed(required(&config.test_cycle_key, "tm4j.testCycleKey")?),
    };

    ExecutionReporter::connect(Tm4jService::new(&server_url, auth)?, settings).await
}

fn required(value: &Option<String>, field: &str) -> Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::MissingField(field.to_string()).into())
}
