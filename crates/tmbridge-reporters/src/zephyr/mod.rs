//! Zephyr Scale Cloud reporting
//!
//! Results are published into the test cycles mapped from the test's tags.
//! When no tag maps to a cycle, the default cycle is used. The default cycle
//! must exist when the reporter is created; tag-mapped cycles are checked
//! each time they are used and skipped with a warning when missing.
//!
//! ## Usage
//!
//! ```ignore
//! use tmbridge_reporters::zephyr;
//!
//! let reporter = zephyr::create_reporter(&config.zephyr).await?;
//! reporter.report_fail(&record, &error).await?;
//! ```

mod client;
mod model;

pub use client::ZephyrService;
pub use model::{CreatedResource, ZephyrExecution};

use std::sync::Arc;

use tmbridge_core::config::{validate_zephyr, ZephyrConfig};
use tmbridge_core::error::{ConfigError, Result};
use tmbridge_core::{
    select_reporter, ExecutionReporter, ReporterSettings, TestCycleResolver, TestResultReporter,
};

use crate::auth::AuthHeader;

/// Create the configured reporter; a no-op one when Zephyr reporting is disabled
pub async fn create_reporter(config: &ZephyrConfig) -> Result<Arc<dyn TestResultReporter>> {
    select_reporter(config.enabled, || connect(config)).await
}

/// Validate the configuration and connect a live Zephyr Scale reporter
pub async fn connect(config: &ZephyrConfig) -> Result<ExecutionReporter<ZephyrService>> {
    validate_zephyr(config)?;

    let mut service = ZephyrService::new(
        &config.server.url,
        AuthHeader::bearer(&config.server.bearer_token()?)?,
    )?;
    if let Some(jira) = config.server.jira_credentials()? {
        service = service.with_jira(&jira.url, AuthHeader::basic(&jira.basic_auth_token)?)?;
    }

    let project_key = config
        .project_key
        .clone()
        .ok_or_else(|| ConfigError::MissingField("zephyr.projectKey".to_string()))?;
    let default = config
        .default_test_cycle_key
        .clone()
        .ok_or_else(|| ConfigError::MissingField("zephyr.defaultTestCycleKey".to_string()))?;

    let settings = ReporterSettings {
        project_key,
        environment: config.environment.clone(),
        test_cycles: TestCycleResolver::Tagged {
            default,
            by_tag: config.test_cycle_keys.clone(),
        },
    };

    ExecutionReporter::connect(service, settings).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::serve;
    use chrono::{Duration, TimeZone, Utc};
    use tmbridge_core::{ReportError, TestRecord};

    fn config(url: &str) -> ZephyrConfig {
        let mut config = ZephyrConfig {
            enabled: true,
            project_key: Some("ABC".to_string()),
            default_test_cycle_key: Some("ABC-R1".to_string()),
            environment: Some("staging".to_string()),
            ..Default::default()
        };
        config
            .test_cycle_keys
            .insert("smoke".to_string(), "ABC-R2".to_string());
        config.server.url = url.to_string();
        config.server.bearer_token = Some("zephyr-token".to_string());
        config
    }

    fn record() -> TestRecord {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        TestRecord::new("suite::checkout", start, start + Duration::milliseconds(1500))
            .with_test_case_ids(["ABC-T1"])
    }

    #[tokio::test]
    async fn test_disabled_reporter_never_connects() {
        let mut config = config("http://127.0.0.1:9");
        config.enabled = false;
        config.server.bearer_token = None;

        let reporter = create_reporter(&config).await.unwrap();
        reporter.report_success(&record()).await.unwrap();
        reporter.report_disabled(&record(), Some("flaky")).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_bearer_token_is_fatal() {
        let mut config = config("http://127.0.0.1:9");
        config.server.bearer_token = None;
        let err = create_reporter(&config).await.err().unwrap();
        assert!(matches!(err, ReportError::Config(ConfigError::InvalidCredentials(_))));
    }

    #[tokio::test]
    async fn test_unknown_project_is_fatal() {
        let (base, _) = serve(vec![(404, "")]).await;
        let err = connect(&config(&base)).await.err().unwrap();
        assert!(matches!(
            err,
            ReportError::Config(ConfigError::ProjectNotFound(ref k)) if k == "ABC"
        ));
    }

    #[tokio::test]
    async fn test_tagged_submission() {
        let (base, requests) = serve(vec![
            (200, "{}"),             // project
            (200, "{}"),             // default cycle
            (200, "{}"),             // test case
            (200, "{}"),             // ABC-R2 mapped from smoke
            (201, r#"{"id":7}"#),    // execution
        ])
        .await;

        let reporter = connect(&config(&base)).await.unwrap();
        let record = record().with_tags(["regression", "smoke"]);
        reporter.report_fail(&record, &"assertion failed").await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 5);
        assert!(requests[3].starts_with("GET /testcycles/ABC-R2 "));
        assert!(requests[4].starts_with("POST /testexecutions "));

        let body = requests[4].split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["testCycleKey"], "ABC-R2");
        assert_eq!(json["statusName"], "Fail");
        assert_eq!(json["environmentName"], "staging");
        assert_eq!(json["executionTime"], 1500);
        assert!(json["executedById"].is_null());
        assert!(json["comment"]
            .as_str()
            .unwrap()
            .ends_with("Reason of failure: assertion failed"));
    }

    #[tokio::test]
    async fn test_untagged_goes_to_default_cycle() {
        let (base, requests) = serve(vec![
            (200, "{}"),   // project
            (200, "{}"),   // default cycle
            (200, "{}"),   // test case
            (201, "{}"),   // execution
        ])
        .await;

        let reporter = connect(&config(&base)).await.unwrap();
        reporter.report_success(&record()).await.unwrap();

        let requests = requests.lock().unwrap();
        let body = requests[3].split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["testCycleKey"], "ABC-R1");
        assert_eq!(json["statusName"], "Pass");
    }
}
