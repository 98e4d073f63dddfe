//! Reporters publishing test executions
//!
//! [`ExecutionReporter`] does the actual work against a
//! [`TestManagementService`]; [`NoopReporter`] stands in when reporting is
//! disabled and [`select_reporter`] picks between the two.

mod cycles;
mod noop;
mod select;

pub use cycles::TestCycleResolver;
pub use noop::NoopReporter;
pub use select::select_reporter;

use std::fmt::Display;

use tracing::{debug, info, instrument, warn};

use crate::comment::CommentFormatter;
use crate::error::{ConfigError, Result};
use crate::traits::{TestManagementService, TestResultReporter};
use crate::types::{ExecutionResult, ExecutionStatus, TestRecord};

/// Static settings of a live reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterSettings {
    /// Jira project key
    pub project_key: String,

    /// Environment label
    pub environment: Option<String>,

    /// Target test cycles
    pub test_cycles: TestCycleResolver,
}

/// Reporter publishing executions through a [`TestManagementService`]
pub struct ExecutionReporter<S> {
    service: S,
    settings: ReporterSettings,
    formatter: CommentFormatter,
    executed_by: Option<String>,
}

impl<S: TestManagementService> ExecutionReporter<S> {
    /// Create a reporter, verifying the configured project and default test
    /// cycle against the remote system.
    ///
    /// Fails with a [`ConfigError`] if either is unknown. The executing user
    /// is resolved once here and reused for every execution.
    pub async fn connect(service: S, settings: ReporterSettings) -> Result<Self> {
        let system = service.system_name().to_string();
        debug!(system = %system, project = %settings.project_key, "validating reporter settings");

        if !service.project_exists(&settings.project_key).await? {
            return Err(ConfigError::ProjectNotFound(settings.project_key.clone()).into());
        }

        let default_cycle = settings.test_cycles.default_key();
        if !service.test_cycle_exists(default_cycle).await? {
            return Err(ConfigError::TestCycleNotFound(default_cycle.to_string()).into());
        }

        let executed_by = service.current_user().await?;
        info!(
            system = %system,
            project = %settings.project_key,
            test_cycle = %default_cycle,
            executor = executed_by.as_deref().unwrap_or("-"),
            "reporter connected"
        );

        Ok(Self {
            formatter: CommentFormatter::new(settings.environment.as_deref()),
            service,
            settings,
            executed_by,
        })
    }

    /// Get the underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Get the settings
    pub fn settings(&self) -> &ReporterSettings {
        &self.settings
    }

    #[instrument(skip_all, fields(test = %record.id, status = %status))]
    async fn report(&self, record: &TestRecord, status: ExecutionStatus, comment: String) -> Result<()> {
        let test_case_keys = self.existing_test_case_keys(record).await?;
        if test_case_keys.is_empty() {
            debug!("no known test case ids, nothing to publish");
            return Ok(());
        }

        let test_cycle_keys = self.resolve_test_cycles(record).await?;

        for test_case_key in test_case_keys {
            let execution = ExecutionResult::from_record(
                self.settings.project_key.as_str(),
                test_case_key,
                record,
                status,
                comment.clone(),
            )
            .with_environment(self.settings.environment.clone())
            .with_executed_by(self.executed_by.clone());

            for test_cycle_key in &test_cycle_keys {
                self.publish(&execution.for_cycle(test_cycle_key.as_str())).await?;
            }
        }

        Ok(())
    }

    async fn publish(&self, execution: &ExecutionResult) -> Result<()> {
        self.service.submit(execution).await?;
        info!(
            system = self.service.system_name(),
            test_case = %execution.test_case_key,
            test_cycle = %execution.test_cycle_key,
            "Test result published"
        );
        Ok(())
    }

    async fn existing_test_case_keys<'r>(&self, record: &'r TestRecord) -> Result<Vec<&'r str>> {
        let mut keys = Vec::with_capacity(record.test_case_ids.len());
        for id in &record.test_case_ids {
            if self.service.test_case_exists(id).await? {
                keys.push(id.as_str());
            } else {
                warn!(test_case = %id, "Test case ID not found");
            }
        }
        Ok(keys)
    }

    /// Tag-mapped cycles that exist remotely, or the default cycle
    async fn resolve_test_cycles(&self, record: &TestRecord) -> Result<Vec<String>> {
        let resolver = &self.settings.test_cycles;
        let default = resolver.default_key();

        let mut keys = Vec::new();
        for key in resolver.mapped_keys(&record.tags) {
            if key == default || self.service.test_cycle_exists(key).await? {
                keys.push(key.to_string());
            } else {
                warn!(test_cycle = %key, "Test cycle mapped from tag not found, skipping");
            }
        }

        if keys.is_empty() {
            debug!(test_cycle = %default, "using default test cycle");
            keys.push(default.to_string());
        }
        Ok(keys)
    }
}

#[async_trait::async_trait]
impl<S: TestManagementService> TestResultReporter for ExecutionReporter<S> {
    async fn report_success(&self, record: &TestRecord) -> Result<()> {
        let comment = self.formatter.base(&record.id);
        self.report(record, ExecutionStatus::Pass, comment).await
    }

    async fn report_fail(&self, record: &TestRecord, cause: &(dyn Display + Sync)) -> Result<()> {
        let comment = self.formatter.failure(&record.id, cause);
        self.report(record, ExecutionStatus::Fail, comment).await
    }

    async fn report_disabled(&self, record: &TestRecord, reason: Option<&str>) -> Result<()> {
        let comment = self.formatter.disabled(&record.id, reason);
        self.report(record, ExecutionStatus::Blocked, comment).await
    }
}
