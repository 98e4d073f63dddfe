//! Reporter and remote service traits

use std::fmt::Display;

use crate::error::Result;
use crate::types::{ExecutionResult, TestRecord};

/// Trait for reporting finished tests
///
/// The surrounding test harness calls exactly one of these per test.
/// Unknown test cases are skipped silently; only transport failures
/// surface as errors.
#[async_trait::async_trait]
pub trait TestResultReporter: Send + Sync {
    /// Report a passed test
    async fn report_success(&self, record: &TestRecord) -> Result<()>;

    /// Report a failed test
    async fn report_fail(&self, record: &TestRecord, cause: &(dyn Display + Sync)) -> Result<()>;

    /// Report a disabled or skipped test
    async fn report_disabled(&self, record: &TestRecord, reason: Option<&str>) -> Result<()>;
}

/// Trait for the remote test management system
///
/// Implementations wrap a single HTTP call per method and carry their own
/// authentication.
#[async_trait::async_trait]
pub trait TestManagementService: Send + Sync {
    /// Get the system name used in logs and errors
    fn system_name(&self) -> &str;

    /// Check whether a project exists
    async fn project_exists(&self, project_key: &str) -> Result<bool>;

    /// Check whether a test case exists
    async fn test_case_exists(&self, test_case_key: &str) -> Result<bool>;

    /// Check whether a test cycle exists
    async fn test_cycle_exists(&self, test_cycle_key: &str) -> Result<bool>;

    /// Identity recorded as the executor of published results, if available
    async fn current_user(&self) -> Result<Option<String>>;

    /// Publish one execution
    async fn submit(&self, execution: &ExecutionResult) -> Result<()>;
}
