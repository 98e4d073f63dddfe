//! Common types for reporting test executions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A finished test, as captured by the test harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Unique identifier of the test (e.g., the harness' test path)
    pub id: String,

    /// Test case keys in the test management system (e.g., "ABC-T1")
    pub test_case_ids: Vec<String>,

    /// Tags attached to the test
    pub tags: BTreeSet<String>,

    /// When the test started
    pub start_time: DateTime<Utc>,

    /// When the test finished
    pub end_time: DateTime<Utc>,
}

impl TestRecord {
    /// Create a record without test case ids or tags
    pub fn new(id: impl Into<String>, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            test_case_ids: Vec::new(),
            tags: BTreeSet::new(),
            start_time,
            end_time,
        }
    }

    /// Attach test case ids
    pub fn with_test_case_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_case_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Attach tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Whole milliseconds between start and end, never negative
    pub fn duration_millis(&self) -> u64 {
        let millis = (self.end_time - self.start_time).num_milliseconds();
        u64::try_from(millis).unwrap_or(0)
    }
}

/// Outcome of a single execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Test passed
    Pass,
    /// Test failed
    Fail,
    /// Test was disabled or skipped
    Blocked,
}

impl ExecutionStatus {
    /// Status name as understood by TM4J and Zephyr Scale
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Pass => "Pass",
            ExecutionStatus::Fail => "Fail",
            ExecutionStatus::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution to publish: a test case run within a test cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Jira project key
    pub project_key: String,

    /// Test case key
    pub test_case_key: String,

    /// Test cycle key
    pub test_cycle_key: String,

    /// Outcome
    pub status: ExecutionStatus,

    /// HTML comment
    pub comment: String,

    /// Environment label
    pub environment: Option<String>,

    /// When the test started
    pub actual_start_date: DateTime<Utc>,

    /// When the test finished
    pub actual_end_date: DateTime<Utc>,

    /// Duration in milliseconds
    pub execution_time: u64,

    /// Identity of the executing user, if known
    pub executed_by: Option<String>,
}

impl ExecutionResult {
    /// Build an execution for a record and test case.
    ///
    /// The test cycle is left empty; it is filled in per target cycle.
    pub fn from_record(
        project_key: impl Into<String>,
        test_case_key: impl Into<String>,
        record: &TestRecord,
        status: ExecutionStatus,
        comment: String,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            test_case_key: test_case_key.into(),
            test_cycle_key: String::new(),
            status,
            comment,
            environment: None,
            actual_start_date: record.start_time,
            actual_end_date: record.end_time,
            execution_time: record.duration_millis(),
            executed_by: None,
        }
    }

    /// Set the environment label
    pub fn with_environment(mut self, environment: Option<String>) -> Self {
        self.environment = environment;
        self
    }

    /// Set the executor
    pub fn with_executed_by(mut self, executed_by: Option<String>) -> Self {
        self.executed_by = executed_by;
        self
    }

    /// Copy of this execution targeting another test cycle
    pub fn for_cycle(&self, test_cycle_key: impl Into<String>) -> Self {
        Self {
            test_cycle_key: test_cycle_key.into(),
            ..self.clone()
        }
    }
}
