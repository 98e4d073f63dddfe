//! TM4J wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tmbridge_core::ExecutionResult;

/// Test result as accepted by `POST /testrun/{key}/testresults`
///
/// The environment label only appears in the comment; TM4J checks an
/// `environment` field against the project's configured environments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tm4jExecution {
    pub project_key: String,
    pub test_case_key: String,
    pub status: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_key: Option<String>,
    pub actual_start_date: DateTime<Utc>,
    pub actual_end_date: DateTime<Utc>,
    pub execution_time: u64,
}

impl From<&ExecutionResult> for Tm4jExecution {
    fn from(execution: &ExecutionResult) -> Self {
        Self {
            project_key: execution.project_key.clone(),
            test_case_key: execution.test_case_key.clone(),
            status: execution.status.as_str().to_string(),
            comment: execution.comment.clone(),
            user_key: execution.executed_by.clone(),
            actual_start_date: execution.actual_start_date,
            actual_end_date: execution.actual_end_date,
            execution_time: execution.execution_time,
        }
    }
}
