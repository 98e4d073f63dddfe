//! Zephyr Scale Cloud wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tmbridge_core::ExecutionResult;

/// Body of `POST /testexecutions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZephyrExecution {
    pub project_key: String,
    pub test_case_key: String,
    pub test_cycle_key: String,
    pub status_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    pub actual_start_date: DateTime<Utc>,
    pub actual_end_date: DateTime<Utc>,
    pub execution_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_by_id: Option<String>,
    pub comment: String,
}

impl From<&ExecutionResult> for ZephyrExecution {
    fn from(execution: &ExecutionResult) -> Self {
        Self {
            project_key: execution.project_key.clone(),
            test_case_key: execution.test_case_key.clone(),
            test_cycle_key: execution.test_cycle_key.clone(),
            status_name: execution.status.as_str().to_string(),
            environment_name: execution.environment.clone(),
            actual_start_date: execution.actual_start_date,
            actual_end_date: execution.actual_end_date,
            execution_time: execution.execution_time,
            executed_by_id: execution.executed_by.clone(),
            comment: execution.comment.clone(),
        }
    }
}

/// Response of `POST /testexecutions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedResource {
    pub id: Option<u64>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tmbridge_core::{ExecutionStatus, TestRecord};

    #[test]
    fn test_wire_format() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = TestRecord::new("t", start, start + Duration::milliseconds(1500));
        let execution = ExecutionResult::from_record(
            "ABC",
            "ABC-T1",
            &record,
            ExecutionStatus::Fail,
            "failed".to_string(),
        )
        .with_environment(Some("sandbox".to_string()))
        .for_cycle("ABC-R1");

        let json = serde_json::to_value(ZephyrExecution::from(&execution)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "projectKey": "ABC",
                "testCaseKey": "ABC-T1",
                "testCycleKey": "ABC-R1",
                "statusName": "Fail",
                "environmentName": "sandbox",
                "actualStartDate": "2024-03-01T12:00:00Z",
                "actualEndDate": "2024-03-01T12:00:01.500Z",
                "executionTime": 1500,
                "comment": "failed"
            })
        );
    }

    #[test]
    fn test_created_resource_is_lenient() {
        let created: CreatedResource = serde_json::from_str(
            r#"{"id":42,"self":"https://api.zephyrscale.smartbear.com/v2/testexecutions/42","key":"ABC-E1"}"#,
        )
        .unwrap();
        assert_eq!(created.id, Some(42));
    }
}
