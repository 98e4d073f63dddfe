//! TM4J Server REST client
//!
//! For details see the Adaptavist Test Management for Jira Server REST API
//! (`/rest/atm/1.0`). Project and user lookups go through the Jira REST API
//! of the same server.

use reqwest::Client;
use tmbridge_core::error::Result;
use tmbridge_core::{ExecutionResult, TestManagementService};
use tracing::debug;

use super::model::Tm4jExecution;
use crate::auth::AuthHeader;
use crate::http::RestClient;
use crate::jira::{JiraApi, JiraClient};

const SYSTEM: &str = "TM4J";
const ATM_API_PATH: &str = "rest/atm/1.0";

/// TM4J service
#[derive(Debug, Clone)]
pub struct Tm4jService {
    atm: RestClient,
    jira: JiraClient,
}

impl Tm4jService {
    /// Create a service for a Jira server, authenticating every call with `auth`
    pub fn new(server_url: &str, auth: AuthHeader) -> Result<Self> {
        let client = Client::new();
        let server_url = server_url.trim_end_matches('/');
        let atm = RestClient::new(
            SYSTEM,
            &format!("{}/{}", server_url, ATM_API_PATH),
            auth.clone(),
            client.clone(),
        )?;
        let jira = JiraClient::new(RestClient::new(SYSTEM, server_url, auth, client)?, JiraApi::Server);
        Ok(Self { atm, jira })
    }
}

#[async_trait::async_trait]
impl TestManagementService for Tm4jService {
    fn system_name(&self) -> &str {
        SYSTEM
    }

    async fn project_exists(&self, project_key: &str) -> Result<bool> {
        self.jira.project_exists(project_key).await
    }

    async fn test_case_exists(&self, test_case_key: &str) -> Result<bool> {
        self.atm.exists(&["testcase", test_case_key]).await
    }

    async fn test_cycle_exists(&self, test_cycle_key: &str) -> Result<bool> {
        self.atm.exists(&["testrun", test_cycle_key]).await
    }

    async fn current_user(&self) -> Result<Option<String>> {
        self.jira.executor_id().await
    }

    async fn submit(&self, execution: &ExecutionResult) -> Result<()> {
        let body = [Tm4jExecution::from(execution)];
        debug!(test_case = %execution.test_case_key, test_cycle = %execution.test_cycle_key, "posting tm4j test result");
        self.atm
            .post_json(&["testrun", execution.test_cycle_key.as_str(), "testresults"], &body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::serve;
    use chrono::Utc;
    use tmbridge_core::{ExecutionStatus, TestRecord};

    fn service(base: &str) -> Tm4jService {
        Tm4jService::new(base, AuthHeader::basic("dXNlcjpwYXNz").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_paths() {
        let (base, requests) = serve(vec![(200, "{}"), (404, ""), (200, "{}"), (404, "")]).await;
        let tm4j = service(&format!("{}/", base));

        assert!(tm4j.project_exists("ABC").await.unwrap());
        assert!(!tm4j.test_case_exists("ABC-T1").await.unwrap());
        assert!(tm4j.test_cycle_exists("ABC-C1").await.unwrap());
        assert!(!tm4j.test_case_exists("ABC-T1#frag").await.unwrap());

        let requests = requests.lock().unwrap();
        assert!(requests[0].starts_with("GET /rest/api/2/project/ABC "));
        assert!(requests[1].starts_with("GET /rest/atm/1.0/testcase/ABC-T1 "));
        assert!(requests[2].starts_with("GET /rest/atm/1.0/testrun/ABC-C1 "));
        assert!(requests[3].starts_with("GET /rest/atm/1.0/testcase/ABC-T1%23frag "));
    }

    #[tokio::test]
    async fn test_current_user_is_jira_key() {
        let (base, _) = serve(vec![(200, r#"{"key":"JIRAUSER1","name":"jdoe"}"#)]).await;
        assert_eq!(
            service(&base).current_user().await.unwrap().as_deref(),
            Some("JIRAUSER1")
        );
    }

    #[tokio::test]
    async fn test_submit_posts_single_element_array() {
        let (base, requests) = serve(vec![(201, "[{\"id\":1}]")]).await;
        let now = Utc::now();
        let record = TestRecord::new("t", now, now);
        let execution =
            ExecutionResult::from_record("ABC", "ABC-T1", &record, ExecutionStatus::Pass, "ok".to_string())
                .for_cycle("ABC-C1");

        service(&base).submit(&execution).await.unwrap();

        let requests = requests.lock().unwrap();
        assert!(requests[0].starts_with("POST /rest/atm/1.0/testrun/ABC-C1/testresults "));
        let body = requests[0].split("\r\n\r\n").nth(1).unwrap();
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json[0]["testCaseKey"], "ABC-T1");
        assert_eq!(json[0]["status"], "Pass");
    }
}
