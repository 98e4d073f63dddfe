//! Zephyr Scale Cloud REST client
//!
//! For details see the Zephyr Scale Cloud REST API v2 documentation.
//! The executing account is looked up in Jira Cloud when credentials for it
//! are configured.

use reqwest::Client;
use tmbridge_core::error::Result;
use tmbridge_core::{ExecutionResult, TestManagementService};
use tracing::debug;

use super::model::{CreatedResource, ZephyrExecution};
use crate::auth::AuthHeader;
use crate::http::RestClient;
use crate::jira::{JiraApi, JiraClient};

const SYSTEM: &str = "Zephyr Scale";

/// Zephyr Scale Cloud service
#[derive(Debug, Clone)]
pub struct ZephyrService {
    api: RestClient,
    jira: Option<JiraClient>,
}

impl ZephyrService {
    /// Create a service for the Zephyr Scale API at `api_url`
    pub fn new(api_url: &str, auth: AuthHeader) -> Result<Self> {
        Ok(Self {
            api: RestClient::new(SYSTEM, api_url, auth, Client::new())?,
            jira: None,
        })
    }

    /// Resolve the executing account through Jira Cloud
    pub fn with_jira(mut self, jira_url: &str, auth: AuthHeader) -> Result<Self> {
        let rest = RestClient::new("Jira", jira_url, auth, Client::new())?;
        self.jira = Some(JiraClient::new(rest, JiraApi::Cloud));
        Ok(self)
    }
}

#[async_trait::async_trait]
impl TestManagementService for ZephyrService {
    fn system_name(&self) -> &str {
        SYSTEM
    }

    async fn project_exists(&self, project_key: &str) -> Result<bool> {
        self.api.exists(&["projects", project_key]).await
    }

    async fn test_case_exists(&self, test_case_key: &str) -> Result<bool> {
        self.api.exists(&["testcases", test_case_key]).await
    }

    async fn test_cycle_exists(&self, test_cycle_key: &str) -> Result<bool> {
        self.api.exists(&["testcycles", test_cycle_key]).await
    }

    async fn current_user(&self) -> Result<Option<String>> {
        match &self.jira {
            Some(jira) => jira.executor_id().await,
            None => Ok(None),
        }
    }

    async fn submit(&self, execution: &ExecutionResult) -> Result<()> {
        let created = self.create_execution(execution).await?;
        debug!(
            test_case = %execution.test_case_key,
            test_cycle = %execution.test_cycle_key,
            id = ?created.id,
            "zephyr execution created"
        );
        Ok(())
    }
}

impl ZephyrService {
    /// Publish an execution and return the created resource
    pub async fn create_execution(&self, execution: &ExecutionResult) -> Result<CreatedResource> {
        let body = ZephyrExecution::from(execution);
        self.api.post_json_for(&["testexecutions"], &body).await
    }
}
