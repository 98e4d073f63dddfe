//! Jira REST lookups
//!
//! Used for the executing user and, on Jira Server, for the project check.

use serde::Deserialize;
use tmbridge_core::error::Result;
use tracing::debug;

use crate::http::RestClient;

/// Jira REST API version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JiraApi {
    /// Jira Server / Data Center (`/rest/api/2`)
    Server,
    /// Jira Cloud (`/rest/api/3`)
    Cloud,
}

impl JiraApi {
    fn segments(&self, resource: &[&'static str]) -> Vec<&'static str> {
        let version = match self {
            JiraApi::Server => "2",
            JiraApi::Cloud => "3",
        };
        let mut segments = vec!["rest", "api", version];
        segments.extend_from_slice(resource);
        segments
    }
}

/// The logged-in Jira user; only the fields we use, the rest is ignored
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    /// User key (Server / Data Center)
    pub key: Option<String>,

    /// Account id (Cloud)
    pub account_id: Option<String>,

    /// Login name
    pub name: Option<String>,

    /// Display name
    pub display_name: Option<String>,
}

impl JiraUser {
    /// Identifier TM4J and Zephyr expect for the given API flavour
    pub fn executor_id(&self, api: JiraApi) -> Option<String> {
        match api {
            JiraApi::Server => self.key.clone().or_else(|| self.name.clone()),
            JiraApi::Cloud => self.account_id.clone(),
        }
    }
}

/// Jira REST client
#[derive(Debug, Clone)]
pub struct JiraClient {
    rest: RestClient,
    api: JiraApi,
}

impl JiraClient {
    /// Create a client on top of an authenticated [`RestClient`] pointing at the Jira base URL
    pub fn new(rest: RestClient, api: JiraApi) -> Self {
        Self { rest, api }
    }

    /// Returns the data of the logged-in user
    pub async fn myself(&self) -> Result<JiraUser> {
        let user: JiraUser = self.rest.get_json(&self.api.segments(&["myself"])).await?;
        debug!(user = ?user.display_name, "resolved jira user");
        Ok(user)
    }

    /// Executor identity of the logged-in user
    pub async fn executor_id(&self) -> Result<Option<String>> {
        Ok(self.myself().await?.executor_id(self.api))
    }

    /// Check whether a project exists
    pub async fn project_exists(&self, project_key: &str) -> Result<bool> {
        let mut segments: Vec<&str> = self.api.segments(&["project"]);
        segments.push(project_key);
        self.rest.exists(&segments).await
    }
}
