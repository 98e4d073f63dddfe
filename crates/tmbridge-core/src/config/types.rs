//! Configuration types

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;

use super::defaults::DEFAULT_ZEPHYR_URL;

/// Main configuration for tmbridge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TM4J (Jira Server / Data Center) reporting
    pub tm4j: Tm4jConfig,

    /// Zephyr Scale Cloud reporting
    pub zephyr: ZephyrConfig,
}

/// TM4J reporter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tm4jConfig {
    /// Whether results are published at all
    pub enabled: bool,

    /// Jira project key (e.g., "ABC")
    #[serde(alias = "project_key")]
    pub project_key: Option<String>,

    /// Test cycle (test run) every result is published into
    #[serde(alias = "test_cycle_key")]
    pub test_cycle_key: Option<String>,

    /// Environment label shown in execution comments
    pub environment: Option<String>,

    /// Server connection
    pub server: Tm4jServerConfig,
}

/// TM4J server connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tm4jServerConfig {
    /// Jira base URL (e.g., "https://jira.example.com")
    pub url: Option<String>,

    /// Pre-encoded `base64(user:password)` token
    #[serde(alias = "basic_auth_token")]
    pub basic_auth_token: Option<String>,

    /// Jira user name, used with `password` when no token is given
    #[serde(alias = "user_name")]
    pub user_name: Option<String>,

    /// Jira password
    pub password: Option<String>,
}

impl Tm4jServerConfig {
    /// Resolve the Basic auth token.
    ///
    /// An explicit `basic_auth_token` wins; otherwise the token is derived from
    /// `user_name` and `password`.
    pub fn basic_auth_token(&self) -> Result<String, ConfigError> {
        if let Some(token) = non_blank(&self.basic_auth_token) {
            return Ok(token.to_string());
        }

        match (non_blank(&self.user_name), non_blank(&self.password)) {
            (Some(user), Some(password)) => Ok(BASE64.encode(format!("{}:{}", user, password))),
            _ => Err(ConfigError::InvalidCredentials(
                "tm4j.server requires basicAuthToken or userName and password".to_string(),
            )),
        }
    }
}

/// Zephyr Scale Cloud reporter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZephyrConfig {
    /// Whether results are published at all
    pub enabled: bool,

    /// Jira project key (e.g., "ABC")
    #[serde(alias = "project_key")]
    pub project_key: Option<String>,

    /// Test cycle used when none of a test's tags map to a cycle
    #[serde(alias = "default_test_cycle_key")]
    pub default_test_cycle_key: Option<String>,

    /// Tag to test cycle key mapping
    #[serde(alias = "test_cycle_keys")]
    pub test_cycle_keys: BTreeMap<String, String>,

    /// Environment label shown in comments and sent as `environmentName`
    pub environment: Option<String>,

    /// Server connection
    pub server: ZephyrServerConfig,
}

impl ZephyrConfig {
    /// Test cycle key mapped to a tag, if any
    pub fn test_cycle_key(&self, tag: &str) -> Option<&str> {
        self.test_cycle_keys.get(tag).map(String::as_str)
    }
}

/// Zephyr Scale Cloud connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZephyrServerConfig {
    /// Zephyr Scale API base URL
    pub url: String,

    /// Zephyr Scale API access token
    #[serde(alias = "bearer_token")]
    pub bearer_token: Option<String>,

    /// Jira Cloud base URL, used to look up the executing account
    #[serde(alias = "jira_url")]
    pub jira_url: Option<String>,

    /// Jira Cloud account e-mail
    pub email: Option<String>,

    /// Jira Cloud API token
    #[serde(alias = "api_token")]
    pub api_token: Option<String>,
}

impl Default for ZephyrServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ZEPHYR_URL.to_string(),
            bearer_token: None,
            jira_url: None,
            email: None,
            api_token: None,
        }
    }
}

/// Jira Cloud credentials resolved from [`ZephyrServerConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraCredentials {
    /// Jira base URL
    pub url: String,

    /// `base64(email:api_token)`
    pub basic_auth_token: String,
}

impl ZephyrServerConfig {
    /// Zephyr Scale API token
    pub fn bearer_token(&self) -> Result<String, ConfigError> {
        non_blank(&self.bearer_token)
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::InvalidCredentials("zephyr.server.bearerToken is missing".to_string())
            })
    }

    /// Jira credentials, `None` when none of the Jira fields are set.
    pub fn jira_credentials(&self) -> Result<Option<JiraCredentials>, ConfigError> {
        let fields = (
            non_blank(&self.jira_url),
            non_blank(&self.email),
            non_blank(&self.api_token),
        );

        match fields {
            (None, None, None) => Ok(None),
            (Some(url), Some(email), Some(token)) => Ok(Some(JiraCredentials {
                url: url.to_string(),
                basic_auth_token: BASE64.encode(format!("{}:{}", email, token)),
            })),
            _ => Err(ConfigError::InvalidCredentials(
                "zephyr.server needs jiraUrl, email and apiToken together".to_string(),
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_disabled() {
        let config = Config::default();
        assert!(!config.tm4j.enabled);
        assert!(!config.zephyr.enabled);
        assert_eq!(config.zephyr.server.url, DEFAULT_ZEPHYR_URL);
    }

    #[test]
    fn test_basic_auth_token_prefers_explicit_token() {
        let server = Tm4jServerConfig {
            basic_auth_token: Some("dXNlcjpwYXNz".to_string()),
            user_name: Some("other".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(server.basic_auth_token().unwrap(), "dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_auth_token_from_user_and_password() {
        let server = Tm4jServerConfig {
            user_name: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Default::default()
        };
        assert_eq!(server.basic_auth_token().unwrap(), "dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_auth_token_missing() {
        let server = Tm4jServerConfig {
            user_name: Some("user".to_string()),
            basic_auth_token: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            server.basic_auth_token(),
            Err(ConfigError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_jira_credentials_all_or_nothing() {
        let mut server = ZephyrServerConfig::default();
        assert_eq!(server.jira_credentials().unwrap(), None);

        server.jira_url = Some("https://example.atlassian.net".to_string());
        assert!(server.jira_credentials().is_err());

        server.email = Some("user".to_string());
        server.api_token = Some("pass".to_string());
        let creds = server.jira_credentials().unwrap().unwrap();
        assert_eq!(creds.url, "https://example.atlassian.net");
        assert_eq!(creds.basic_auth_token, "dXNlcjpwYXNz");
    }

    #[test]
    fn test_snake_case_aliases() {
        let yaml = r#"
tm4j:
  project_key: ABC
  test_cycle_key: ABC-C1
  server:
    user_name: jdoe
    basic_auth_token: dG9rZW4=
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tm4j.project_key.as_deref(), Some("ABC"));
        assert_eq!(config.tm4j.test_cycle_key.as_deref(), Some("ABC-C1"));
        assert_eq!(config.tm4j.server.user_name.as_deref(), Some("jdoe"));
        assert_eq!(config.tm4j.server.basic_auth_token.as_deref(), Some("dG9rZW4="));
    }

    #[test]
    fn test_camel_case_keys() {
        let yaml = r#"
zephyr:
  enabled: true
  projectKey: ABC
  defaultTestCycleKey: ABC-R1
  testCycleKeys:
    smoke: ABC-R2
  server:
    bearerToken: secret
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.zephyr.project_key.as_deref(), Some("ABC"));
        assert_eq!(config.zephyr.default_test_cycle_key.as_deref(), Some("ABC-R1"));
        assert_eq!(config.zephyr.test_cycle_key("smoke"), Some("ABC-R2"));
        assert_eq!(config.zephyr.test_cycle_key("regression"), None);
        assert_eq!(config.zephyr.server.url, DEFAULT_ZEPHYR_URL);
    }
}
