//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "tmbridge.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "tmbridge.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".tmbridge.yaml";

/// Zephyr Scale Cloud API base URL
pub const DEFAULT_ZEPHYR_URL: &str = "https://api.zephyrscale.smartbear.com/v2";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".tmbridge.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tmbridge configuration
# Secrets may be supplied through TMBRIDGE_* environment variables instead.

tm4j:
  enabled: false
  projectKey: ABC
  testCycleKey: ABC-C1
  environment: sandbox
  server:
    url: https://jira.example.com
    userName: jira-user
    # password: set TMBRIDGE_TM4J_PASSWORD

zephyr:
  enabled: false
  projectKey: ABC
  defaultTestCycleKey: ABC-R1
  testCycleKeys:
    smoke: ABC-R2
  environment: sandbox
  server:
    url: https://api.zephyrscale.smartbear.com/v2
    # bearerToken: set TMBRIDGE_ZEPHYR_BEARER_TOKEN
    jiraUrl: https://example.atlassian.net
    email: jira-user@example.com
    # apiToken: set TMBRIDGE_JIRA_API_TOKEN
"#;
