//! Environment overrides for secrets

use tracing::debug;

use super::types::Config;

/// TM4J pre-encoded Basic auth token
pub const ENV_TM4J_BASIC_AUTH_TOKEN: &str = "TMBRIDGE_TM4J_BASIC_AUTH_TOKEN";

/// TM4J password, combined with `tm4j.server.userName`
pub const ENV_TM4J_PASSWORD: &str = "TMBRIDGE_TM4J_PASSWORD";

/// Zephyr Scale API token
pub const ENV_ZEPHYR_BEARER_TOKEN: &str = "TMBRIDGE_ZEPHYR_BEARER_TOKEN";

/// Jira Cloud API token used for the executor lookup
pub const ENV_JIRA_API_TOKEN: &str = "TMBRIDGE_JIRA_API_TOKEN";

/// Apply overrides from the process environment
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_with(config, |name| std::env::var(name).ok());
}

/// Apply overrides using a custom variable lookup
pub fn apply_overrides_with<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

    if let Some(token) = get(ENV_TM4J_BASIC_AUTH_TOKEN) {
        debug!(var = ENV_TM4J_BASIC_AUTH_TOKEN, "overriding tm4j basic auth token");
        config.tm4j.server.basic_auth_token = Some(token);
    }
    if let Some(password) = get(ENV_TM4J_PASSWORD) {
        debug!(var = ENV_TM4J_PASSWORD, "overriding tm4j password");
        config.tm4j.server.password = Some(password);
    }
    if let Some(token) = get(ENV_ZEPHYR_BEARER_TOKEN) {
        debug!(var = ENV_ZEPHYR_BEARER_TOKEN, "overriding zephyr bearer token");
        config.zephyr.server.bearer_token = Some(token);
    }
    if let Some(token) = get(ENV_JIRA_API_TOKEN) {
        debug!(var = ENV_JIRA_API_TOKEN, "overriding jira api token");
        config.zephyr.server.api_token = Some(token);
    }
}
