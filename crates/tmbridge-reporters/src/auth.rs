//! Authorization headers
//!
//! TM4J and Jira use Basic auth, Zephyr Scale Cloud uses a bearer token.
//! Headers are validated when built so a bad secret fails reporter
//! construction instead of the first request.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;
use tmbridge_core::error::{ConfigError, Result};

/// Authorization scheme and its credential
#[derive(Clone)]
pub struct AuthHeader {
    value: HeaderValue,
}

impl AuthHeader {
    /// Basic auth from a `base64(user:password)` token
    pub fn basic(token: &str) -> Result<Self> {
        Self::build("Basic", token)
    }

    /// Bearer token auth
    pub fn bearer(token: &str) -> Result<Self> {
        Self::build("Bearer", token)
    }

    fn build(scheme: &str, token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::InvalidCredentials(format!("{} token is empty", scheme)).into());
        }

        let mut value = HeaderValue::from_str(&format!("{} {}", scheme, token)).map_err(|_| {
            ConfigError::InvalidCredentials(format!(
                "{} token contains characters not allowed in a header",
                scheme
            ))
        })?;
        value.set_sensitive(true);
        Ok(Self { value })
    }

    /// Header value, e.g. `Bearer abc`
    pub fn header_value(&self) -> &HeaderValue {
        &self.value
    }

    /// Add the header to a request
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, self.value.clone())
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // sensitive values print as "Sensitive"
        f.debug_struct("AuthHeader").field("value", &self.value).finish()
    }
}
