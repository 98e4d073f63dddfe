//! Shared REST plumbing

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tmbridge_core::error::{ConfigError, ReportError, Result};
use tracing::debug;
use url::Url;

use crate::auth::AuthHeader;

/// Map an existence lookup status: 200 found, 404 missing, anything else is an error
pub fn lookup_status(status: StatusCode) -> Option<bool> {
    match status {
        StatusCode::OK => Some(true),
        StatusCode::NOT_FOUND => Some(false),
        _ => None,
    }
}

/// Authenticated JSON client bound to one base URL
///
/// Endpoints are addressed by path segments appended to the base URL. Every
/// segment is percent-encoded, so a key containing `/`, `?` or `#` stays a
/// single segment.
#[derive(Debug, Clone)]
pub struct RestClient {
    system: &'static str,
    base_url: Url,
    auth: AuthHeader,
    client: Client,
}

impl RestClient {
    /// Create a client; `base_url` may or may not end with a slash
    pub fn new(system: &'static str, base_url: &str, auth: AuthHeader, client: Client) -> Result<Self> {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: format!("{} base url", system),
            message,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid(format!("{} cannot carry a path", base_url)).into());
        }

        Ok(Self {
            system,
            base_url,
            auth,
            client,
        })
    }

    /// Get the system name
    pub fn system(&self) -> &'static str {
        self.system
    }

    /// Full URL for the given path segments below the base URL
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot-be-a-base URLs are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(system = self.system, %method, %url, "sending request");
        self.auth
            .apply(self.client.request(method, url))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response> {
        request.send().await.map_err(|e| {
            ReportError::transport(self.system, format!("request to {} failed", path), e)
        })
    }

    /// GET a resource and report whether it exists
    pub async fn exists(&self, segments: &[&str]) -> Result<bool> {
        let url = self.url(segments);
        let path = url.path().to_string();
        let response = self.send(self.request(Method::GET, url), &path).await?;
        let status = response.status();
        debug!(system = self.system, path = %path, status = status.as_u16(), "lookup response");

        match lookup_status(status) {
            Some(found) => Ok(found),
            None => Err(self.api_error(response).await),
        }
    }

    /// GET a resource and deserialize it, ignoring unknown fields
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments);
        let path = url.path().to_string();
        let response = self.send(self.request(Method::GET, url), &path).await?;
        let response = self.ensure_success(response).await?;
        let body = response.bytes().await.map_err(|e| {
            ReportError::transport(self.system, format!("reading {} failed", path), e)
        })?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a JSON body, discarding the response body
    pub async fn post_json<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        let url = self.url(segments);
        let path = url.path().to_string();
        let request = self.request(Method::POST, url).json(body);
        let response = self.send(request, &path).await?;
        self.ensure_success(response).await?;
        Ok(())
    }

    /// POST a JSON body and deserialize the response, ignoring unknown fields.
    /// An empty response body yields `T::default()`.
    pub async fn post_json_for<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let url = self.url(segments);
        let path = url.path().to_string();
        let request = self.request(Method::POST, url).json(body);
        let response = self.send(request, &path).await?;
        let response = self.ensure_success(response).await?;
        let body = response.bytes().await.map_err(|e| {
            ReportError::transport(self.system, format!("reading {} failed", path), e)
        })?;
        if body.is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn ensure_success(&self, response: Response) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.api_error(response).await)
        }
    }

    async fn api_error(&self, response: Response) -> ReportError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ReportError::Api {
            system: self.system.to_string(),
            status,
            message,
        }
    }
}
