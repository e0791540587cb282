//! Client construction and request plumbing.
//!
//! Every exported operation follows the same mechanical pattern: build a
//! request (path, query, headers, optional JSON body), attach auth, send it
//! through the shared `reqwest` client, and unmarshal the JSON result. The
//! helpers here implement that pattern once; the per-resource modules stay
//! thin wrappers.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

use wml_common::ApiErrorBody;

use crate::auth::AuthProvider;
use crate::error::{Result, WmlError};

/// Default API version date sent as the `version` query parameter.
pub const DEFAULT_VERSION: &str = "2021-06-24";

/// The space or project a call operates in.
///
/// The API requires exactly one of `space_id` / `project_id` per scoped
/// call; the enum makes the either-or explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Space(String),
    Project(String),
}

impl Scope {
    pub fn space(id: impl Into<String>) -> Self {
        Self::Space(id.into())
    }

    pub fn project(id: impl Into<String>) -> Self {
        Self::Project(id.into())
    }

    pub(crate) fn query_pair(&self) -> (&'static str, String) {
        match self {
            Scope::Space(id) => ("space_id", id.clone()),
            Scope::Project(id) => ("project_id", id.clone()),
        }
    }

    /// The (`space_id`, `project_id`) pair for request bodies.
    pub fn body_fields(&self) -> (Option<String>, Option<String>) {
        match self {
            Scope::Space(id) => (Some(id.clone()), None),
            Scope::Project(id) => (None, Some(id.clone())),
        }
    }
}

/// Retry configuration for transient failures.
///
/// Disabled by default; when enabled, a failed attempt is retried after
/// `interval * attempt` (linear backoff). Only transport timeouts/connect
/// errors and HTTP 429/503 are considered transient.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub interval: Duration,
}

impl RetryPolicy {
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            interval: Duration::from_millis(500),
        }
    }

    pub fn new(max_retries: u32, interval: Duration) -> Self {
        Self {
            max_retries,
            interval,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Filters and cursor shared by the paginated list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Only resources carrying this tag.
    pub tag_value: Option<String>,

    /// Page cursor, as extracted from a `next` link.
    pub start: Option<String>,

    /// Page size.
    pub limit: Option<u32>,
}

impl ListOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(tag) = &self.tag_value {
            query.push(("tag.value", tag.clone()));
        }
        if let Some(start) = &self.start {
            query.push(("start", start.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }

    pub(crate) fn with_start(&self, start: Option<String>) -> Self {
        let mut opts = self.clone();
        opts.start = start;
        opts
    }
}

/// Client for the Watson Machine Learning v4 REST API.
///
/// Cheap to clone; all configuration is fixed at construction, so a single
/// instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct WmlClient {
    http: reqwest::Client,
    base_url: String,
    version: String,
    auth: AuthProvider,
    retry: RetryPolicy,
}

impl WmlClient {
    pub fn builder() -> WmlClientBuilder {
        WmlClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Turn on retries for transient failures.
    pub fn enable_retries(&mut self, max_retries: u32, interval: Duration) {
        self.retry = RetryPolicy::new(max_retries, interval);
    }

    pub fn disable_retries(&mut self) {
        self.retry = RetryPolicy::disabled();
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, "GET");
        let resp = self
            .dispatch(&url, || self.http.get(&url).query(&query))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, "POST");
        let resp = self
            .dispatch(&url, || self.http.post(&url).query(&query).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, "PATCH");
        let resp = self
            .dispatch(&url, || self.http.patch(&url).query(&query).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    /// DELETE; 2xx responses (200/202/204) are success, any body is dropped.
    pub(crate) async fn delete(&self, path: &str, query: Vec<(&'static str, String)>) -> Result<()> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, "DELETE");
        self.dispatch(&url, || self.http.delete(&url).query(&query))
            .await?;
        Ok(())
    }

    /// Binary download; bypasses the JSON decoder entirely.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        accept: &str,
    ) -> Result<Bytes> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, accept, "GET (binary)");
        let resp = self
            .dispatch(&url, || {
                self.http
                    .get(&url)
                    .query(&query)
                    .header(header::ACCEPT, accept)
            })
            .await?;
        Ok(resp.bytes().await?)
    }

    /// Binary upload. The body is a cheaply cloneable [`Bytes`] so retries
    /// can rebuild the request.
    pub(crate) async fn put_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
        content_type: &str,
        body: Bytes,
    ) -> Result<T> {
        let url = self.url(path);
        let query = self.versioned(query);
        tracing::debug!(url = %url, content_type, len = body.len(), "PUT (binary)");
        let resp = self
            .dispatch(&url, || {
                self.http
                    .put(&url)
                    .query(&query)
                    .header(header::CONTENT_TYPE, content_type)
                    .body(body.clone())
            })
            .await?;
        Ok(resp.json().await?)
    }

    fn versioned(&self, mut query: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        query.insert(0, ("version", self.version.clone()));
        query
    }

    /// Send a request, retrying transient failures per the retry policy.
    ///
    /// The request is rebuilt on every attempt; builders with bodies cannot
    /// be cloned.
    async fn dispatch<F>(&self, url: &str, make: F) -> Result<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            let request = self.auth.apply(make());
            match request.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return Ok(resp);
                    }
                    if attempt < self.retry.max_retries && is_retriable_status(status.as_u16()) {
                        attempt += 1;
                        tracing::warn!(
                            url,
                            status = status.as_u16(),
                            attempt,
                            "transient API failure, retrying"
                        );
                        tokio::time::sleep(self.retry.interval * attempt).await;
                        continue;
                    }
                    return Err(api_error(resp).await);
                }
                Err(err) if attempt < self.retry.max_retries && is_retriable_transport(&err) => {
                    attempt += 1;
                    tracing::warn!(url, error = %err, attempt, "transport failure, retrying");
                    tokio::time::sleep(self.retry.interval * attempt).await;
                }
                Err(err) => return Err(WmlError::Transport(err)),
            }
        }
    }
}

/// Body for `POST …/{id}/revisions`: the scope plus an optional commit
/// message.
pub(crate) fn revision_body(scope: &Scope, commit_message: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    let (key, id) = scope.query_pair();
    body.insert(key.to_string(), serde_json::Value::String(id));
    if let Some(msg) = commit_message {
        body.insert(
            "commit_message".to_string(),
            serde_json::Value::String(msg.to_string()),
        );
    }
    serde_json::Value::Object(body)
}

async fn api_error(resp: reqwest::Response) -> WmlError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
    WmlError::Api { status, body, text }
}

fn is_retriable_status(status: u16) -> bool {
    status == 429 || status == 503
}

fn is_retriable_transport(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// Builder for [`WmlClient`].
pub struct WmlClientBuilder {
    base_url: Option<String>,
    version: String,
    auth: AuthProvider,
    timeout: Duration,
    connect_timeout: Duration,
    retry: RetryPolicy,
}

impl WmlClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            version: DEFAULT_VERSION.to_string(),
            auth: AuthProvider::none(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            retry: RetryPolicy::disabled(),
        }
    }

    /// Service endpoint, e.g. `https://us-south.ml.cloud.ibm.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// API version date (`YYYY-MM-DD`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Shorthand for [`AuthProvider::bearer`].
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::bearer(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn retries(mut self, max_retries: u32, interval: Duration) -> Self {
        self.retry = RetryPolicy::new(max_retries, interval);
        self
    }

    pub fn build(self) -> Result<WmlClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| WmlError::Configuration("base_url is required".into()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| WmlError::Configuration(e.to_string()))?;

        Ok(WmlClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            version: self.version,
            auth: self.auth,
            retry: self.retry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let err = WmlClient::builder().build().unwrap_err();
        assert!(matches!(err, WmlError::Configuration(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = WmlClient::builder()
            .base_url("https://us-south.ml.cloud.ibm.com/")
            .build()
            .unwrap();
        assert_eq!(
            client.url("/v4/models"),
            "https://us-south.ml.cloud.ibm.com/v4/models"
        );
    }

    #[test]
    fn version_defaults_and_overrides() {
        let client = WmlClient::builder()
            .base_url("http://localhost")
            .build()
            .unwrap();
        assert_eq!(client.version(), DEFAULT_VERSION);

        let client = WmlClient::builder()
            .base_url("http://localhost")
            .version("2024-01-15")
            .build()
            .unwrap();
        assert_eq!(client.version(), "2024-01-15");
    }

    #[test]
    fn versioned_query_leads_with_version() {
        let client = WmlClient::builder()
            .base_url("http://localhost")
            .build()
            .unwrap();
        let query = client.versioned(vec![("space_id", "sp-1".to_string())]);
        assert_eq!(query[0], ("version", DEFAULT_VERSION.to_string()));
        assert_eq!(query[1], ("space_id", "sp-1".to_string()));
    }

    #[test]
    fn scope_query_pair() {
        assert_eq!(
            Scope::space("sp-1").query_pair(),
            ("space_id", "sp-1".to_string())
        );
        assert_eq!(
            Scope::project("pr-2").query_pair(),
            ("project_id", "pr-2".to_string())
        );
    }

    #[test]
    fn list_options_query() {
        let opts = ListOptions {
            tag_value: Some("prod".to_string()),
            start: Some("cursor".to_string()),
            limit: Some(25),
        };
        assert_eq!(
            opts.to_query(),
            vec![
                ("tag.value", "prod".to_string()),
                ("start", "cursor".to_string()),
                ("limit", "25".to_string()),
            ]
        );
        assert!(ListOptions::default().to_query().is_empty());
    }

    #[test]
    fn retriable_classification() {
        assert!(is_retriable_status(429));
        assert!(is_retriable_status(503));
        assert!(!is_retriable_status(500));
        assert!(!is_retriable_status(404));
    }
}
