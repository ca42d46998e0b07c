//! HTTP state store client
//!
//! `StateStore` over the remote store's REST API. Every request is scoped to
//! `{base}/containers/{namespace}` and authenticated with HTTP basic auth taken from the
//! runtime auth string. No retries: a failed request fails the command.

use crate::config::{Region, RuntimeIdentity};
use crate::error::ApiError;
use crate::state::store::{
    DeleteAllResult, KeyPage, KeyPageStream, ListOptions, PutOptions, StateEntry, StateStore,
    StoreStats,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const STATE_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const STATE_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying a value's expiration on `get`.
const EXPIRATION_HEADER: &str = "expiration";

/// Regional endpoint, unless a custom endpoint is configured.
pub fn endpoint_for(region: Region, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
        None => format!("https://storage-state-{}.app-builder.adp.adobe.io", region),
    }
}

/// Split `user:pass` for basic auth. A string without a colon is all user.
fn split_auth(auth: &str) -> (String, Option<String>) {
    match auth.split_once(':') {
        Some((user, pass)) => (user.to_string(), Some(pass.to_string())),
        None => (auth.to_string(), None),
    }
}

fn map_status(status: StatusCode, detail: String) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::StoreAuthFailed(format!("status {}: {}", status, detail)),
        429 => ApiError::StoreRateLimit(format!("status {}: {}", status, detail)),
        _ => ApiError::StoreRequestFailed(format!("status {}: {}", status, detail)),
    }
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        map_status(status, error.to_string())
    } else if error.is_timeout() {
        ApiError::StoreRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::StoreRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::StoreError(format!("HTTP error: {}", error))
    }
}

/// Absent, empty and `"0"` cursors all mean the enumeration is over.
fn normalize_cursor(cursor: Option<Value>) -> Option<String> {
    match cursor? {
        Value::String(s) if s.is_empty() || s == "0" => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_u64() == Some(0) => None,
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Turn a response into `Some` on success, `None` on 404, an error otherwise.
async fn check_response(response: Response) -> Result<Option<Response>, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(map_status(status, body));
    }
    Ok(Some(response))
}

fn build_state_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(STATE_HTTP_CONNECT_TIMEOUT)
        .timeout(STATE_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::StoreError(format!("Failed to create HTTP client: {}", e)))
}

#[derive(Deserialize)]
struct DeleteAllResponse {
    #[serde(default)]
    keys: u64,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    keys: Vec<String>,
    #[serde(default)]
    cursor: Option<Value>,
}

/// Remote state store client for one namespace.
pub struct HttpStateStore {
    client: Client,
    base: Url,
    namespace: String,
    user: String,
    pass: Option<String>,
}

impl HttpStateStore {
    pub fn new(
        identity: RuntimeIdentity,
        region: Region,
        endpoint: Option<&str>,
    ) -> Result<Self, ApiError> {
        let endpoint = endpoint_for(region, endpoint);
        let base = Url::parse(&endpoint).map_err(|e| {
            ApiError::ConfigError(format!("Invalid state endpoint '{}': {}", endpoint, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::ConfigError(format!(
                "Invalid state endpoint '{}'",
                endpoint
            )));
        }
        let (user, pass) = split_auth(&identity.auth);

        Ok(Self {
            client: build_state_http_client()?,
            base,
            namespace: identity.namespace,
            user,
            pass,
        })
    }

    /// `{base}/containers/{namespace}/{tail...}`, each segment percent-encoded.
    fn container_url(&self, tail: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("containers")
                .push(&self.namespace)
                .extend(tail);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        authorized(&self.client, method, url, &self.user, self.pass.as_deref())
    }

    async fn send(&self, op: &str, builder: RequestBuilder) -> Result<Option<Response>, ApiError> {
        debug!(op, namespace = %self.namespace, "State store request");
        let response = builder.send().await.map_err(map_http_error)?;
        check_response(response).await
    }
}

fn authorized(
    client: &Client,
    method: Method,
    url: Url,
    user: &str,
    pass: Option<&str>,
) -> RequestBuilder {
    client.request(method, url).basic_auth(user, pass)
}

#[async_trait]
impl StateStore for HttpStateStore {
    async fn any(&self) -> Result<bool, ApiError> {
        let url = self.container_url(&[]);
        let response = self.send("any", self.request(Method::HEAD, url)).await?;
        Ok(response.is_some())
    }

    async fn get(&self, key: &str) -> Result<Option<StateEntry>, ApiError> {
        let url = self.container_url(&["data", key]);
        let Some(response) = self.send("get", self.request(Method::GET, url)).await? else {
            return Ok(None);
        };

        let expiration = response
            .headers()
            .get(EXPIRATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let value = response.text().await.map_err(map_http_error)?;

        Ok(Some(StateEntry { value, expiration }))
    }

    async fn put(&self, key: &str, value: &str, options: PutOptions) -> Result<(), ApiError> {
        let url = self.container_url(&["data", key]);
        let mut builder = self.request(Method::PUT, url).body(value.to_string());
        if let Some(ttl) = options.ttl_seconds {
            builder = builder.query(&[("ttl", ttl)]);
        }

        self.send("put", builder)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                ApiError::StoreRequestFailed(format!(
                    "namespace '{}' was not found",
                    self.namespace
                ))
            })
    }

    async fn delete(&self, key: &str) -> Result<bool, ApiError> {
        let url = self.container_url(&["data", key]);
        let response = self.send("delete", self.request(Method::DELETE, url)).await?;
        Ok(response.is_some())
    }

    async fn delete_all(&self, pattern: &str) -> Result<DeleteAllResult, ApiError> {
        let url = self.container_url(&[]);
        let builder = self
            .request(Method::DELETE, url)
            .query(&[("matchData", pattern)]);
        let Some(response) = self.send("delete_all", builder).await? else {
            return Ok(DeleteAllResult { deleted_count: 0 });
        };

        let body: DeleteAllResponse = response.json().await.map_err(|e| {
            ApiError::StoreError(format!("Failed to parse delete response: {}", e))
        })?;
        Ok(DeleteAllResult {
            deleted_count: body.keys,
        })
    }

    async fn list(&self, options: ListOptions) -> Result<KeyPageStream, ApiError> {
        let cursor = ListCursor {
            client: self.client.clone(),
            url: self.container_url(&["data"]),
            user: self.user.clone(),
            pass: self.pass.clone(),
            pattern: options.pattern,
            limit: options.page_size_hint,
            cursor: None,
            finished: false,
        };
        Ok(Box::pin(futures::stream::try_unfold(
            cursor,
            ListCursor::next_page,
        )))
    }

    async fn stats(&self) -> Result<StoreStats, ApiError> {
        let url = self.container_url(&[]);
        let Some(response) = self.send("stats", self.request(Method::GET, url)).await? else {
            return Ok(StoreStats::default());
        };

        response
            .json()
            .await
            .map_err(|e| ApiError::StoreError(format!("Failed to parse stats response: {}", e)))
    }
}

/// Owned pagination state: one request per pulled page.
struct ListCursor {
    client: Client,
    url: Url,
    user: String,
    pass: Option<String>,
    pattern: Option<String>,
    limit: usize,
    cursor: Option<String>,
    finished: bool,
}

impl ListCursor {
    async fn next_page(mut self) -> Result<Option<(KeyPage, Self)>, ApiError> {
        if self.finished {
            return Ok(None);
        }

        let mut query: Vec<(&str, String)> = vec![("limit", self.limit.to_string())];
        if let Some(pattern) = &self.pattern {
            query.push(("match", pattern.clone()));
        }
        if let Some(cursor) = &self.cursor {
            query.push(("cursor", cursor.clone()));
        }

        debug!(cursor = ?self.cursor, limit = self.limit, "State store request: list page");
        let builder = authorized(
            &self.client,
            Method::GET,
            self.url.clone(),
            &self.user,
            self.pass.as_deref(),
        )
        .query(&query);
        let response = builder.send().await.map_err(map_http_error)?;
        let Some(response) = check_response(response).await? else {
            return Ok(None);
        };

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::StoreError(format!("Failed to parse list response: {}", e)))?;

        self.cursor = normalize_cursor(body.cursor);
        self.finished = self.cursor.is_none();
        Ok(Some((KeyPage { keys: body.keys }, self)))
    }
}
