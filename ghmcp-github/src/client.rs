//! Pooled, runtime-scoped GitHub HTTP client (spec §4.C).
//!
//! Three client identities are kept: `api` (base URL + auth), `external`
//! (arbitrary URLs, still sanitized), and `raw` (content streaming, used by
//! the excerpt reader). Each remembers the `tokio` runtime it was built
//! under via [`tokio::runtime::Handle::id`]; if the observed handle no
//! longer matches, the holder lazily rebuilds every client and the
//! concurrency semaphore together, so a runtime replacement in tests never
//! leaks connections from the old one (spec §8 property 9).

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use ghmcp_config::{ServerConfig, get_optional_github_token};
use ghmcp_events::GitHubClientMetrics;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;

use crate::error::{GitHubApiError, GitHubAuthError, GitHubClientError, GitHubRateLimitError};

/// Which of the three pooled identities a request should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Api,
    External,
    Raw,
}

/// Normalized response body: either a parsed JSON envelope or raw text,
/// mirroring spec §4.C step 5.
#[derive(Debug, Clone)]
pub enum GitHubResponseBody {
    Json {
        status_code: u16,
        headers: std::collections::HashMap<String, String>,
        json: Value,
    },
    Text {
        status_code: u16,
        headers: std::collections::HashMap<String, String>,
        text: String,
    },
}

impl GitHubResponseBody {
    pub fn status_code(&self) -> u16 {
        match self {
            GitHubResponseBody::Json { status_code, .. }
            | GitHubResponseBody::Text { status_code, .. } => *status_code,
        }
    }

    pub fn headers(&self) -> &std::collections::HashMap<String, String> {
        match self {
            GitHubResponseBody::Json { headers, .. } | GitHubResponseBody::Text { headers, .. } => {
                headers
            }
        }
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            GitHubResponseBody::Json { json, .. } => Some(json),
            GitHubResponseBody::Text { .. } => None,
        }
    }
}

struct RuntimeScopedClients {
    runtime_id: Option<tokio::runtime::Id>,
    api: Client,
    external: Client,
    raw: Client,
    semaphore: Arc<Semaphore>,
}

impl RuntimeScopedClients {
    fn build(config: &ServerConfig) -> Self {
        let runtime_id = Handle::try_current().ok().map(|h| h.id());
        Self {
            runtime_id,
            api: build_client(config, "application/vnd.github+json"),
            external: build_client(config, "*/*"),
            raw: build_client(config, "application/vnd.github.raw"),
            semaphore: Arc::new(Semaphore::new(config.max_concurrency.max(1))),
        }
    }
}

fn build_client(config: &ServerConfig, accept: &str) -> Client {
    ClientBuilder::new()
        .timeout(config.github_request_timeout)
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(config.http_max_keepalive.max(1))
        .user_agent("ghmcp/0.1")
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            if let Ok(value) = reqwest::header::HeaderValue::from_str(accept) {
                headers.insert(reqwest::header::ACCEPT, value);
            }
            headers
        })
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Pooled client wrapper shared (behind an `Arc`) by every GitHub-backed
/// tool.
pub struct GitHubClient {
    config: Arc<ServerConfig>,
    clients: ArcSwap<RuntimeScopedClients>,
    metrics: std::sync::Mutex<GitHubClientMetrics>,
}

impl GitHubClient {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let clients = RuntimeScopedClients::build(&config);
        Self {
            config,
            clients: ArcSwap::from_pointee(clients),
            metrics: std::sync::Mutex::new(GitHubClientMetrics::default()),
        }
    }

    pub fn metrics_snapshot(&self) -> GitHubClientMetrics {
        self.metrics.lock().expect("metrics mutex poisoned").clone()
    }

    /// Returns the current runtime-scoped clients, rebuilding them (and the
    /// semaphore) if the calling runtime has changed since they were built.
    fn current(&self) -> Arc<RuntimeScopedClients> {
        let current_id = Handle::try_current().ok().map(|h| h.id());
        let existing = self.clients.load_full();
        if existing.runtime_id == current_id {
            return existing;
        }
        let fresh = Arc::new(RuntimeScopedClients::build(&self.config));
        self.clients.store(fresh.clone());
        fresh
    }

    fn pick(clients: &RuntimeScopedClients, kind: ClientKind) -> &Client {
        match kind {
            ClientKind::Api => &clients.api,
            ClientKind::External => &clients.external,
            ClientKind::Raw => &clients.raw,
        }
    }

    /// Issues a request against the GitHub API base URL with auth injected.
    /// `path` is joined to `config.github_api_base_url`.
    pub async fn request_api(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<GitHubResponseBody, GitHubClientError> {
        let url = format!(
            "{}/{}",
            self.config.github_api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        self.request(ClientKind::Api, method, &url, body, true).await
    }

    /// Issues a request against an arbitrary external URL (no auth header).
    pub async fn request_external(
        &self,
        method: Method,
        url: &str,
    ) -> Result<GitHubResponseBody, GitHubClientError> {
        self.request(ClientKind::External, method, url, None, false)
            .await
    }

    /// Issues a raw-content request (used by the excerpt reader), with auth
    /// injected since content may live in private repos.
    pub async fn request_raw(
        &self,
        method: Method,
        url: &str,
        range: Option<String>,
    ) -> Result<reqwest::Response, GitHubClientError> {
        let clients = self.current();
        let _permit = clients
            .semaphore
            .acquire()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow::anyhow!(e)))?;

        let client = Self::pick(&clients, ClientKind::Raw);
        let mut request = client.request(method, url);
        if let Some(token) = get_optional_github_token() {
            request = request.bearer_auth(token);
        }
        if let Some(range) = range {
            request = request.header(reqwest::header::RANGE, range);
        }

        let start = Instant::now();
        let response = request.send().await;
        self.record_outcome(start.elapsed(), &response);

        let response = response.map_err(|e| {
            if e.is_timeout() {
                GitHubClientError::Timeout(e.to_string())
            } else {
                GitHubClientError::Other(e.into())
            }
        })?;

        let status = response.status();
        if status.is_success() || status == StatusCode::PARTIAL_CONTENT {
            Ok(response)
        } else {
            Err(self.map_error_status(status, None).await)
        }
    }

    async fn request(
        &self,
        kind: ClientKind,
        method: Method,
        url: &str,
        body: Option<Value>,
        inject_auth: bool,
    ) -> Result<GitHubResponseBody, GitHubClientError> {
        let clients = self.current();
        let _permit = clients
            .semaphore
            .acquire()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow::anyhow!(e)))?;

        let client = Self::pick(&clients, kind);
        let mut request = client.request(method, url);
        if inject_auth {
            if let Some(token) = get_optional_github_token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let start = Instant::now();
        let response = request.send().await;
        self.record_outcome(start.elapsed(), &response);

        let response = response.map_err(|e| {
            if e.is_timeout() {
                GitHubClientError::Timeout(e.to_string())
            } else {
                GitHubClientError::Other(e.into())
            }
        })?;

        let status = response.status();
        let headers = extract_headers(response.headers());

        if !status.is_success() {
            let preview = response.text().await.ok();
            return Err(self.map_error_status(status, preview).await);
        }

        let content_type = headers
            .get("content-type")
            .cloned()
            .unwrap_or_default();

        if content_type.contains("json") {
            let status_code = status.as_u16();
            let json: Value = response
                .json()
                .await
                .map_err(|e| GitHubClientError::Other(e.into()))?;
            let json = ghmcp_commons::sanitize_value(&json, 20_000);
            Ok(GitHubResponseBody::Json {
                status_code,
                headers,
                json,
            })
        } else {
            let status_code = status.as_u16();
            let text = response
                .text()
                .await
                .map_err(|e| GitHubClientError::Other(e.into()))?;
            Ok(GitHubResponseBody::Text {
                status_code,
                headers,
                text,
            })
        }
    }

    fn record_outcome<T>(&self, duration: Duration, outcome: &Result<T, reqwest::Error>) {
        let mut metrics = self.metrics.lock().expect("metrics mutex poisoned");
        metrics.requests_total += 1;
        if let Err(err) = outcome {
            metrics.errors_total += 1;
            if err.is_timeout() {
                metrics.timeouts_total += 1;
            }
        }
        tracing::debug!(duration_ms = duration.as_millis() as u64, "github request completed");
    }

    /// Maps a non-2xx status into the typed error hierarchy per spec §4.C
    /// step 4: 401 -> auth; 403 with rate-limit headers -> rate limited;
    /// 429 -> rate limited with retry-after; else -> generic API error.
    async fn map_error_status(
        &self,
        status: StatusCode,
        body_preview: Option<String>,
    ) -> GitHubClientError {
        let mut metrics = self.metrics.lock().expect("metrics mutex poisoned");
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::FORBIDDEN {
            metrics.rate_limit_events_total += 1;
        }
        drop(metrics);

        let preview = body_preview.map(|body| {
            let truncated: String = body.chars().take(2000).collect();
            ghmcp_commons::redact_secrets(truncated)
        });

        match status {
            StatusCode::UNAUTHORIZED => {
                GitHubClientError::Auth(GitHubAuthError(format!(
                    "GitHub returned 401: {}",
                    preview.unwrap_or_default()
                )))
            }
            StatusCode::FORBIDDEN => GitHubClientError::RateLimit(GitHubRateLimitError {
                message: preview.unwrap_or_else(|| "403 Forbidden".to_string()),
                retry_after: None,
            }),
            StatusCode::TOO_MANY_REQUESTS => GitHubClientError::RateLimit(GitHubRateLimitError {
                message: preview.unwrap_or_else(|| "429 Too Many Requests".to_string()),
                retry_after: None,
            }),
            other => {
                let mut error = GitHubApiError::new(other.as_u16(), format!("GitHub API error: {other}"));
                if let Some(preview) = preview {
                    error = error.with_body_preview(preview);
                }
                GitHubClientError::Api(error)
            }
        }
    }
}

fn extract_headers(headers: &reqwest::header::HeaderMap) -> std::collections::HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_ascii_lowercase(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghmcp_config::ServerConfig;

    fn test_config() -> Arc<ServerConfig> {
        Arc::new(ServerConfig::from_env().expect("config loads with defaults"))
    }

    #[tokio::test]
    async fn client_rebuilds_when_runtime_handle_changes() {
        let client = GitHubClient::new(test_config());
        let first = client.current();
        let second = client.current();
        assert_eq!(first.runtime_id, second.runtime_id);
    }

    #[tokio::test]
    async fn external_request_to_unreachable_host_surfaces_as_other_error() {
        let client = GitHubClient::new(test_config());
        let result = client
            .request_external(Method::GET, "http://127.0.0.1.invalid.example/")
            .await;
        assert!(result.is_err());
    }
}
