//! Typed errors for the GitHub HTTP client (spec §4.B inference rules).
//!
//! These are kept distinct from `anyhow::Error` so the dispatcher can
//! pattern-match on them directly instead of falling back to
//! [`ghmcp_commons::classify_error_message`] message sniffing; each variant
//! carries its own `category()`/`code()` that always wins over inference.

use ghmcp_commons::ErrorCategory;
use serde_json::Value;
use thiserror::Error;

/// Raised whenever a GitHub endpoint rejects the credential outright (401,
/// or a 403 with no rate-limit signal) or when a proxied Render auth check
/// fails.
#[derive(Debug, Error)]
#[error("GitHub authentication failed: {0}")]
pub struct GitHubAuthError(pub String);

/// Raised on 429 or a 403 carrying rate-limit headers.
#[derive(Debug, Error)]
#[error("GitHub rate limit exceeded{}", retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
pub struct GitHubRateLimitError {
    pub message: String,
    pub retry_after: Option<u64>,
}

/// Catch-all for any other non-2xx GitHub response.
#[derive(Debug, Error)]
#[error("GitHub API error ({status_code}): {message}")]
pub struct GitHubApiError {
    pub status_code: u16,
    pub message: String,
    /// First ~2000 chars of the response body, already passed through
    /// `ghmcp_commons::sanitize_value` where the body was JSON.
    pub body_preview: Option<String>,
    /// Explicit category/code set by the caller, which always wins over
    /// inference from `status_code` (spec §4.B: "may carry explicit
    /// category and code attributes, which always win over inference").
    pub category_override: Option<ErrorCategory>,
    pub code_override: Option<String>,
}

impl GitHubApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            body_preview: None,
            category_override: None,
            code_override: None,
        }
    }

    pub fn with_body_preview(mut self, preview: impl Into<String>) -> Self {
        self.body_preview = Some(preview.into());
        self
    }

    pub fn with_category(mut self, category: ErrorCategory) -> Self {
        self.category_override = Some(category);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code_override = Some(code.into());
        self
    }

    /// Maps `status_code` to a category per spec §4.B / §4.C, unless an
    /// explicit override was set.
    pub fn category(&self) -> ErrorCategory {
        if let Some(category) = self.category_override {
            return category;
        }
        match self.status_code {
            401 | 403 => ErrorCategory::Auth,
            429 => ErrorCategory::RateLimited,
            500..=599 => ErrorCategory::Upstream,
            404 => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }

    pub fn code(&self) -> Option<String> {
        self.code_override.clone()
    }
}

/// Top-level error type returned by every `ghmcp-github` operation.
#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error(transparent)]
    Auth(#[from] GitHubAuthError),
    #[error(transparent)]
    RateLimit(#[from] GitHubRateLimitError),
    #[error(transparent)]
    Api(#[from] GitHubApiError),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GitHubClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GitHubClientError::Auth(_) => ErrorCategory::Auth,
            GitHubClientError::RateLimit(_) => ErrorCategory::RateLimited,
            GitHubClientError::Api(err) => err.category(),
            GitHubClientError::Timeout(_) => ErrorCategory::Timeout,
            GitHubClientError::Validation(_) => ErrorCategory::Validation,
            GitHubClientError::Other(err) => {
                ghmcp_commons::classify_error_message(&err.to_string())
            }
        }
    }

    pub fn code(&self) -> Option<String> {
        match self {
            GitHubClientError::Api(err) => err.code(),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<Value> {
        match self {
            GitHubClientError::Api(err) => err.body_preview.clone().map(|preview| {
                serde_json::json!({
                    "status_code": err.status_code,
                    "body_preview": preview,
                })
            }),
            GitHubClientError::RateLimit(err) => err
                .retry_after
                .map(|secs| serde_json::json!({ "retry_after_seconds": secs })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_like_status_codes_classify_as_auth() {
        let err = GitHubApiError::new(401, "Bad credentials");
        assert_eq!(err.category(), ErrorCategory::Auth);
        let err = GitHubApiError::new(403, "Forbidden");
        assert_eq!(err.category(), ErrorCategory::Auth);
    }

    #[test]
    fn rate_limited_status_classifies_correctly() {
        let err = GitHubApiError::new(429, "Too many requests");
        assert_eq!(err.category(), ErrorCategory::RateLimited);
    }

    #[test]
    fn explicit_override_wins_over_status_code_inference() {
        let err = GitHubApiError::new(500, "Malformed patch rejected upstream")
            .with_category(ghmcp_commons::ErrorCategory::Patch)
            .with_code("PATCH_DOES_NOT_APPLY");
        assert_eq!(err.category(), ErrorCategory::Patch);
        assert_eq!(err.code().as_deref(), Some("PATCH_DOES_NOT_APPLY"));
    }

    #[test]
    fn client_error_category_delegates_per_variant() {
        let err = GitHubClientError::RateLimit(GitHubRateLimitError {
            message: "secondary rate limit".into(),
            retry_after: Some(30),
        });
        assert_eq!(err.category(), ErrorCategory::RateLimited);
        assert_eq!(
            err.details(),
            Some(serde_json::json!({ "retry_after_seconds": 30 }))
        );
    }
}
