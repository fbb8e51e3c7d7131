//! Canonical error categorization shared by every tool wrapper and HTTP route.
//!
//! A single closed `ErrorCategory` enum drives retry decisions, the structured
//! error envelope (§4.B), and the write-gate's `write_approval_required`
//! signal. Classification is a pure function over already-typed errors first,
//! falling back to message sniffing only when the origin type has been erased
//! by `anyhow`.

use std::fmt;
use std::time::Duration;

/// Closed set of error categories returned in `error_detail.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Auth,
    Permission,
    WriteApprovalRequired,
    RateLimited,
    Timeout,
    Conflict,
    Upstream,
    Internal,
    Cancelled,
    Patch,
}

/// Describes whether and how an error can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retryability {
    Retryable {
        max_attempts: u32,
        backoff: BackoffStrategy,
    },
    NonRetryable,
    RequiresIntervention,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackoffStrategy {
    Exponential { base: Duration, max: Duration },
    Fixed(Duration),
}

impl ErrorCategory {
    /// Whether `error_detail.retryable` should be set to `true`.
    #[inline]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::RateLimited | ErrorCategory::Timeout | ErrorCategory::Upstream
        )
    }

    pub fn retryability(&self) -> Retryability {
        match self {
            ErrorCategory::Upstream => Retryability::Retryable {
                max_attempts: 3,
                backoff: BackoffStrategy::Exponential {
                    base: Duration::from_millis(500),
                    max: Duration::from_secs(10),
                },
            },
            ErrorCategory::Timeout => Retryability::Retryable {
                max_attempts: 2,
                backoff: BackoffStrategy::Exponential {
                    base: Duration::from_millis(1000),
                    max: Duration::from_secs(15),
                },
            },
            ErrorCategory::RateLimited => Retryability::Retryable {
                max_attempts: 3,
                backoff: BackoffStrategy::Exponential {
                    base: Duration::from_secs(1),
                    max: Duration::from_secs(30),
                },
            },
            ErrorCategory::WriteApprovalRequired => Retryability::RequiresIntervention,
            _ => Retryability::NonRetryable,
        }
    }

    /// Stable machine code, used when the category alone is not specific
    /// enough for a caller to branch on (e.g. `WRITE_APPROVAL_REQUIRED`,
    /// `PATCH_DOES_NOT_APPLY`). Returns `None` when the category's name is
    /// descriptive enough on its own.
    pub const fn default_code(&self) -> Option<&'static str> {
        match self {
            ErrorCategory::WriteApprovalRequired => Some("WRITE_APPROVAL_REQUIRED"),
            ErrorCategory::RateLimited => Some("github_rate_limited"),
            _ => None,
        }
    }

    pub const fn user_label(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Invalid request",
            ErrorCategory::NotFound => "Not found",
            ErrorCategory::Auth => "Authentication failed",
            ErrorCategory::Permission => "Permission denied",
            ErrorCategory::WriteApprovalRequired => "Write approval required",
            ErrorCategory::RateLimited => "Rate limit exceeded",
            ErrorCategory::Timeout => "Request timed out",
            ErrorCategory::Conflict => "Conflict",
            ErrorCategory::Upstream => "Upstream service error",
            ErrorCategory::Internal => "Internal error",
            ErrorCategory::Cancelled => "Operation cancelled",
            ErrorCategory::Patch => "Patch could not be applied",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_label())
    }
}

/// Message-sniffing fallback used only when the origin error type has been
/// erased (e.g. inside an `anyhow::Error` chain). Typed `From` conversions on
/// concrete error enums should be preferred wherever the type is known; see
/// `ghmcp-github`'s `GitHubApiError` and `ghmcp-workspace`'s `PatchError` for
/// those conversions.
pub fn classify_error_message(msg: &str) -> ErrorCategory {
    let lower = msg.to_ascii_lowercase();
    let msg = lower.as_str();

    if contains_any(msg, &["write approval", "write_approval_required"]) {
        return ErrorCategory::WriteApprovalRequired;
    }
    if contains_any(
        msg,
        &["does not apply", "malformed patch", "rangeless", "patch"],
    ) {
        return ErrorCategory::Patch;
    }
    if contains_any(
        msg,
        &["unauthorized", "invalid credentials", "401", "bad credentials"],
    ) {
        return ErrorCategory::Auth;
    }
    if contains_any(msg, &["rate limit", "429", "too many requests"]) {
        return ErrorCategory::RateLimited;
    }
    if contains_any(msg, &["timeout", "timed out", "deadline exceeded"]) {
        return ErrorCategory::Timeout;
    }
    if contains_any(
        msg,
        &["forbidden", "permission denied", "403", "eacces", "eperm"],
    ) {
        return ErrorCategory::Permission;
    }
    if contains_any(
        msg,
        &["no such file", "not found", "404", "does not exist"],
    ) {
        return ErrorCategory::NotFound;
    }
    if contains_any(msg, &["conflict", "diverged", "non-fast-forward"]) {
        return ErrorCategory::Conflict;
    }
    if contains_any(msg, &["cancelled", "canceled", "interrupted"]) {
        return ErrorCategory::Cancelled;
    }
    if contains_any(
        msg,
        &[
            "invalid argument",
            "invalid parameters",
            "missing required",
            "schema validation",
        ],
    ) {
        return ErrorCategory::Validation;
    }
    if contains_any(
        msg,
        &[
            "service unavailable",
            "bad gateway",
            "gateway timeout",
            "500",
            "502",
            "503",
            "504",
        ],
    ) {
        return ErrorCategory::Upstream;
    }
    ErrorCategory::Internal
}

#[inline]
fn contains_any(message: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_approval_takes_priority() {
        assert_eq!(
            classify_error_message("write approval required before create_pull_request"),
            ErrorCategory::WriteApprovalRequired
        );
    }

    #[test]
    fn patch_failures_classify_as_patch() {
        assert_eq!(
            classify_error_message("Patch does not apply to hello.txt"),
            ErrorCategory::Patch
        );
    }

    #[test]
    fn rate_limit_classified_correctly() {
        assert_eq!(
            classify_error_message("GitHub API returned 429 Too Many Requests"),
            ErrorCategory::RateLimited
        );
    }

    #[test]
    fn auth_errors() {
        assert_eq!(
            classify_error_message("401 Bad credentials"),
            ErrorCategory::Auth
        );
    }

    #[test]
    fn upstream_5xx() {
        assert_eq!(
            classify_error_message("503 Service Unavailable"),
            ErrorCategory::Upstream
        );
    }

    #[test]
    fn unknown_falls_back_to_internal() {
        assert_eq!(
            classify_error_message("something went sideways"),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn retryable_categories() {
        assert!(ErrorCategory::RateLimited.is_retryable());
        assert!(ErrorCategory::Timeout.is_retryable());
        assert!(ErrorCategory::Upstream.is_retryable());
        assert!(!ErrorCategory::Validation.is_retryable());
        assert!(!ErrorCategory::WriteApprovalRequired.is_retryable());
    }

    #[test]
    fn write_approval_required_code() {
        assert_eq!(
            ErrorCategory::WriteApprovalRequired.default_code(),
            Some("WRITE_APPROVAL_REQUIRED")
        );
    }

    #[test]
    fn display_matches_user_label() {
        assert_eq!(
            format!("{}", ErrorCategory::Conflict),
            ErrorCategory::Conflict.user_label()
        );
    }
}
