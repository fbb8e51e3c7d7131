//! Structured error envelope construction (spec §4.B).
//!
//! Every tool wrapper funnels its failures through [`ErrorEnvelope`] rather
//! than propagating a raw `anyhow::Error` to the transport. This keeps the
//! JSON shape returned to callers stable regardless of which internal layer
//! raised the error.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::error_category::ErrorCategory;

/// `error_detail` object nested inside an [`ErrorEnvelope`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub category: ErrorCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Value>,
}

/// The top-level `{status: "error", ...}` envelope returned by a tool call.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub error: String,
    pub error_detail: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Builder mirroring the original server's `_structured_tool_error` helper:
/// centralizes envelope assembly so tool wrappers never hand-roll JSON.
#[derive(Debug, Default)]
pub struct ErrorEnvelopeBuilder {
    message: String,
    category: Option<ErrorCategory>,
    code: Option<String>,
    retryable: Option<bool>,
    details: Option<Value>,
    debug_args: Option<Value>,
    trace: Option<Value>,
    context: Option<String>,
    path: Option<String>,
}

impl ErrorEnvelopeBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Explicit category wins over any later message-sniffing inference.
    pub fn category(mut self, category: ErrorCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn debug_args(mut self, args: Value) -> Self {
        self.debug_args = Some(args);
        self
    }

    pub fn trace(mut self, trace: Value) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn build(self) -> ErrorEnvelope {
        let category = self
            .category
            .unwrap_or_else(|| crate::error_category::classify_error_message(&self.message));
        let retryable = self.retryable.unwrap_or_else(|| category.is_retryable());
        let code = self
            .code
            .or_else(|| category.default_code().map(str::to_string));

        ErrorEnvelope {
            status: "error",
            error: self.message.clone(),
            error_detail: ErrorDetail {
                message: self.message,
                category,
                code,
                retryable: Some(retryable),
                details: self.details,
                debug: self.debug_args.map(|args| serde_json::json!({ "args": args })),
                trace: self.trace,
            },
            context: self.context,
            path: self.path,
        }
    }
}

/// Formats an error into a user-facing description, decoupled from any
/// specific transport's presentation layer.
pub trait ErrorFormatter: Send + Sync {
    fn format_error(&self, error: &anyhow::Error) -> Cow<'_, str>;
}

/// Reports non-fatal errors to an observability backend.
pub trait ErrorReporter: Send + Sync {
    fn capture(&self, error: &anyhow::Error) -> anyhow::Result<()>;

    fn capture_message(&self, message: impl Into<Cow<'static, str>>) -> anyhow::Result<()> {
        let message: Cow<'static, str> = message.into();
        self.capture(&anyhow::Error::msg(message))
    }
}

/// Drops every captured error. Useful in tests or when a consumer does not
/// yet integrate with error monitoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopErrorReporter;

impl ErrorReporter for NoopErrorReporter {
    fn capture(&self, _error: &anyhow::Error) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Default formatter that surfaces the error's `Display` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayErrorFormatter;

impl ErrorFormatter for DisplayErrorFormatter {
    fn format_error(&self, error: &anyhow::Error) -> Cow<'_, str> {
        Cow::Owned(format!("{error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_category_wins_over_inference() {
        let envelope = ErrorEnvelopeBuilder::new("weird message")
            .category(ErrorCategory::Conflict)
            .build();
        assert_eq!(envelope.error_detail.category, ErrorCategory::Conflict);
    }

    #[test]
    fn write_approval_required_gets_default_code() {
        let envelope = ErrorEnvelopeBuilder::new("write approval required")
            .category(ErrorCategory::WriteApprovalRequired)
            .build();
        assert_eq!(
            envelope.error_detail.code.as_deref(),
            Some("WRITE_APPROVAL_REQUIRED")
        );
        assert_eq!(envelope.error_detail.retryable, Some(false));
    }

    #[test]
    fn rate_limited_defaults_to_retryable() {
        let envelope = ErrorEnvelopeBuilder::new("rate limited").build();
        assert_eq!(envelope.error_detail.category, ErrorCategory::RateLimited);
        assert_eq!(envelope.error_detail.retryable, Some(true));
    }

    #[test]
    fn formatter_uses_display() {
        let formatter = DisplayErrorFormatter;
        let error = anyhow::Error::msg("test error");
        assert_eq!(formatter.format_error(&error), "test error");
    }

    #[test]
    fn noop_reporter_drops_errors() {
        let reporter = NoopErrorReporter;
        let error = anyhow::Error::msg("test");
        assert!(reporter.capture(&error).is_ok());
        assert!(reporter.capture_message("message").is_ok());
    }
}
