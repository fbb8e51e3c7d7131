//! Unifies every internal error type the dispatcher can observe into the
//! structured envelope (spec §4.B, §7). Internal helpers keep raising their
//! own typed errors (`GitHubClientError`, `WorkspaceError`, ...); this
//! module is the single place those get converted at the dispatch boundary,
//! mirroring the "dispatcher converts" propagation policy in spec §7.

use ghmcp_commons::{ErrorCategory, ErrorEnvelope, ErrorEnvelopeBuilder};
use ghmcp_github::GitHubClientError;
use ghmcp_workspace::WorkspaceError;
use serde_json::Value;
use thiserror::Error;

use crate::validate::{NormalizeError, ValidationError};
use crate::write_gate::WriteApprovalRequiredError;

#[derive(Debug, Error)]
pub enum ToolDispatchError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("schema validation failed")]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    WriteApprovalRequired(#[from] WriteApprovalRequiredError),
    #[error(transparent)]
    GitHub(#[from] GitHubClientError),
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolDispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolDispatchError::UnknownTool(_) => ErrorCategory::NotFound,
            ToolDispatchError::Normalize(_) => ErrorCategory::Validation,
            ToolDispatchError::Validation(_) => ErrorCategory::Validation,
            ToolDispatchError::WriteApprovalRequired(_) => ErrorCategory::WriteApprovalRequired,
            ToolDispatchError::GitHub(err) => err.category(),
            ToolDispatchError::Workspace(err) => err.category(),
            ToolDispatchError::Cancelled => ErrorCategory::Cancelled,
            ToolDispatchError::Other(err) => ghmcp_commons::classify_error_message(&err.to_string()),
        }
    }

    /// Converts to the transport-facing envelope (spec §4.B). `arg_keys` is
    /// attached as opt-in debug context only when `include_debug_args` is
    /// set (spec §4.B: "Debug args are opt-in via env flag").
    pub fn into_envelope(self, arg_keys: &[String], include_debug_args: bool) -> ErrorEnvelope {
        let category = self.category();
        let code = match &self {
            ToolDispatchError::UnknownTool(_) => Some("TOOL_NOT_FOUND".to_string()),
            ToolDispatchError::WriteApprovalRequired(_) => Some("WRITE_APPROVAL_REQUIRED".to_string()),
            ToolDispatchError::GitHub(err) => err.code(),
            ToolDispatchError::Workspace(err) => err.code().map(str::to_string),
            _ => None,
        };
        let details = match &self {
            ToolDispatchError::Validation(errors) => Some(serde_json::json!({
                "violations": errors.iter().map(|e| serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                })).collect::<Vec<Value>>(),
            })),
            ToolDispatchError::GitHub(err) => err.details(),
            _ => None,
        };

        let message = self.to_string();
        let mut builder = ErrorEnvelopeBuilder::new(message).category(category);
        if let Some(code) = code {
            builder = builder.code(code);
        }
        if let Some(details) = details {
            builder = builder.details(details);
        }
        if include_debug_args {
            builder = builder.debug_args(serde_json::json!({ "arg_keys": arg_keys }));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_maps_to_not_found() {
        let err = ToolDispatchError::UnknownTool("ghost_tool".to_string());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn write_approval_required_maps_to_its_category_and_code() {
        let err = ToolDispatchError::WriteApprovalRequired(WriteApprovalRequiredError {
            tool_name: "create_pull_request".to_string(),
            target_ref: None,
        });
        assert_eq!(err.category(), ErrorCategory::WriteApprovalRequired);
        let envelope = err.into_envelope(&[], false);
        assert_eq!(envelope.error_detail.code.as_deref(), Some("WRITE_APPROVAL_REQUIRED"));
    }

    #[test]
    fn validation_errors_list_every_violating_field() {
        let err = ToolDispatchError::Validation(vec![
            ValidationError { field: "a".into(), message: "missing".into() },
            ValidationError { field: "b".into(), message: "missing".into() },
        ]);
        let envelope = err.into_envelope(&[], false);
        let violations = envelope.error_detail.details.unwrap();
        assert_eq!(violations["violations"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn debug_args_are_opt_in() {
        let err = ToolDispatchError::UnknownTool("x".to_string());
        let without_debug = err.into_envelope(&["a".to_string()], false);
        assert!(without_debug.error_detail.debug.is_none());

        let err = ToolDispatchError::UnknownTool("x".to_string());
        let with_debug = err.into_envelope(&["a".to_string()], true);
        assert!(with_debug.error_detail.debug.is_some());
    }
}
