//! Typed errors for the workspace engine (spec §4.B inference rules, as
//! applied to git/patch/filesystem failures).

use ghmcp_commons::ErrorCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("invalid ref: {0}")]
    InvalidRef(String),
    #[error("invalid repository full_name: {0}")]
    InvalidFullName(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("GitHub authentication failed: {0}")]
    Auth(String),
    #[error("git command failed: {0}")]
    GitCommandFailed(String),
    #[error("workspace directory already exists: {0}")]
    AlreadyExists(String),
    #[error("wrong branch checked out and working tree has local changes: {0}")]
    WrongBranchWithChanges(String),
    #[error("patch is empty")]
    PatchEmpty,
    #[error("patch is malformed: {0}")]
    PatchMalformed(String),
    #[error("patch does not apply: {0}")]
    PatchDoesNotApply(String),
    #[error("operation timed out after {0}ms")]
    Timeout(u64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkspaceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WorkspaceError::InvalidRef(_) | WorkspaceError::InvalidFullName(_) | WorkspaceError::InvalidPath(_) => {
                ErrorCategory::Validation
            }
            WorkspaceError::Auth(_) => ErrorCategory::Auth,
            WorkspaceError::GitCommandFailed(_) => ErrorCategory::Upstream,
            WorkspaceError::AlreadyExists(_) | WorkspaceError::WrongBranchWithChanges(_) => {
                ErrorCategory::Conflict
            }
            WorkspaceError::PatchEmpty | WorkspaceError::PatchMalformed(_) => ErrorCategory::Validation,
            WorkspaceError::PatchDoesNotApply(_) => ErrorCategory::Conflict,
            WorkspaceError::Timeout(_) => ErrorCategory::Timeout,
            WorkspaceError::Io(_) => ErrorCategory::Internal,
            WorkspaceError::Other(err) => ghmcp_commons::classify_error_message(&err.to_string()),
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            WorkspaceError::PatchEmpty => Some("PATCH_EMPTY"),
            WorkspaceError::PatchMalformed(_) => Some("PATCH_MALFORMED"),
            WorkspaceError::PatchDoesNotApply(_) => Some("PATCH_DOES_NOT_APPLY"),
            WorkspaceError::InvalidPath(_) => Some("PATH_INVALID"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_errors_get_their_codes() {
        assert_eq!(WorkspaceError::PatchEmpty.code(), Some("PATCH_EMPTY"));
        assert_eq!(
            WorkspaceError::PatchDoesNotApply("x".into()).code(),
            Some("PATCH_DOES_NOT_APPLY")
        );
    }

    #[test]
    fn category_mapping_matches_spec() {
        assert_eq!(
            WorkspaceError::AlreadyExists("x".into()).category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            WorkspaceError::PatchDoesNotApply("x".into()).category(),
            ErrorCategory::Conflict
        );
        assert_eq!(WorkspaceError::Timeout(1000).category(), ErrorCategory::Timeout);
    }
}
