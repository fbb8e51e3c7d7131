//! `workspace_create_branch` (spec §4.E.5): checks out a new branch in the
//! base workspace, then moves the working tree to the new ref's keyed
//! location.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ghmcp_config::ServerConfig;

use crate::error::WorkspaceError;
use crate::git_exec::run_git_with_retry;
use crate::paths::{sanitize_ref, validate_write_ref, workspace_path};

async fn git(
    args: &[&str],
    cwd: &Path,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<crate::git_exec::GitCommandOutput, WorkspaceError> {
    run_git_with_retry(
        args,
        cwd,
        &std::env::vars().collect(),
        token,
        config.rate_limit_retry_max_attempts,
        config.rate_limit_retry_base_delay,
        config.rate_limit_retry_max_wait,
        Duration::from_secs(60),
        config.tool_stdout_max_chars,
    )
    .await
}

/// Creates `new_ref` from the checked-out `base_ref` workspace and relocates
/// the working tree to the new ref's keyed directory. Fails without mutating
/// anything if the target directory already exists.
pub async fn create_branch(
    config: &ServerConfig,
    full_name: &str,
    base_ref: &str,
    new_ref: &str,
    token: Option<&str>,
) -> Result<PathBuf, WorkspaceError> {
    validate_write_ref(new_ref)?;
    let sanitized_base = sanitize_ref(Some(base_ref))?;
    let base_path = workspace_path(Path::new(&config.workspace_base_dir), full_name, &sanitized_base)?;
    let new_path = workspace_path(Path::new(&config.workspace_base_dir), full_name, new_ref)?;

    if !base_path.join(".git").is_dir() {
        return Err(WorkspaceError::InvalidRef(format!(
            "no workspace checked out for base ref `{sanitized_base}`"
        )));
    }
    if new_path.exists() {
        return Err(WorkspaceError::AlreadyExists(new_path.display().to_string()));
    }

    git(&["checkout", "-b", new_ref], &base_path, config, token).await?;

    if let Some(parent) = new_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(WorkspaceError::Io)?;
    }
    tokio::fs::rename(&base_path, &new_path)
        .await
        .map_err(WorkspaceError::Io)?;

    Ok(new_path.canonicalize().unwrap_or(new_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_new_ref_tokens() {
        assert!(validate_write_ref("bad ref with spaces").is_err());
    }
}
