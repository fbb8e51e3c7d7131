//! Clone / refresh (spec §4.E.2).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ghmcp_config::ServerConfig;

use crate::error::WorkspaceError;
use crate::git_exec::run_git_with_retry;
use crate::paths::{sanitize_ref, workspace_path};

/// `.venv-mcp` survives `git clean -fdx` refreshes (spec §4.E.2).
const VENV_DIR_NAME: &str = ".venv-mcp";

fn base_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

async fn git(
    args: &[&str],
    cwd: &Path,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<crate::git_exec::GitCommandOutput, WorkspaceError> {
    run_git_with_retry(
        args,
        cwd,
        &base_env(),
        token,
        config.rate_limit_retry_max_attempts,
        config.rate_limit_retry_base_delay,
        config.rate_limit_retry_max_wait,
        Duration::from_secs(120),
        config.tool_stdout_max_chars,
    )
    .await
}

fn remote_url(full_name: &str) -> String {
    format!("https://github.com/{full_name}.git")
}

/// `clone_repo(full_name, ref, preserve_changes)` (spec §4.E.2). Returns the
/// absolute workspace path on success.
pub async fn clone_repo(
    config: &ServerConfig,
    full_name: &str,
    r#ref: Option<&str>,
    preserve_changes: bool,
    token: Option<&str>,
) -> Result<PathBuf, WorkspaceError> {
    let effective_ref = sanitize_ref(r#ref)?;
    let target = workspace_path(Path::new(&config.workspace_base_dir), full_name, &effective_ref)?;

    if target.join(".git").is_dir() {
        ensure_remote_matches(&target, full_name, config, token).await?;
        git(&["fetch", "origin", "--prune"], &target, config, token).await?;

        if !preserve_changes {
            git(
                &["reset", "--hard", &format!("origin/{effective_ref}")],
                &target,
                config,
                token,
            )
            .await?;
            git(
                &["clean", "-fdx", "--exclude", VENV_DIR_NAME],
                &target,
                config,
                token,
            )
            .await?;
        } else {
            reconcile_branch(&target, &effective_ref, config, token).await?;
        }

        return Ok(target.canonicalize().unwrap_or(target));
    }

    clone_fresh(config, full_name, &effective_ref, &target, token).await?;
    Ok(target.canonicalize().unwrap_or(target))
}

async fn ensure_remote_matches(
    target: &Path,
    full_name: &str,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<(), WorkspaceError> {
    let expected = remote_url(full_name);
    let current = git(&["remote", "get-url", "origin"], target, config, token)
        .await
        .map(|out| out.stdout.trim().to_string())
        .unwrap_or_default();

    if current != expected {
        git(&["remote", "set-url", "origin", &expected], target, config, token).await?;
    }
    Ok(())
}

async fn reconcile_branch(
    target: &Path,
    effective_ref: &str,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<(), WorkspaceError> {
    let current_branch = git(&["branch", "--show-current"], target, config, token)
        .await
        .map(|out| out.stdout.trim().to_string())
        .unwrap_or_default();

    if current_branch == effective_ref {
        return Ok(());
    }

    let has_changes = !git(&["status", "--porcelain"], target, config, token)
        .await
        .map(|out| out.stdout.trim().to_string())
        .unwrap_or_default()
        .is_empty();

    if has_changes {
        return Err(WorkspaceError::WrongBranchWithChanges(format!(
            "workspace is on `{current_branch}` with local changes; requested `{effective_ref}`"
        )));
    }

    let checkout = git(&["checkout", effective_ref], target, config, token).await;
    if checkout.is_err() {
        git(&["checkout", "-B", effective_ref], target, config, token).await?;
    }
    Ok(())
}

async fn clone_fresh(
    config: &ServerConfig,
    full_name: &str,
    effective_ref: &str,
    target: &Path,
    token: Option<&str>,
) -> Result<(), WorkspaceError> {
    let temp_dir = target.with_extension(format!("tmp-{}", std::process::id()));
    if let Some(parent) = temp_dir.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(WorkspaceError::Io)?;
    }
    if temp_dir.exists() {
        tokio::fs::remove_dir_all(&temp_dir).await.ok();
    }

    let url = remote_url(full_name);
    let temp_str = temp_dir.to_string_lossy().into_owned();
    let args = [
        "clone",
        "--depth",
        "1",
        "--branch",
        effective_ref,
        &url,
        &temp_str,
    ];

    if let Some(parent) = target.parent() {
        git(
            &args,
            parent.parent().unwrap_or(Path::new(".")),
            config,
            token,
        )
        .await?;
    } else {
        git(&args, Path::new("."), config, token).await?;
    }

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(WorkspaceError::Io)?;
    }
    tokio::fs::rename(&temp_dir, target)
        .await
        .map_err(WorkspaceError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_url_is_https_github() {
        assert_eq!(remote_url("owner/repo"), "https://github.com/owner/repo.git");
    }
}
