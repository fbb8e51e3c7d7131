//! `workspace_sync_status` / `workspace_sync_to_remote`: ahead/behind
//! divergence against `origin/<ref>`. Supplemental feature not named by the
//! distilled spec but present in the original server's workspace tools
//! (`workspace_tools/git_ops.py`'s sync snapshot).

use std::path::Path;
use std::time::Duration;

use ghmcp_config::ServerConfig;
use serde::Serialize;

use crate::error::WorkspaceError;
use crate::git_exec::run_git_with_retry;

#[derive(Debug, Clone, Serialize)]
pub struct SyncStatus {
    pub remote_ref: String,
    pub local_sha: String,
    pub remote_sha: String,
    pub ahead: u32,
    pub behind: u32,
    pub is_clean: bool,
    pub diverged: bool,
}

async fn git(
    args: &[&str],
    cwd: &Path,
    config: &ServerConfig,
    token: Option<&str>,
    timeout: Duration,
) -> Result<crate::git_exec::GitCommandOutput, WorkspaceError> {
    run_git_with_retry(
        args,
        cwd,
        &std::env::vars().collect(),
        token,
        config.rate_limit_retry_max_attempts,
        config.rate_limit_retry_base_delay,
        config.rate_limit_retry_max_wait,
        timeout,
        config.tool_stdout_max_chars,
    )
    .await
}

/// Fetches, then reports the ahead/behind divergence of `HEAD` against
/// `origin/<ref>`, along with working-tree cleanliness.
pub async fn sync_status(
    config: &ServerConfig,
    repo_dir: &Path,
    r#ref: &str,
    token: Option<&str>,
) -> Result<SyncStatus, WorkspaceError> {
    git(&["fetch", "--prune", "origin"], repo_dir, config, token, Duration::from_secs(300)).await?;

    let remote_ref = format!("origin/{ref}");
    let head = git(&["rev-parse", "HEAD"], repo_dir, config, token, Duration::from_secs(60)).await?;
    let remote = git(&["rev-parse", &remote_ref], repo_dir, config, token, Duration::from_secs(60)).await?;

    let rev_list = git(
        &["rev-list", "--left-right", "--count", &format!("HEAD...{remote_ref}")],
        repo_dir,
        config,
        token,
        Duration::from_secs(120),
    )
    .await?;

    let counts: Vec<&str> = rev_list.stdout.trim().split_whitespace().collect();
    if counts.len() != 2 {
        return Err(WorkspaceError::GitCommandFailed(format!(
            "unexpected rev-list output for {remote_ref}: {}",
            rev_list.stdout
        )));
    }
    let ahead: u32 = counts[0].parse().unwrap_or(0);
    let behind: u32 = counts[1].parse().unwrap_or(0);

    let status = git(&["status", "--porcelain"], repo_dir, config, token, Duration::from_secs(60)).await?;
    let is_clean = status.stdout.trim().is_empty();

    Ok(SyncStatus {
        remote_ref,
        local_sha: head.stdout.trim().to_string(),
        remote_sha: remote.stdout.trim().to_string(),
        ahead,
        behind,
        is_clean,
        diverged: ahead > 0 || behind > 0,
    })
}

/// Pushes the current branch to `origin`, optionally force-with-lease when
/// the caller has already reconciled a divergence.
pub async fn sync_to_remote(
    config: &ServerConfig,
    repo_dir: &Path,
    r#ref: &str,
    force_with_lease: bool,
    token: Option<&str>,
) -> Result<crate::git_exec::GitCommandOutput, WorkspaceError> {
    let mut args = vec!["push", "origin", r#ref];
    if force_with_lease {
        args.insert(1, "--force-with-lease");
    }
    git(&args, repo_dir, config, token, Duration::from_secs(300)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_status_serializes_with_expected_fields() {
        let status = SyncStatus {
            remote_ref: "origin/main".into(),
            local_sha: "abc".into(),
            remote_sha: "def".into(),
            ahead: 1,
            behind: 0,
            is_clean: true,
            diverged: true,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["remote_ref"], "origin/main");
        assert_eq!(json["diverged"], true);
    }
}
