//! `workspace_self_heal_branch` (spec §4.E.6): diagnoses a mangled workspace
//! (wrong branch, in-progress merge/rebase, conflicts, detached HEAD) and,
//! if permitted, discards it and creates a fresh branch from a clean base.

use std::path::Path;
use std::time::Duration;

use ghmcp_config::ServerConfig;
use serde::Serialize;

use crate::clone::clone_repo;
use crate::error::WorkspaceError;
use crate::git_exec::run_git_with_retry;
use crate::paths::{sanitize_ref, workspace_path};
use crate::slug::heal_branch_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    Healthy,
    WrongBranch { expected: String, actual: String },
    MergeInProgress,
    RebaseInProgress,
    Conflicts,
    DetachedHead,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceSnapshot {
    pub head_oneline: String,
    pub file_count: usize,
    pub top_level_entries: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfHealResult {
    pub diagnosis_before: String,
    pub healed: bool,
    pub new_ref: Option<String>,
    pub snapshot: WorkspaceSnapshot,
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

/// Inspects the working tree's `.git` metadata and `status` output to decide
/// whether it needs healing.
pub async fn diagnose(
    path: &Path,
    expected_ref: &str,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<Diagnosis, WorkspaceError> {
    if path.join(".git/MERGE_HEAD").exists() {
        return Ok(Diagnosis::MergeInProgress);
    }
    if path.join(".git/rebase-merge").exists() || path.join(".git/rebase-apply").exists() {
        return Ok(Diagnosis::RebaseInProgress);
    }

    let status = git(&["status", "--porcelain"], path, config, token).await?;
    if status.stdout.lines().any(|line| line.starts_with("UU") || line.starts_with("AA")) {
        return Ok(Diagnosis::Conflicts);
    }

    let branch = git(&["branch", "--show-current"], path, config, token)
        .await
        .map(|out| out.stdout.trim().to_string())
        .unwrap_or_default();

    if branch.is_empty() {
        return Ok(Diagnosis::DetachedHead);
    }
    if branch != expected_ref {
        return Ok(Diagnosis::WrongBranch {
            expected: expected_ref.to_string(),
            actual: branch,
        });
    }

    Ok(Diagnosis::Healthy)
}

async fn snapshot(path: &Path, config: &ServerConfig, token: Option<&str>) -> Result<WorkspaceSnapshot, WorkspaceError> {
    let head = git(&["log", "-1", "--oneline"], path, config, token)
        .await
        .map(|out| out.stdout.trim().to_string())
        .unwrap_or_default();

    let mut entries = Vec::new();
    let mut file_count = 0usize;
    let mut read_dir = tokio::fs::read_dir(path).await.map_err(WorkspaceError::Io)?;
    while let Some(entry) = read_dir.next_entry().await.map_err(WorkspaceError::Io)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ".git" {
            continue;
        }
        entries.push(name);
        file_count += 1;
    }
    entries.sort();

    Ok(WorkspaceSnapshot {
        head_oneline: head,
        file_count,
        top_level_entries: entries,
    })
}

/// Diagnoses `full_name`@`expected_ref`'s workspace and, when mangled and
/// `allow_heal` is set, discards it, optionally deletes the stray remote
/// branch, resets the base workspace and checks out a fresh healed branch.
pub async fn self_heal_branch(
    config: &ServerConfig,
    full_name: &str,
    expected_ref: &str,
    base_ref: &str,
    allow_heal: bool,
    delete_remote_branch: bool,
    token: Option<&str>,
) -> Result<SelfHealResult, WorkspaceError> {
    let sanitized_expected = sanitize_ref(Some(expected_ref))?;
    let sanitized_base = sanitize_ref(Some(base_ref))?;
    let path = workspace_path(Path::new(&config.workspace_base_dir), full_name, &sanitized_expected)?;

    if !path.join(".git").is_dir() {
        clone_repo(config, full_name, Some(&sanitized_expected), false, token).await?;
        let restored = snapshot(&path, config, token).await?;
        return Ok(SelfHealResult {
            diagnosis_before: "missing".to_string(),
            healed: true,
            new_ref: Some(sanitized_expected),
            snapshot: restored,
        });
    }

    let diagnosis = diagnose(&path, &sanitized_expected, config, token).await?;
    if diagnosis == Diagnosis::Healthy {
        let snap = snapshot(&path, config, token).await?;
        return Ok(SelfHealResult {
            diagnosis_before: "healthy".to_string(),
            healed: false,
            new_ref: None,
            snapshot: snap,
        });
    }

    if !allow_heal {
        return Err(WorkspaceError::WrongBranchWithChanges(format!(
            "workspace needs healing ({diagnosis:?}) but heal was not permitted"
        )));
    }

    if delete_remote_branch {
        let _ = git(
            &["push", "origin", "--delete", &sanitized_expected],
            &path,
            config,
            token,
        )
        .await;
    }

    tokio::fs::remove_dir_all(&path).await.map_err(WorkspaceError::Io)?;

    let base_path = clone_repo(config, full_name, Some(&sanitized_base), false, token).await?;
    let healed_name = heal_branch_name(&sanitized_expected);
    git(&["checkout", "-b", &healed_name], &base_path, config, token).await?;

    let new_path = workspace_path(Path::new(&config.workspace_base_dir), full_name, &healed_name)?;
    if let Some(parent) = new_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(WorkspaceError::Io)?;
    }
    tokio::fs::rename(&base_path, &new_path).await.map_err(WorkspaceError::Io)?;

    let restored = snapshot(&new_path, config, token).await?;
    Ok(SelfHealResult {
        diagnosis_before: format!("{diagnosis:?}"),
        healed: true,
        new_ref: Some(healed_name),
        snapshot: restored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_debug_names_are_stable() {
        assert_eq!(format!("{:?}", Diagnosis::MergeInProgress), "MergeInProgress");
        assert_eq!(
            format!(
                "{:?}",
                Diagnosis::WrongBranch {
                    expected: "main".into(),
                    actual: "other".into()
                }
            ),
            "WrongBranch { expected: \"main\", actual: \"other\" }"
        );
    }
}
