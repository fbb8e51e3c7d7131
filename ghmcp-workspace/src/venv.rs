//! Scratch virtualenv lifecycle (spec §4.E.11): `_prepare_temp_virtualenv`,
//! `_stop_workspace_virtualenv`, and a status query.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fs2::FileExt;
use serde::Serialize;
use tokio::process::Command;

use crate::error::WorkspaceError;

const VENV_DIR_NAME: &str = ".venv-mcp";
const READY_MARKER: &str = ".mcp_ready";
const BOOTSTRAP_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Serialize)]
pub struct VenvStatus {
    pub exists: bool,
    pub ready: bool,
}

fn venv_dir(repo_dir: &Path) -> PathBuf {
    repo_dir.join(VENV_DIR_NAME)
}

fn ready_marker(repo_dir: &Path) -> PathBuf {
    venv_dir(repo_dir).join(READY_MARKER)
}

/// `{exists, ready}` status query, no side effects.
pub fn venv_status(repo_dir: &Path) -> VenvStatus {
    let dir = venv_dir(repo_dir);
    VenvStatus {
        exists: dir.is_dir(),
        ready: ready_marker(repo_dir).is_file(),
    }
}

/// Returns env vars pointing into a ready `.venv-mcp`, creating and
/// bootstrapping it first if needed. A file lock on the marker's parent
/// directory serializes concurrent bootstrap attempts for the same
/// workspace.
pub async fn prepare_temp_virtualenv(repo_dir: &Path) -> Result<HashMap<String, String>, WorkspaceError> {
    let dir = venv_dir(repo_dir);
    tokio::fs::create_dir_all(&dir).await.map_err(WorkspaceError::Io)?;

    let lock_path = dir.join(".mcp_lock");
    let lock_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&lock_path)
        .map_err(WorkspaceError::Io)?;
    lock_file.lock_exclusive().map_err(WorkspaceError::Io)?;

    let result = bootstrap_if_needed(repo_dir, &dir).await;
    let _ = lock_file.unlock();
    result?;

    Ok(env_for_venv(&dir))
}

async fn bootstrap_if_needed(repo_dir: &Path, dir: &Path) -> Result<(), WorkspaceError> {
    if ready_marker(repo_dir).is_file() {
        return Ok(());
    }

    let dir_str = dir.to_string_lossy().into_owned();
    let status = tokio::time::timeout(
        BOOTSTRAP_TIMEOUT,
        Command::new("python3").args(["-m", "venv", &dir_str]).status(),
    )
    .await
    .map_err(|_| WorkspaceError::Timeout(BOOTSTRAP_TIMEOUT.as_millis() as u64))?
    .map_err(WorkspaceError::Io)?;

    if !status.success() {
        return Err(WorkspaceError::Other(anyhow::anyhow!(
            "python3 -m venv failed with status {status}"
        )));
    }

    let pip_path = bin_dir(dir).join("pip");
    if !pip_path.exists() {
        let python_path = bin_dir(dir).join("python");
        let _ = tokio::time::timeout(
            BOOTSTRAP_TIMEOUT,
            Command::new(&python_path).args(["-m", "ensurepip", "--upgrade"]).status(),
        )
        .await;
    }

    tokio::fs::write(ready_marker(repo_dir), b"ready\n")
        .await
        .map_err(WorkspaceError::Io)?;
    Ok(())
}

#[cfg(unix)]
fn bin_dir(dir: &Path) -> PathBuf {
    dir.join("bin")
}

#[cfg(windows)]
fn bin_dir(dir: &Path) -> PathBuf {
    dir.join("Scripts")
}

fn env_for_venv(dir: &Path) -> HashMap<String, String> {
    let bin = bin_dir(dir);
    let mut env = HashMap::new();
    env.insert("VIRTUAL_ENV".to_string(), dir.to_string_lossy().into_owned());
    let existing_path = std::env::var("PATH").unwrap_or_default();
    env.insert(
        "PATH".to_string(),
        format!("{}:{}", bin.to_string_lossy(), existing_path),
    );
    env
}

/// Deletes the workspace's scratch virtualenv entirely.
pub async fn stop_workspace_virtualenv(repo_dir: &Path) -> Result<(), WorkspaceError> {
    let dir = venv_dir(repo_dir);
    if dir.is_dir() {
        tokio::fs::remove_dir_all(&dir).await.map_err(WorkspaceError::Io)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn status_reports_absent_when_no_venv_dir() {
        let dir = tempdir().unwrap();
        let status = venv_status(dir.path());
        assert!(!status.exists);
        assert!(!status.ready);
    }

    #[test]
    fn status_reports_ready_when_marker_present() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join(VENV_DIR_NAME);
        std::fs::create_dir_all(&venv).unwrap();
        std::fs::write(venv.join(READY_MARKER), b"ready\n").unwrap();
        let status = venv_status(dir.path());
        assert!(status.exists);
        assert!(status.ready);
    }

    #[tokio::test]
    async fn stop_removes_venv_directory() {
        let dir = tempdir().unwrap();
        let venv = dir.path().join(VENV_DIR_NAME);
        std::fs::create_dir_all(&venv).unwrap();
        stop_workspace_virtualenv(dir.path()).await.unwrap();
        assert!(!venv.exists());
    }
}
