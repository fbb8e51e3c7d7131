//! Path keying and ref sanitization (spec §4.E.1) and the safe path-join
//! primitive used by every file-reading/writing operation (spec §4.E.9).

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::WorkspaceError;

/// Conservative branch-name token accepted for *write* operations (spec
/// §4.E.1: "Reject invalid git-ref tokens").
static VALID_REF_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._/-]{0,199}$").expect("valid regex"));

/// Normalizes a caller-supplied ref per spec §4.E.1: empty/whitespace/`.`/
/// `./`/`/` all collapse to `main`; anything else is validated for unsafe
/// constructs.
pub fn sanitize_ref(raw: Option<&str>) -> Result<String, WorkspaceError> {
    let trimmed = raw.map(str::trim).unwrap_or("");
    if matches!(trimmed, "" | "." | "./" | "/") {
        return Ok("main".to_string());
    }

    if trimmed.contains("..")
        || trimmed.contains("@{")
        || trimmed.starts_with('/')
        || trimmed.ends_with('/')
        || trimmed.contains(':')
        || trimmed.ends_with(".lock")
    {
        return Err(WorkspaceError::InvalidRef(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

/// Validates a ref intended for a *write* operation (branch creation) against
/// the conservative git-ref token pattern, beyond the general sanitization
/// above.
pub fn validate_write_ref(raw: &str) -> Result<(), WorkspaceError> {
    sanitize_ref(Some(raw))?;
    if !VALID_REF_TOKEN.is_match(raw) {
        return Err(WorkspaceError::InvalidRef(raw.to_string()));
    }
    Ok(())
}

/// Computes the on-disk path for `(full_name, ref)`:
/// `WORKSPACE_BASE/<owner__repo>/<ref_slashes→__>` (spec §4.E.1).
pub fn workspace_path(base: &Path, full_name: &str, r#ref: &str) -> Result<PathBuf, WorkspaceError> {
    let (owner, repo) = full_name
        .split_once('/')
        .ok_or_else(|| WorkspaceError::InvalidFullName(full_name.to_string()))?;
    if owner.is_empty() || repo.is_empty() {
        return Err(WorkspaceError::InvalidFullName(full_name.to_string()));
    }
    let sanitized_ref = sanitize_ref(Some(r#ref))?;
    let ref_component = sanitized_ref.replace('/', "__");
    Ok(base.join(format!("{owner}__{repo}")).join(ref_component))
}

/// `_workspace_safe_join(repo_dir, rel)` (spec §4.E.9): `..` segments are
/// clamped to the repo root rather than rejected outright, but a result that
/// would still escape the root after clamping is rejected.
pub fn workspace_safe_join(repo_dir: &Path, rel: &str) -> Result<PathBuf, WorkspaceError> {
    let trimmed = rel.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return Ok(repo_dir.to_path_buf());
    }
    if trimmed.contains(':') {
        return Err(WorkspaceError::InvalidPath(rel.to_string()));
    }

    let normalized = trimmed.replace('\\', "/");
    let candidate = Path::new(&normalized);
    if candidate.is_absolute() {
        return Err(WorkspaceError::InvalidPath(rel.to_string()));
    }

    let mut stack: Vec<std::ffi::OsString> = Vec::new();
    for component in candidate.components() {
        match component {
            std::path::Component::ParentDir => {
                // Clamp `..` to the repo root instead of erroring (deliberate
                // ergonomic behavior per spec §4.E.9).
                stack.pop();
            }
            std::path::Component::CurDir => {}
            std::path::Component::Normal(part) => stack.push(part.to_os_string()),
            std::path::Component::RootDir | std::path::Component::Prefix(_) => {
                return Err(WorkspaceError::InvalidPath(rel.to_string()));
            }
        }
    }

    let mut result = repo_dir.to_path_buf();
    for part in &stack {
        result.push(part);
    }

    if !result.starts_with(repo_dir) {
        return Err(WorkspaceError::InvalidPath(rel.to_string()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_dot_refs_normalize_to_main() {
        for candidate in [None, Some(""), Some("   "), Some("."), Some("./"), Some("/")] {
            assert_eq!(sanitize_ref(candidate).unwrap(), "main");
        }
    }

    #[test]
    fn rejects_dangerous_ref_constructs() {
        assert!(sanitize_ref(Some("../etc/passwd")).is_err());
        assert!(sanitize_ref(Some("feature@{upstream}")).is_err());
        assert!(sanitize_ref(Some("/leading-slash")).is_err());
        assert!(sanitize_ref(Some("trailing-slash/")).is_err());
        assert!(sanitize_ref(Some("weird:colon")).is_err());
        assert!(sanitize_ref(Some("branch.lock")).is_err());
    }

    #[test]
    fn accepts_ordinary_branch_names() {
        assert_eq!(sanitize_ref(Some("feature/my-branch")).unwrap(), "feature/my-branch");
    }

    #[test]
    fn workspace_path_replaces_slashes_in_ref() {
        let base = Path::new("/tmp/ghmcp-workspaces");
        let path = workspace_path(base, "owner/repo", "feature/my-branch").unwrap();
        assert_eq!(
            path,
            Path::new("/tmp/ghmcp-workspaces/owner__repo/feature__my-branch")
        );
    }

    #[test]
    fn workspace_path_rejects_malformed_full_name() {
        let base = Path::new("/tmp/ghmcp-workspaces");
        assert!(workspace_path(base, "no-slash", "main").is_err());
        assert!(workspace_path(base, "/repo", "main").is_err());
    }

    #[test]
    fn safe_join_clamps_parent_segments_to_repo_root() {
        let repo = Path::new("/repo");
        let joined = workspace_safe_join(repo, "../docs/x.md").unwrap();
        assert_eq!(joined, Path::new("/repo/docs/x.md"));
    }

    #[test]
    fn safe_join_empty_or_slash_returns_repo_root() {
        let repo = Path::new("/repo");
        assert_eq!(workspace_safe_join(repo, "").unwrap(), repo);
        assert_eq!(workspace_safe_join(repo, "/").unwrap(), repo);
    }

    #[test]
    fn safe_join_rejects_windows_drive_colon() {
        let repo = Path::new("/repo");
        assert!(workspace_safe_join(repo, "C:/Windows").is_err());
    }

    #[test]
    fn safe_join_normal_relative_path() {
        let repo = Path::new("/repo");
        assert_eq!(
            workspace_safe_join(repo, "src/lib.rs").unwrap(),
            Path::new("/repo/src/lib.rs")
        );
    }

    #[test]
    fn validate_write_ref_rejects_token_longer_than_limit() {
        let too_long = "a".repeat(201);
        assert!(validate_write_ref(&too_long).is_err());
    }

    #[test]
    fn validate_write_ref_accepts_conservative_token() {
        assert!(validate_write_ref("feature/add-thing-123").is_ok());
    }
}
