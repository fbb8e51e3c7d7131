//! Patch application (spec §4.E.7): pre-processes caller-supplied unified
//! diffs, then applies them via `git apply` or, for diffs lacking well-formed
//! range headers, the rangeless parser (§4.E.8).

use std::path::Path;
use std::time::Duration;

use ghmcp_config::ServerConfig;

use crate::error::WorkspaceError;
use crate::git_exec::run_git_with_retry;
use crate::paths::workspace_safe_join;
use crate::rangeless::{apply_file_diff, parse_rangeless_patch};

/// Strips decorative code fences / blank lines before the first diff marker,
/// trailing fences / stray braces, and unescapes `\n`-escaped patches.
pub fn preprocess_patch(raw: &str) -> String {
    let mut text = raw.to_string();

    if text.contains("\\n") && !text.contains('\n') {
        text = text.replace("\\r\\n", "\n").replace("\\n", "\n");
    }

    let first_marker = text
        .find("diff --git ")
        .or_else(|| text.find("--- "))
        .or_else(|| text.find("@@"));
    if let Some(start) = first_marker {
        let mut head = &text[..start];
        head = head.trim_end();
        let head_is_decorative = head
            .lines()
            .all(|line| {
                let trimmed = line.trim();
                trimmed.is_empty() || trimmed.starts_with("```")
            });
        if head_is_decorative {
            text = text[start..].to_string();
        }
    }

    let trimmed_end = text.trim_end();
    let mut end = trimmed_end.len();
    for line in trimmed_end.lines().rev() {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with("```") || stripped == "}" {
            end -= line.len() + 1;
        } else {
            break;
        }
    }
    text = trimmed_end[..end.min(trimmed_end.len())].to_string();

    text.trim().to_string()
}

fn has_well_formed_headers(patch: &str) -> bool {
    patch.lines().any(|line| {
        let trimmed = line.trim_start();
        trimmed.starts_with("@@ -") && trimmed.contains(" +") && trimmed.matches("@@").count() >= 2
    })
}

async fn git_apply(
    repo_dir: &Path,
    patch: &str,
    config: &ServerConfig,
    token: Option<&str>,
) -> Result<crate::git_exec::GitCommandOutput, WorkspaceError> {
    let patch_file = repo_dir.join(format!(".mcp-patch-{}.diff", std::process::id()));
    tokio::fs::write(&patch_file, patch)
        .await
        .map_err(WorkspaceError::Io)?;

    let patch_path = patch_file.to_string_lossy().into_owned();
    let result = run_git_with_retry(
        &["apply", "--whitespace=nowarn", &patch_path],
        repo_dir,
        &std::env::vars().collect(),
        token,
        config.rate_limit_retry_max_attempts,
        config.rate_limit_retry_base_delay,
        config.rate_limit_retry_max_wait,
        Duration::from_secs(30),
        config.tool_stdout_max_chars,
    )
    .await;

    let _ = tokio::fs::remove_file(&patch_file).await;
    result
}

fn numbered_preview(patch: &str) -> String {
    patch
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>4} | {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies `raw_patch` to the working tree rooted at `repo_dir`.
pub async fn apply_patch(
    config: &ServerConfig,
    repo_dir: &Path,
    raw_patch: &str,
    token: Option<&str>,
) -> Result<(), WorkspaceError> {
    let patch = preprocess_patch(raw_patch);
    if patch.is_empty() {
        return Err(WorkspaceError::PatchEmpty);
    }

    if has_well_formed_headers(&patch) {
        let output = git_apply(repo_dir, &patch, config, token).await?;
        if output.success {
            return Ok(());
        }
        if output.stderr.to_ascii_lowercase().contains("does not apply")
            || output.stderr.to_ascii_lowercase().contains("patch failed")
        {
            return Err(WorkspaceError::PatchDoesNotApply(format!(
                "{}\n\n--- patch preview ---\n{}",
                output.stderr,
                numbered_preview(&patch)
            )));
        }
        return Err(WorkspaceError::PatchMalformed(output.stderr));
    }

    apply_rangeless(repo_dir, &patch)?;
    Ok(())
}

fn apply_rangeless(repo_dir: &Path, patch: &str) -> Result<(), WorkspaceError> {
    let files = parse_rangeless_patch(patch)?;
    for file in &files {
        let target_path = workspace_safe_join(repo_dir, &file.b_path)?;
        let original = if file.a_path == "/dev/null" {
            String::new()
        } else {
            let source_path = workspace_safe_join(repo_dir, &file.a_path)?;
            std::fs::read_to_string(&source_path).unwrap_or_default()
        };

        let updated = apply_file_diff(file, &original)?;

        if let Some(parent) = target_path.parent() {
            std::fs::create_dir_all(parent).map_err(WorkspaceError::Io)?;
        }
        std::fs::write(&target_path, updated).map_err(WorkspaceError::Io)?;

        if file.a_path != file.b_path && file.a_path != "/dev/null" {
            let source_path = workspace_safe_join(repo_dir, &file.a_path)?;
            let _ = std::fs::remove_file(source_path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_code_fence() {
        let raw = "```diff\ndiff --git a/x.rs b/x.rs\n@@ -1,1 +1,1 @@\n-old\n+new\n```";
        let cleaned = preprocess_patch(raw);
        assert!(cleaned.starts_with("diff --git"));
        assert!(!cleaned.contains("```"));
    }

    #[test]
    fn unescapes_literal_newline_sequences() {
        let raw = "diff --git a/x.rs b/x.rs\\n@@ -1,1 +1,1 @@\\n-old\\n+new\\n";
        let cleaned = preprocess_patch(raw);
        assert!(cleaned.contains('\n'));
        assert!(!cleaned.contains("\\n"));
    }

    #[test]
    fn detects_well_formed_range_headers() {
        assert!(has_well_formed_headers("@@ -1,2 +1,2 @@\n-a\n+b\n"));
        assert!(!has_well_formed_headers("@@ \n-a\n+b\n"));
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert!(preprocess_patch("```diff\n```").is_empty());
    }
}
