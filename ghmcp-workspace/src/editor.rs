//! Multi-op editor (spec §4.E.10): `apply_workspace_operations`. Operation
//! aliases (`rm`→`delete`, `mv`→`move`, `mkdirp`→`mkdir`+parents,
//! `operation`→`op`) are normalized before execution, matching the spec §3
//! op set: `write`, `replace_text`, `edit_range`, `delete_lines`,
//! `delete_word`, `delete_chars`, `delete`, `move`, `mkdir`, `apply_patch`,
//! `read_sections`.

use std::collections::HashMap;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use ghmcp_commons::safe_replace_text;
use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;
use crate::paths::workspace_safe_join;
use crate::rangeless::{apply_file_diff, parse_rangeless_patch};

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceOperation {
    #[serde(alias = "operation")]
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub old_str: Option<String>,
    #[serde(default)]
    pub new_str: Option<String>,
    #[serde(default, alias = "dst")]
    pub dest: Option<String>,
    #[serde(default)]
    pub parents: bool,
    /// 1-based, inclusive start line for `edit_range`/`delete_lines`.
    #[serde(default)]
    pub start_line: Option<usize>,
    /// 1-based, inclusive end line for `edit_range`/`delete_lines`.
    #[serde(default)]
    pub end_line: Option<usize>,
    /// Replacement text for `edit_range` (absent ⇒ the range is deleted).
    #[serde(default)]
    pub new_content: Option<String>,
    /// Target word/token for `delete_word`.
    #[serde(default)]
    pub word: Option<String>,
    /// Which match of `word` to remove; `None` removes every occurrence.
    #[serde(default)]
    pub occurrence: Option<usize>,
    /// 0-based, inclusive-exclusive char range for `delete_chars`.
    #[serde(default)]
    pub start_char: Option<usize>,
    #[serde(default)]
    pub end_char: Option<usize>,
    /// Unified/rangeless diff text for `apply_patch`.
    #[serde(default)]
    pub patch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NormalizedOp {
    ReadSections,
    Write,
    ReplaceText,
    EditRange,
    DeleteLines,
    DeleteWord,
    DeleteChars,
    Delete,
    Move,
    Mkdir,
    ApplyPatch,
}

fn normalize_op(raw: &str, parents_flag: bool) -> Result<(NormalizedOp, bool), WorkspaceError> {
    match raw {
        "read_sections" | "read" => Ok((NormalizedOp::ReadSections, parents_flag)),
        // `create`/`update` are retained as aliases of `write` for backward
        // compatibility with earlier callers of this editor.
        "write" | "create" | "update" => Ok((NormalizedOp::Write, parents_flag)),
        "replace_text" => Ok((NormalizedOp::ReplaceText, parents_flag)),
        "edit_range" => Ok((NormalizedOp::EditRange, parents_flag)),
        "delete_lines" => Ok((NormalizedOp::DeleteLines, parents_flag)),
        "delete_word" => Ok((NormalizedOp::DeleteWord, parents_flag)),
        "delete_chars" => Ok((NormalizedOp::DeleteChars, parents_flag)),
        "delete" | "rm" => Ok((NormalizedOp::Delete, parents_flag)),
        "move" | "mv" => Ok((NormalizedOp::Move, parents_flag)),
        "mkdir" => Ok((NormalizedOp::Mkdir, parents_flag)),
        "mkdirp" => Ok((NormalizedOp::Mkdir, true)),
        "apply_patch" => Ok((NormalizedOp::ApplyPatch, parents_flag)),
        other => Err(WorkspaceError::InvalidPath(format!("unknown op `{other}`"))),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    Ok,
    Error,
    Noop,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpResult {
    pub op: String,
    pub path: String,
    pub status: OpStatus,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorOutcome {
    pub results: Vec<OpResult>,
    pub is_write: bool,
    pub rolled_back: bool,
}

/// Determines whether this batch is a write action: `preview_only` and
/// all-`read_sections` batches classify read-only (spec §4.E.10).
pub fn resolves_to_write(ops: &[WorkspaceOperation], preview_only: bool) -> bool {
    if preview_only {
        return false;
    }
    !ops.iter().all(|op| matches!(op.op.as_str(), "read_sections" | "read"))
}

/// Applies `start_line..=end_line` (1-based, inclusive) replacement/removal
/// against `existing`'s lines, used by `edit_range` and `delete_lines`.
fn splice_lines(
    existing: &str,
    start_line: usize,
    end_line: usize,
    replacement: Option<&str>,
) -> Result<String, WorkspaceError> {
    let had_trailing_newline = existing.ends_with('\n');
    let mut lines: Vec<&str> = existing.lines().collect();
    if start_line == 0 || start_line > end_line || end_line > lines.len() {
        return Err(WorkspaceError::InvalidPath(format!(
            "line range {start_line}..={end_line} out of bounds for {} lines",
            lines.len()
        )));
    }
    let start_idx = start_line - 1;
    let end_idx = end_line; // exclusive, since end_line is inclusive 1-based
    let replacement_lines: Vec<&str> = match replacement {
        Some(text) if !text.is_empty() => text.lines().collect(),
        _ => Vec::new(),
    };
    lines.splice(start_idx..end_idx, replacement_lines);
    let mut result = lines.join("\n");
    if had_trailing_newline && !result.is_empty() {
        result.push('\n');
    }
    Ok(result)
}

/// Removes the `occurrence`-th match of `word` (1-based; `None` removes
/// every match) used by `delete_word`.
fn remove_word(existing: &str, word: &str, occurrence: Option<usize>) -> Result<String, WorkspaceError> {
    if word.is_empty() {
        return Err(WorkspaceError::InvalidPath("delete_word requires a non-empty word".into()));
    }
    match occurrence {
        None => Ok(existing.replace(word, "")),
        Some(n) if n >= 1 => {
            let mut result = String::with_capacity(existing.len());
            let mut rest = existing;
            let mut seen = 0usize;
            while let Some(pos) = rest.find(word) {
                if seen + 1 == n {
                    result.push_str(&rest[..pos]);
                    result.push_str(&rest[pos + word.len()..]);
                    return Ok(result);
                }
                result.push_str(&rest[..pos + word.len()]);
                rest = &rest[pos + word.len()..];
                seen += 1;
            }
            Err(WorkspaceError::InvalidPath(format!(
                "delete_word: only {seen} occurrence(s) of {word:?} found, requested #{n}"
            )))
        }
        Some(0) => Err(WorkspaceError::InvalidPath("delete_word occurrence is 1-based".into())),
        Some(_) => unreachable!(),
    }
}

/// Removes `start_char..end_char` (0-based, half-open, char-indexed, not
/// byte-indexed so multi-byte UTF-8 content stays valid) from `existing`.
fn remove_chars(existing: &str, start_char: usize, end_char: usize) -> Result<String, WorkspaceError> {
    let chars: Vec<char> = existing.chars().collect();
    if start_char > end_char || end_char > chars.len() {
        return Err(WorkspaceError::InvalidPath(format!(
            "char range {start_char}..{end_char} out of bounds for {} chars",
            chars.len()
        )));
    }
    let mut result: String = chars[..start_char].iter().collect();
    result.extend(&chars[end_char..]);
    Ok(result)
}

enum SnapshotEntry {
    Existed(Vec<u8>, Option<u32>),
    Created,
}

/// Applies `ops` sequentially against `repo_dir`. `preview_only` computes
/// every op entirely in memory (no filesystem writes); `rollback_on_error`
/// restores prior file states from an in-memory snapshot on the first error
/// when `fail_fast` stops the batch.
pub fn apply_workspace_operations(
    repo_dir: &Path,
    ops: &[WorkspaceOperation],
    preview_only: bool,
    fail_fast: bool,
    rollback_on_error: bool,
    create_parents: bool,
) -> Result<EditorOutcome, WorkspaceError> {
    let is_write = resolves_to_write(ops, preview_only);
    let mut results = Vec::with_capacity(ops.len());
    let mut snapshots: HashMap<PathBuf, SnapshotEntry> = HashMap::new();
    let mut rolled_back = false;

    for op in ops {
        let (kind, parents) = match normalize_op(&op.op, op.parents || create_parents) {
            Ok(v) => v,
            Err(err) => {
                results.push(OpResult {
                    op: op.op.clone(),
                    path: op.path.clone(),
                    status: OpStatus::Error,
                    message: Some(err.to_string()),
                });
                if fail_fast {
                    break;
                }
                continue;
            }
        };

        let outcome = apply_one(repo_dir, op, &kind, parents, preview_only, &mut snapshots);
        let failed = matches!(outcome.status, OpStatus::Error);
        results.push(outcome);

        if failed && fail_fast {
            if rollback_on_error && !preview_only {
                restore_snapshots(&snapshots);
                rolled_back = true;
            }
            break;
        }
    }

    Ok(EditorOutcome {
        results,
        is_write,
        rolled_back,
    })
}

fn apply_one(
    repo_dir: &Path,
    op: &WorkspaceOperation,
    kind: &NormalizedOp,
    parents: bool,
    preview_only: bool,
    snapshots: &mut HashMap<PathBuf, SnapshotEntry>,
) -> OpResult {
    let result = (|| -> Result<OpStatus, WorkspaceError> {
        let target = workspace_safe_join(repo_dir, &op.path)?;

        match kind {
            NormalizedOp::ReadSections => Ok(OpStatus::Ok),
            NormalizedOp::Mkdir => {
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                if target.is_dir() {
                    return Ok(OpStatus::Noop);
                }
                std::fs::create_dir_all(&target).map_err(WorkspaceError::Io)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::Write => {
                snapshot_before(&target, snapshots);
                // `write` overwrites wholesale from `content`; when the file
                // already exists and only `old_str`/`new_str` were given
                // (the `update` alias's historical shape), fall back to a
                // text replacement instead of requiring full content.
                let updated = match &op.content {
                    Some(content) => content.clone(),
                    None => {
                        let existing = std::fs::read_to_string(&target).unwrap_or_default();
                        match (&op.old_str, &op.new_str) {
                            (Some(old), Some(new)) => {
                                safe_replace_text(&existing, old, new).map_err(WorkspaceError::Other)?
                            }
                            _ => {
                                return Err(WorkspaceError::InvalidPath(
                                    "write requires content or old_str/new_str".into(),
                                ));
                            }
                        }
                    }
                };
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                if parents {
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent).map_err(WorkspaceError::Io)?;
                    }
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::ReplaceText => {
                snapshot_before(&target, snapshots);
                let existing = std::fs::read_to_string(&target).map_err(WorkspaceError::Io)?;
                let old = op.old_str.as_deref().ok_or_else(|| {
                    WorkspaceError::InvalidPath("replace_text requires old_str".into())
                })?;
                let new = op.new_str.as_deref().unwrap_or("");
                let updated = safe_replace_text(&existing, old, new).map_err(WorkspaceError::Other)?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::EditRange => {
                snapshot_before(&target, snapshots);
                let existing = std::fs::read_to_string(&target).map_err(WorkspaceError::Io)?;
                let start = op.start_line.ok_or_else(|| {
                    WorkspaceError::InvalidPath("edit_range requires start_line".into())
                })?;
                let end = op.end_line.unwrap_or(start);
                let updated = splice_lines(&existing, start, end, op.new_content.as_deref())?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::DeleteLines => {
                snapshot_before(&target, snapshots);
                let existing = std::fs::read_to_string(&target).map_err(WorkspaceError::Io)?;
                let start = op.start_line.ok_or_else(|| {
                    WorkspaceError::InvalidPath("delete_lines requires start_line".into())
                })?;
                let end = op.end_line.unwrap_or(start);
                let updated = splice_lines(&existing, start, end, None)?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::DeleteWord => {
                snapshot_before(&target, snapshots);
                let existing = std::fs::read_to_string(&target).map_err(WorkspaceError::Io)?;
                let word = op.word.as_deref().ok_or_else(|| {
                    WorkspaceError::InvalidPath("delete_word requires word".into())
                })?;
                let updated = remove_word(&existing, word, op.occurrence)?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::DeleteChars => {
                snapshot_before(&target, snapshots);
                let existing = std::fs::read_to_string(&target).map_err(WorkspaceError::Io)?;
                let start = op.start_char.ok_or_else(|| {
                    WorkspaceError::InvalidPath("delete_chars requires start_char".into())
                })?;
                let end = op.end_char.ok_or_else(|| {
                    WorkspaceError::InvalidPath("delete_chars requires end_char".into())
                })?;
                let updated = remove_chars(&existing, start, end)?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::ApplyPatch => {
                snapshot_before(&target, snapshots);
                let patch_text = op.patch.as_deref().ok_or_else(|| {
                    WorkspaceError::InvalidPath("apply_patch requires patch".into())
                })?;
                let files = parse_rangeless_patch(patch_text)?;
                let file_diff = files.first().ok_or(WorkspaceError::PatchEmpty)?;
                let original = std::fs::read_to_string(&target).unwrap_or_default();
                let updated = apply_file_diff(file_diff, &original)?;
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                let mode = file_mode(&target);
                atomic_write(&target, updated.as_bytes(), mode)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::Delete => {
                if !target.exists() {
                    return Ok(OpStatus::Noop);
                }
                snapshot_before(&target, snapshots);
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                std::fs::remove_file(&target).map_err(WorkspaceError::Io)?;
                Ok(OpStatus::Ok)
            }
            NormalizedOp::Move => {
                let dest_rel = op.dest.clone().ok_or_else(|| {
                    WorkspaceError::InvalidPath("move requires dest".into())
                })?;
                let dest = workspace_safe_join(repo_dir, &dest_rel)?;
                snapshot_before(&target, snapshots);
                snapshot_before(&dest, snapshots);
                if preview_only {
                    return Ok(OpStatus::Ok);
                }
                if let Some(parent) = dest.parent() {
                    std::fs::create_dir_all(parent).map_err(WorkspaceError::Io)?;
                }
                std::fs::rename(&target, &dest).map_err(WorkspaceError::Io)?;
                Ok(OpStatus::Ok)
            }
        }
    })();

    match result {
        Ok(status) => OpResult {
            op: op.op.clone(),
            path: op.path.clone(),
            status,
            message: None,
        },
        Err(err) => OpResult {
            op: op.op.clone(),
            path: op.path.clone(),
            status: OpStatus::Error,
            message: Some(err.to_string()),
        },
    }
}

fn snapshot_before(target: &Path, snapshots: &mut HashMap<PathBuf, SnapshotEntry>) {
    if snapshots.contains_key(target) {
        return;
    }
    let entry = if let Ok(bytes) = std::fs::read(target) {
        let mode = file_mode(target);
        SnapshotEntry::Existed(bytes, mode)
    } else {
        SnapshotEntry::Created
    };
    snapshots.insert(target.to_path_buf(), entry);
}

fn restore_snapshots(snapshots: &HashMap<PathBuf, SnapshotEntry>) {
    for (path, entry) in snapshots {
        match entry {
            SnapshotEntry::Existed(bytes, mode) => {
                let _ = atomic_write(path, bytes, *mode);
            }
            SnapshotEntry::Created => {
                let _ = std::fs::remove_file(path);
            }
        }
    }
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).ok().map(|meta| meta.permissions().mode())
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Option<u32> {
    None
}

/// Writes `contents` to `target` atomically: temp file in the same
/// directory, fsync, rename, fsync the directory. Preserves the previous
/// mode on overwrite when `mode` is given.
fn atomic_write(target: &Path, contents: &[u8], mode: Option<u32>) -> Result<(), WorkspaceError> {
    let parent = target.parent().ok_or_else(|| {
        WorkspaceError::InvalidPath(target.display().to_string())
    })?;
    std::fs::create_dir_all(parent).map_err(WorkspaceError::Io)?;

    let temp_name = format!(
        ".mcp-write-{}-{}.tmp",
        std::process::id(),
        target.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
    );
    let temp_path = parent.join(temp_name);

    {
        let mut file = std::fs::File::create(&temp_path).map_err(WorkspaceError::Io)?;
        file.write_all(contents).map_err(WorkspaceError::Io)?;
        file.sync_all().map_err(WorkspaceError::Io)?;
    }

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&temp_path, std::fs::Permissions::from_mode(mode))
            .map_err(WorkspaceError::Io)?;
    }

    std::fs::rename(&temp_path, target).map_err(WorkspaceError::Io)?;

    #[cfg(unix)]
    {
        if let Ok(dir) = std::fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn normalizes_aliases() {
        assert_eq!(normalize_op("rm", false).unwrap().0, NormalizedOp::Delete);
        assert_eq!(normalize_op("mv", false).unwrap().0, NormalizedOp::Move);
        let (kind, parents) = normalize_op("mkdirp", false).unwrap();
        assert_eq!(kind, NormalizedOp::Mkdir);
        assert!(parents);
    }

    #[test]
    fn write_resolver_treats_read_only_batches_as_non_write() {
        let ops = vec![WorkspaceOperation {
            op: "read_sections".into(),
            path: "a.txt".into(),
            content: None,
            old_str: None,
            new_str: None,
            dest: None,
            parents: false,
        }];
        assert!(!resolves_to_write(&ops, false));
    }

    #[test]
    fn write_resolver_treats_preview_only_as_non_write_even_with_create() {
        let ops = vec![WorkspaceOperation {
            op: "create".into(),
            path: "a.txt".into(),
            content: Some("x".into()),
            old_str: None,
            new_str: None,
            dest: None,
            parents: false,
        }];
        assert!(!resolves_to_write(&ops, true));
        assert!(resolves_to_write(&ops, false));
    }

    #[test]
    fn create_then_update_then_delete_roundtrip() {
        let dir = tempdir().unwrap();
        let ops = vec![
            WorkspaceOperation {
                op: "create".into(),
                path: "notes.txt".into(),
                content: Some("hello".into()),
                old_str: None,
                new_str: None,
                dest: None,
                parents: false,
            },
            WorkspaceOperation {
                op: "update".into(),
                path: "notes.txt".into(),
                content: None,
                old_str: Some("hello".into()),
                new_str: Some("hello world".into()),
                dest: None,
                parents: false,
            },
        ];
        let outcome = apply_workspace_operations(dir.path(), &ops, false, true, false, false).unwrap();
        assert!(outcome.is_write);
        assert!(outcome.results.iter().all(|r| matches!(r.status, OpStatus::Ok)));
        let contents = std::fs::read_to_string(dir.path().join("notes.txt")).unwrap();
        assert_eq!(contents, "hello world");
    }

    #[test]
    fn preview_only_does_not_touch_filesystem() {
        let dir = tempdir().unwrap();
        let ops = vec![WorkspaceOperation {
            op: "create".into(),
            path: "ghost.txt".into(),
            content: Some("boo".into()),
            old_str: None,
            new_str: None,
            dest: None,
            parents: false,
        }];
        apply_workspace_operations(dir.path(), &ops, true, true, false, false).unwrap();
        assert!(!dir.path().join("ghost.txt").exists());
    }

    #[test]
    fn rollback_restores_overwritten_file_on_later_failure() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("existing.txt"), "original").unwrap();
        let ops = vec![
            WorkspaceOperation {
                op: "update".into(),
                path: "existing.txt".into(),
                content: None,
                old_str: Some("original".into()),
                new_str: Some("changed".into()),
                dest: None,
                parents: false,
            },
            WorkspaceOperation {
                op: "update".into(),
                path: "missing.txt".into(),
                content: None,
                old_str: Some("x".into()),
                new_str: Some("y".into()),
                dest: None,
                parents: false,
            },
        ];
        let outcome = apply_workspace_operations(dir.path(), &ops, false, true, true, false).unwrap();
        assert!(outcome.rolled_back);
        let contents = std::fs::read_to_string(dir.path().join("existing.txt")).unwrap();
        assert_eq!(contents, "original");
    }
}
