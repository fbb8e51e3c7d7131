//! Custom parser for "rangeless" unified diffs (spec §4.E.8): `diff --git`
//! blocks whose hunks lack well-formed `@@ -a,b +c,d @@` range headers.

use crate::error::WorkspaceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Update,
    MoveTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HunkLineKind {
    Context,
    Remove,
    Add,
}

#[derive(Debug, Clone)]
struct HunkLine {
    kind: HunkLineKind,
    text: String,
}

#[derive(Debug, Clone)]
pub struct RangelessHunk {
    lines: Vec<HunkLine>,
}

#[derive(Debug, Clone)]
pub struct RangelessFileDiff {
    pub a_path: String,
    pub b_path: String,
    pub action: FileAction,
    hunks: Vec<RangelessHunk>,
}

/// Parses every `diff --git a/<A> b/<B>` block in `patch`.
pub fn parse_rangeless_patch(patch: &str) -> Result<Vec<RangelessFileDiff>, WorkspaceError> {
    let mut files = Vec::new();
    let mut lines = patch.lines().peekable();

    while let Some(line) = lines.next() {
        if !line.starts_with("diff --git ") {
            continue;
        }
        let (a_path, b_path) = parse_diff_header(line)?;
        let action = if a_path == "/dev/null" {
            FileAction::Create
        } else if a_path == b_path {
            FileAction::Update
        } else {
            FileAction::MoveTo
        };

        let mut hunks = Vec::new();
        while let Some(&next) = lines.peek() {
            if next.starts_with("diff --git ") {
                break;
            }
            if next.trim_start().starts_with("@@") {
                lines.next();
                let mut hunk_lines = Vec::new();
                while let Some(&body_line) = lines.peek() {
                    if body_line.starts_with("diff --git ") || body_line.trim_start().starts_with("@@") {
                        break;
                    }
                    lines.next();
                    hunk_lines.push(parse_hunk_line(body_line)?);
                }
                hunks.push(RangelessHunk { lines: hunk_lines });
            } else {
                lines.next();
            }
        }

        files.push(RangelessFileDiff {
            a_path,
            b_path,
            action,
            hunks,
        });
    }

    if files.is_empty() {
        return Err(WorkspaceError::PatchMalformed(
            "no `diff --git` blocks found".to_string(),
        ));
    }

    Ok(files)
}

fn parse_diff_header(line: &str) -> Result<(String, String), WorkspaceError> {
    let rest = line.trim_start_matches("diff --git ").trim();
    let parts: Vec<&str> = rest.splitn(2, " b/").collect();
    if parts.len() != 2 {
        return Err(WorkspaceError::PatchMalformed(format!(
            "unparseable diff header: {line}"
        )));
    }
    let a = parts[0]
        .strip_prefix("a/")
        .unwrap_or(parts[0])
        .to_string();
    let b = parts[1].to_string();
    Ok((a, b))
}

fn parse_hunk_line(line: &str) -> Result<HunkLine, WorkspaceError> {
    if line.is_empty() {
        return Err(WorkspaceError::PatchMalformed(
            "blank line without a diff prefix inside a hunk".to_string(),
        ));
    }
    let (kind, rest) = match line.as_bytes()[0] {
        b' ' => (HunkLineKind::Context, &line[1..]),
        b'-' => (HunkLineKind::Remove, &line[1..]),
        b'+' => (HunkLineKind::Add, &line[1..]),
        _ => {
            return Err(WorkspaceError::PatchMalformed(format!(
                "hunk line missing `+`/`-`/` ` prefix: {line}"
            )))
        }
    };
    Ok(HunkLine {
        kind,
        text: rest.to_string(),
    })
}

/// Applies a single file's hunks sequentially against `original`, locating
/// each hunk's context/remove anchor and raising a precise error naming the
/// file and hunk index on failure.
pub fn apply_file_diff(file: &RangelessFileDiff, original: &str) -> Result<String, WorkspaceError> {
    let mut current: Vec<String> = if file.action == FileAction::Create {
        Vec::new()
    } else {
        original.lines().map(str::to_string).collect()
    };

    for (hunk_index, hunk) in file.hunks.iter().enumerate() {
        current = apply_hunk(&current, hunk, &file.b_path, hunk_index)?;
    }

    let mut result = current.join("\n");
    if original.ends_with('\n') || file.action == FileAction::Create {
        result.push('\n');
    }
    Ok(result)
}

fn apply_hunk(
    current: &[String],
    hunk: &RangelessHunk,
    path: &str,
    hunk_index: usize,
) -> Result<Vec<String>, WorkspaceError> {
    let anchor: Vec<&str> = hunk
        .lines
        .iter()
        .filter(|l| l.kind != HunkLineKind::Add)
        .map(|l| l.text.as_str())
        .collect();

    let start = find_anchor(current, &anchor).ok_or_else(|| {
        WorkspaceError::PatchDoesNotApply(format!(
            "{path}: hunk {hunk_index} context not found"
        ))
    })?;

    let mut result = current[..start].to_vec();
    for line in &hunk.lines {
        match line.kind {
            HunkLineKind::Context => result.push(line.text.clone()),
            HunkLineKind::Add => result.push(line.text.clone()),
            HunkLineKind::Remove => {}
        }
    }
    result.extend_from_slice(&current[start + anchor.len()..]);
    Ok(result)
}

fn find_anchor(haystack: &[String], anchor: &[&str]) -> Option<usize> {
    if anchor.is_empty() {
        return Some(0);
    }
    haystack
        .windows(anchor.len())
        .position(|window| window.iter().map(String::as_str).eq(anchor.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_update_block() {
        let patch = "diff --git a/src/lib.rs b/src/lib.rs\n@@ \n fn main() {\n-    old();\n+    new();\n }\n";
        let files = parse_rangeless_patch(patch).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].action, FileAction::Update);
    }

    #[test]
    fn detects_create_action_for_dev_null_source() {
        let patch = "diff --git a//dev/null b/new_file.rs\n@@ \n+hello\n";
        let files = parse_rangeless_patch(patch).unwrap();
        assert_eq!(files[0].action, FileAction::Create);
    }

    #[test]
    fn detects_move_action_when_paths_differ() {
        let patch = "diff --git a/old.rs b/new.rs\n@@ \n context\n";
        let files = parse_rangeless_patch(patch).unwrap();
        assert_eq!(files[0].action, FileAction::MoveTo);
        assert_eq!(files[0].b_path, "new.rs");
    }

    #[test]
    fn rejects_blank_line_inside_hunk() {
        let patch = "diff --git a/x.rs b/x.rs\n@@ \n context\n\n+added\n";
        assert!(parse_rangeless_patch(patch).is_err());
    }

    #[test]
    fn applies_hunk_against_original_contents() {
        let patch = "diff --git a/x.rs b/x.rs\n@@ \n fn main() {\n-    old();\n+    new();\n }\n";
        let files = parse_rangeless_patch(patch).unwrap();
        let original = "fn main() {\n    old();\n}\n";
        let updated = apply_file_diff(&files[0], original).unwrap();
        assert!(updated.contains("new();"));
        assert!(!updated.contains("old();"));
    }

    #[test]
    fn fails_with_precise_location_when_anchor_missing() {
        let patch = "diff --git a/x.rs b/x.rs\n@@ \n-missing_line();\n+replacement();\n";
        let files = parse_rangeless_patch(patch).unwrap();
        let err = apply_file_diff(&files[0], "fn main() {}\n").unwrap_err();
        assert!(err.to_string().contains("hunk 0"));
    }

    #[test]
    fn rejects_patch_without_diff_blocks() {
        assert!(parse_rangeless_patch("not a patch at all").is_err());
    }
}
