//! Write-Gate & Side-Effect Table (spec §4.F): the single static map every
//! tool's `side_effect` is looked up against, plus the closed enum itself.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// `READ_ONLY | LOCAL_MUTATION | REMOTE_MUTATION` (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SideEffectClass {
    ReadOnly,
    LocalMutation,
    RemoteMutation,
}

impl SideEffectClass {
    /// `write_action` is derived; `true` iff `REMOTE_MUTATION` (spec §3
    /// invariant: "tools flagged `REMOTE_MUTATION` by the table cannot be
    /// downgraded below their static class except via an explicit resolver
    /// returning false").
    pub fn write_action(self) -> bool {
        matches!(self, SideEffectClass::RemoteMutation)
    }

    /// Whether the connector UI must prompt for approval before this tool
    /// ever runs (spec §4.F gate rule).
    pub fn always_prompts(self) -> bool {
        matches!(self, SideEffectClass::RemoteMutation)
    }
}

/// The static `tool_name → SideEffectClass` table (spec §4.F: "single
/// source of truth"). Built once and cached; entries not present here are
/// a registration bug, not a runtime fallback — [`crate::registry::ToolRegistry::register`]
/// panics rather than silently defaulting a tool to read-only.
fn table() -> &'static HashMap<&'static str, SideEffectClass> {
    static TABLE: OnceLock<HashMap<&'static str, SideEffectClass>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use SideEffectClass::{LocalMutation, ReadOnly, RemoteMutation};
        HashMap::from([
            // Introspection (§4.H) — always read-only.
            ("list_tools", ReadOnly),
            ("list_all_actions", ReadOnly),
            ("describe_tool", ReadOnly),
            ("validate_tool_args", ReadOnly),
            // GitHub read surface (§4.K, §4.J).
            ("get_file_contents", ReadOnly),
            ("get_file_excerpt", ReadOnly),
            ("get_repository", ReadOnly),
            ("list_branches", ReadOnly),
            ("search_code", ReadOnly),
            ("search_repositories", ReadOnly),
            ("get_pull_request", ReadOnly),
            ("list_pull_requests", ReadOnly),
            ("get_workflow_run", ReadOnly),
            ("list_commits", ReadOnly),
            // GitHub write surface (§4.K, §6 S2/S5).
            ("create_or_update_file", RemoteMutation),
            ("apply_patch_and_commit", RemoteMutation),
            ("create_pull_request", RemoteMutation),
            ("merge_pull_request", RemoteMutation),
            ("create_branch_remote", RemoteMutation),
            ("create_issue_comment", RemoteMutation),
            // Workspace engine surface (§4.E, §4.L).
            ("workspace_clone_repo", LocalMutation),
            ("workspace_refresh", LocalMutation),
            ("workspace_create_branch", LocalMutation),
            ("workspace_self_heal_branch", LocalMutation),
            ("workspace_apply_patch", LocalMutation),
            ("workspace_apply_operations", LocalMutation),
            ("workspace_read_file", ReadOnly),
            ("workspace_list_files", ReadOnly),
            ("workspace_sync_status", ReadOnly),
            ("workspace_sync_to_remote", LocalMutation),
            ("workspace_prepare_virtualenv", LocalMutation),
            ("workspace_stop_virtualenv", LocalMutation),
            ("workspace_venv_status", ReadOnly),
            ("workspace_batch", RemoteMutation),
            // Run tests inside a workspace venv — see spec §9 Open Questions:
            // the table classifies this LOCAL_MUTATION (it may create/update
            // `.venv-mcp`) even though some callers expect read-only.
            ("run_tests", LocalMutation),
        ])
    })
}

/// Looks up the static side-effect class for `tool_name`. `None` means the
/// name is not registered at all (distinct from "registered but
/// unclassified", which the table's construction makes unrepresentable).
pub fn side_effect_for(tool_name: &str) -> Option<SideEffectClass> {
    table().get(tool_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_mutation_tools_are_write_actions() {
        assert_eq!(side_effect_for("create_pull_request"), Some(SideEffectClass::RemoteMutation));
        assert!(side_effect_for("create_pull_request").unwrap().write_action());
    }

    #[test]
    fn read_only_tools_are_not_write_actions() {
        assert_eq!(side_effect_for("get_file_contents"), Some(SideEffectClass::ReadOnly));
        assert!(!side_effect_for("get_file_contents").unwrap().write_action());
    }

    #[test]
    fn local_mutation_is_not_a_write_action_but_is_gated_separately() {
        let class = side_effect_for("workspace_apply_patch").unwrap();
        assert!(!class.write_action());
        assert!(!class.always_prompts());
    }

    #[test]
    fn unknown_tool_is_absent_not_defaulted() {
        assert_eq!(side_effect_for("totally_unregistered_tool"), None);
    }
}
