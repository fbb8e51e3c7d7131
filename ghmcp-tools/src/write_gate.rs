//! Write-Gate (spec §4.F): the runtime `WRITE_ALLOWED` flag and
//! `_ensure_write_allowed`/`authorize_write_actions` primitives.
//!
//! Kept as a small injected service (spec §9 design note: "Global writable
//! flags... become an injected service") rather than a process-global
//! `static`, so tests can hold independent gates without `#[serial]`.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::side_effect::SideEffectClass;

/// Raised by [`WriteGate::ensure_allowed`] when a gated tool is invoked
/// without prior approval (spec §4.F, §6 S5).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("write action requires approval for tool `{tool_name}`")]
pub struct WriteApprovalRequiredError {
    pub tool_name: String,
    pub target_ref: Option<String>,
}

/// Process-wide (or per-server-instance, when injected per test) approval
/// flag plus the env-driven auto-approve toggle for `LOCAL_MUTATION` tools.
#[derive(Debug)]
pub struct WriteGate {
    /// Set by `authorize_write_actions(true)`; gates `REMOTE_MUTATION`.
    approved: AtomicBool,
    /// `GITHUB_MCP_WRITE_ALLOWED` (spec §4.F): when true, `LOCAL_MUTATION`
    /// tools are never gated and the catalog reports
    /// `write_auto_approved=true` uniformly.
    auto_approved_local: bool,
}

impl WriteGate {
    pub fn new(auto_approved_local: bool) -> Self {
        Self {
            approved: AtomicBool::new(false),
            auto_approved_local,
        }
    }

    /// `authorize_write_actions(approved)`: flips the process-wide flag.
    /// Never retroactively aborts an in-flight call (spec §5).
    pub fn authorize_write_actions(&self, approved: bool) {
        self.approved.store(approved, Ordering::SeqCst);
    }

    pub fn is_write_approved(&self) -> bool {
        self.approved.load(Ordering::SeqCst)
    }

    pub fn auto_approved_local(&self) -> bool {
        self.auto_approved_local
    }

    /// `_ensure_write_allowed(context, target_ref)` (spec §4.F): the single
    /// gate check point. `READ_ONLY` never gates. `LOCAL_MUTATION` and
    /// `REMOTE_MUTATION` both gate unless approved, where "approved" means
    /// either `authorize_write_actions(true)` was called or
    /// `GITHUB_MCP_WRITE_ALLOWED` auto-approved the whole process — env
    /// auto-approve clears every tool uniformly, not just local ones.
    pub fn ensure_allowed(
        &self,
        tool_name: &str,
        side_effect: SideEffectClass,
        target_ref: Option<&str>,
    ) -> Result<(), WriteApprovalRequiredError> {
        let gated = !matches!(side_effect, SideEffectClass::ReadOnly);
        if gated && !self.effectively_approved() {
            return Err(WriteApprovalRequiredError {
                tool_name: tool_name.to_string(),
                target_ref: target_ref.map(str::to_string),
            });
        }
        Ok(())
    }

    fn effectively_approved(&self) -> bool {
        self.auto_approved_local || self.is_write_approved()
    }

    /// Whether the catalog should report `approval_required=false` for a
    /// tool of the given class (spec §4.F auto-approve mode: "clients see
    /// `approval_required=false` uniformly").
    pub fn approval_required(&self, side_effect: SideEffectClass) -> bool {
        match side_effect {
            SideEffectClass::ReadOnly => false,
            SideEffectClass::RemoteMutation | SideEffectClass::LocalMutation => !self.effectively_approved(),
        }
    }
}

impl Default for WriteGate {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_never_gates() {
        let gate = WriteGate::default();
        assert!(gate.ensure_allowed("get_file_contents", SideEffectClass::ReadOnly, None).is_ok());
    }

    #[test]
    fn remote_mutation_requires_approval() {
        let gate = WriteGate::default();
        let err = gate
            .ensure_allowed("create_pull_request", SideEffectClass::RemoteMutation, None)
            .unwrap_err();
        assert_eq!(err.tool_name, "create_pull_request");

        gate.authorize_write_actions(true);
        assert!(gate
            .ensure_allowed("create_pull_request", SideEffectClass::RemoteMutation, None)
            .is_ok());
    }

    #[test]
    fn local_mutation_gated_unless_auto_approved() {
        let gated = WriteGate::new(false);
        assert!(gated
            .ensure_allowed("workspace_apply_patch", SideEffectClass::LocalMutation, None)
            .is_err());

        let auto = WriteGate::new(true);
        assert!(auto
            .ensure_allowed("workspace_apply_patch", SideEffectClass::LocalMutation, None)
            .is_ok());
    }

    #[test]
    fn approval_never_retroactively_aborts() {
        let gate = WriteGate::default();
        gate.authorize_write_actions(true);
        assert!(gate.is_write_approved());
        gate.authorize_write_actions(false);
        // A call already dispatched before this point is unaffected; this
        // property is exercised by the caller holding its own bool snapshot,
        // not by the gate itself (it has no notion of in-flight calls).
        assert!(!gate.is_write_approved());
    }

    #[test]
    fn approval_required_reporting_matches_gate_state() {
        let gate = WriteGate::default();
        assert!(gate.approval_required(SideEffectClass::RemoteMutation));
        gate.authorize_write_actions(true);
        assert!(!gate.approval_required(SideEffectClass::RemoteMutation));
    }

    #[test]
    fn env_auto_approve_clears_the_remote_gate_uniformly() {
        let gate = WriteGate::new(true);
        assert!(gate
            .ensure_allowed("create_pull_request", SideEffectClass::RemoteMutation, None)
            .is_ok());
        assert!(!gate.approval_required(SideEffectClass::RemoteMutation));
        assert!(!gate.approval_required(SideEffectClass::LocalMutation));
    }
}
