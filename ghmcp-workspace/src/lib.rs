//! Per-(repo, ref) on-disk Git workspace engine.
//!
//! Every workspace lives under `WORKSPACE_BASE/<owner__repo>/<ref_slashes__>`
//! ([`paths`]). Git is driven directly rather than through a generic shell
//! runner ([`git_exec`]) so stderr can be pattern-matched for retry-worthy
//! failures. The rest of the modules build on those two: cloning/refreshing
//! ([`clone`]), branch creation ([`branch`]), recovery from a mangled
//! checkout ([`self_heal`]), patch application ([`patch`], [`rangeless`]),
//! the atomic multi-op editor ([`editor`]), a scratch virtualenv
//! ([`venv`]), and remote divergence ([`sync`]).

pub mod branch;
pub mod clone;
pub mod editor;
pub mod error;
pub mod git_exec;
pub mod patch;
pub mod paths;
pub mod rangeless;
pub mod self_heal;
pub mod slug;
pub mod sync;
pub mod venv;

pub use branch::create_branch;
pub use clone::clone_repo;
pub use editor::{apply_workspace_operations, EditorOutcome, OpResult, OpStatus, WorkspaceOperation};
pub use error::WorkspaceError;
pub use patch::apply_patch;
pub use paths::{sanitize_ref, validate_write_ref, workspace_path, workspace_safe_join};
pub use self_heal::{diagnose, self_heal_branch, Diagnosis, SelfHealResult, WorkspaceSnapshot};
pub use sync::{sync_status, sync_to_remote, SyncStatus};
pub use venv::{prepare_temp_virtualenv, stop_workspace_virtualenv, venv_status, VenvStatus};
