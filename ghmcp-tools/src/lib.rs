//! Tool Registry & Dispatch Core, Introspection, Request Context, and the
//! representative Workspace/GitHub tool surface (spec components F, G, H,
//! I, L).
//!
//! Module layout mirrors the spec's own lettering rather than a generic
//! `handlers/`+`core/` split: [`side_effect`] and [`write_gate`] are the
//! write-gate (F), [`schema`]/[`validate`]/[`tool`]/[`registry`] are the
//! dispatch core (G), [`introspection`] is H, [`context`] is I, and
//! [`surface`] is the representative tool set (L) built on top of
//! `ghmcp-github`/`ghmcp-workspace`.

pub mod context;
pub mod dispatch_error;
pub mod introspection;
pub mod registry;
pub mod schema;
pub mod side_effect;
pub mod surface;
pub mod tool;
pub mod validate;
pub mod write_gate;

pub use context::{HeaderLookup, RequestContextBuilder, WorkspaceLocks};
pub use dispatch_error::ToolDispatchError;
pub use introspection::{
    describe_tool, list_all_actions, list_tools, validate_tool_args, ActionSummary, IntrospectionError,
    ListToolsFilter, ToolDescription, ToolSummary, ToolValidationResult,
};
pub use registry::{DispatchOutcome, EventSink, ToolRegistry};
pub use schema::{InputSchema, PropertySchema, PropertyType};
pub use side_effect::{side_effect_for, SideEffectClass};
pub use surface::{build_registry, ToolDeps};
pub use tool::{Tool, ToolBuilder, ToolHandler, Visibility, WriteActionResolver};
pub use validate::{normalize_args, validate_args, NormalizeError, ValidationError};
pub use write_gate::{WriteApprovalRequiredError, WriteGate};
