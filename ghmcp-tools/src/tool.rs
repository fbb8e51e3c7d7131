//! The immutable `Tool` record (spec §3) and the handler/resolver function
//! shapes it's built from (spec §9: "each tool is a value implementing a
//! common `Tool` interface {name, schema, sideEffect, handler}").

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::dispatch_error::ToolDispatchError;
use crate::schema::InputSchema;
use crate::side_effect::SideEffectClass;

pub type ToolResult = Result<Value, ToolDispatchError>;
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// `(args) -> result-json` (spec §3 `handler`).
pub type ToolHandler = Arc<dyn Fn(Value) -> BoxFuture<ToolResult> + Send + Sync>;

/// `write_action_resolver` (spec §3): may *downgrade* a nominally write
/// tool when it returns `false` (e.g. `preview_only=true`). Never upgrades
/// a `READ_ONLY`/`LOCAL_MUTATION` tool to a write action — that invariant
/// is enforced in [`crate::registry::ToolRegistry::register`], not here.
pub type WriteActionResolver = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Internal,
}

/// Immutable at registration (spec §3).
#[derive(Clone)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub side_effect: SideEffectClass,
    pub visibility: Visibility,
    pub input_schema: InputSchema,
    pub input_schema_hash: String,
    pub write_action_resolver: Option<WriteActionResolver>,
    pub handler: ToolHandler,
}

impl Tool {
    /// `write_action`: derived boolean, `true` iff `side_effect ==
    /// REMOTE_MUTATION` (spec §3).
    pub fn write_action(&self) -> bool {
        self.side_effect.write_action()
    }

    /// Resolves whether *this particular call* is a write action, applying
    /// the optional downgrade resolver. A `REMOTE_MUTATION` tool can only be
    /// downgraded if its resolver explicitly returns `false`; a
    /// `READ_ONLY`/`LOCAL_MUTATION` tool is never upgraded by a resolver
    /// (spec §3 invariant).
    pub fn resolves_to_write(&self, args: &Value) -> bool {
        if !self.write_action() {
            return false;
        }
        match &self.write_action_resolver {
            Some(resolver) => resolver(args),
            None => true,
        }
    }
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("side_effect", &self.side_effect)
            .field("visibility", &self.visibility)
            .field("input_schema_hash", &self.input_schema_hash)
            .finish_non_exhaustive()
    }
}

/// Builder mirroring the teacher's decorator-driven registration (spec §4.G:
/// "a wrapper associates handler, name, write_action... and a captured
/// input_schema"), realized here as an explicit, build-time value per spec
/// §9's "Dynamic tool registration → static catalog" design note.
pub struct ToolBuilder {
    name: String,
    description: String,
    tags: Vec<String>,
    visibility: Visibility,
    input_schema: InputSchema,
    write_action_resolver: Option<WriteActionResolver>,
}

impl ToolBuilder {
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: InputSchema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            visibility: Visibility::Public,
            input_schema,
            write_action_resolver: None,
        }
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = &'static str>) -> Self {
        self.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    pub fn internal(mut self) -> Self {
        self.visibility = Visibility::Internal;
        self
    }

    pub fn write_action_resolver(mut self, resolver: WriteActionResolver) -> Self {
        self.write_action_resolver = Some(resolver);
        self
    }

    /// Looks up `side_effect` from the static table (spec §4.F single
    /// source of truth) and finalizes the `Tool`. Panics if the name is not
    /// present in the table — a missing table entry is a registration bug
    /// to fix at build time, not a runtime default.
    pub fn build(self, handler: ToolHandler) -> Tool {
        let side_effect = crate::side_effect::side_effect_for(&self.name).unwrap_or_else(|| {
            panic!("tool `{}` has no entry in the side-effect table (spec §4.F)", self.name)
        });
        let input_schema_hash = self.input_schema.stable_hash();
        Tool {
            name: self.name,
            description: self.description,
            tags: self.tags,
            side_effect,
            visibility: self.visibility,
            input_schema: self.input_schema,
            input_schema_hash,
            write_action_resolver: self.write_action_resolver,
            handler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertySchema, PropertyType};
    use std::collections::BTreeMap;

    fn noop_handler() -> ToolHandler {
        Arc::new(|_args| Box::pin(async { Ok(Value::Null) }))
    }

    fn schema() -> InputSchema {
        let mut properties = BTreeMap::new();
        properties.insert("path".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }));
        InputSchema::object(properties, vec![])
    }

    #[test]
    fn write_action_derives_from_side_effect() {
        let tool = ToolBuilder::new("create_pull_request", "opens a PR", schema()).build(noop_handler());
        assert!(tool.write_action());

        let tool = ToolBuilder::new("get_file_contents", "reads a file", schema()).build(noop_handler());
        assert!(!tool.write_action());
    }

    #[test]
    fn resolver_can_downgrade_a_write_tool() {
        let resolver: WriteActionResolver = Arc::new(|args| {
            !args.get("preview_only").and_then(Value::as_bool).unwrap_or(false)
        });
        let tool = ToolBuilder::new("workspace_batch", "batch ops", schema())
            .write_action_resolver(resolver)
            .build(noop_handler());

        assert!(tool.resolves_to_write(&serde_json::json!({})));
        assert!(!tool.resolves_to_write(&serde_json::json!({"preview_only": true})));
    }

    #[test]
    fn resolver_cannot_upgrade_a_read_only_tool() {
        let resolver: WriteActionResolver = Arc::new(|_args| true);
        let tool = ToolBuilder::new("get_file_contents", "reads a file", schema())
            .write_action_resolver(resolver)
            .build(noop_handler());
        assert!(!tool.resolves_to_write(&serde_json::json!({})));
    }

    #[test]
    #[should_panic(expected = "no entry in the side-effect table")]
    fn unregistered_tool_name_panics_at_build_time() {
        let _ = ToolBuilder::new("not_in_table", "oops", schema()).build(noop_handler());
    }
}
