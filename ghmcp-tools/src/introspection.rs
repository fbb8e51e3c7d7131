//! Introspection (spec §4.H): `list_tools`, `list_all_actions`,
//! `describe_tool`, `validate_tool_args`. These are themselves `READ_ONLY`
//! tools (see the side-effect table) but are plain functions over a
//! [`ToolRegistry`] rather than registered handlers, so the registry's own
//! introspection tools can call them without re-entering `dispatch`.

use serde::Serialize;
use serde_json::Value;

use crate::registry::ToolRegistry;
use crate::side_effect::SideEffectClass;
use crate::tool::{Tool, Visibility};
use crate::validate::ValidationError;

/// Maximum number of tool names accepted in a single `validate_tool_args`
/// or `describe_tool` batch call (spec §4.H).
pub const MAX_BATCH_SIZE: usize = 10;

#[derive(Debug, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub side_effect: SideEffectClass,
    pub write_action: bool,
    pub approval_required: bool,
}

impl ToolSummary {
    fn from_tool(tool: &Tool, registry: &ToolRegistry) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            tags: tool.tags.clone(),
            side_effect: tool.side_effect,
            write_action: tool.write_action(),
            approval_required: registry.gate().approval_required(tool.side_effect),
        }
    }
}

#[derive(Debug, Default)]
pub struct ListToolsFilter {
    pub only_write: bool,
    pub only_read: bool,
    pub name_prefix: Option<String>,
}

/// `list_tools({only_write?, only_read?, name_prefix?})` (spec §4.H).
/// Skips `Internal`-visibility tools — those exist for the catalog's own
/// bookkeeping (e.g. batch sub-steps), not for direct invocation.
pub fn list_tools(registry: &ToolRegistry, filter: &ListToolsFilter) -> Vec<ToolSummary> {
    registry
        .tools()
        .into_iter()
        .filter(|tool| tool.visibility == Visibility::Public)
        .filter(|tool| !filter.only_write || tool.write_action())
        .filter(|tool| !filter.only_read || !tool.write_action())
        .filter(|tool| filter.name_prefix.as_deref().is_none_or(|prefix| tool.name.starts_with(prefix)))
        .map(|tool| ToolSummary::from_tool(&tool, registry))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ActionSummary {
    pub name: String,
    pub side_effect: SideEffectClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// `list_all_actions({include_parameters?, compact?})` (spec §4.H): every
/// public tool's name and class, with the full input schema attached only
/// when `include_parameters` is set. `compact` drops the description field
/// entirely from [`ToolSummary`]-shaped output by returning [`ActionSummary`]
/// instead, which has none to begin with.
pub fn list_all_actions(registry: &ToolRegistry, include_parameters: bool) -> Vec<ActionSummary> {
    registry
        .tools()
        .into_iter()
        .filter(|tool| tool.visibility == Visibility::Public)
        .map(|tool| ActionSummary {
            name: tool.name.clone(),
            side_effect: tool.side_effect,
            parameters: include_parameters.then(|| tool.input_schema.to_json()),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub side_effect: SideEffectClass,
    pub input_schema: Value,
    pub input_schema_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),
    #[error("at most {max} tool names may be requested in one call, got {got}")]
    BatchTooLarge { max: usize, got: usize },
}

/// `describe_tool(name|names)` (spec §4.H). Accepts up to [`MAX_BATCH_SIZE`]
/// names; an unknown name fails the whole batch rather than silently
/// omitting it, so callers can tell "not found" from "empty catalog".
pub fn describe_tool(registry: &ToolRegistry, names: &[String]) -> Result<Vec<ToolDescription>, IntrospectionError> {
    if names.len() > MAX_BATCH_SIZE {
        return Err(IntrospectionError::BatchTooLarge { max: MAX_BATCH_SIZE, got: names.len() });
    }
    names
        .iter()
        .map(|name| {
            let tool = registry.get(name).ok_or_else(|| IntrospectionError::UnknownTool(name.clone()))?;
            Ok(ToolDescription {
                name: tool.name.clone(),
                description: tool.description.clone(),
                side_effect: tool.side_effect,
                input_schema: tool.input_schema.to_json(),
                input_schema_hash: tool.input_schema_hash.clone(),
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ToolValidationResult {
    pub tool_name: String,
    pub valid: bool,
    pub violations: Vec<ValidationErrorView>,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorView {
    pub field: String,
    pub message: String,
}

impl From<ValidationError> for ValidationErrorView {
    fn from(err: ValidationError) -> Self {
        Self { field: err.field, message: err.message }
    }
}

/// `validate_tool_args(tool_name|tool_names, payload)` (spec §4.H): runs the
/// same normalize+validate steps `dispatch` uses, without executing the
/// handler. `payload` is validated independently against each named tool's
/// schema (the same args JSON, one validation pass per tool).
pub fn validate_tool_args(
    registry: &ToolRegistry,
    names: &[String],
    payload: &Value,
) -> Result<Vec<ToolValidationResult>, IntrospectionError> {
    if names.len() > MAX_BATCH_SIZE {
        return Err(IntrospectionError::BatchTooLarge { max: MAX_BATCH_SIZE, got: names.len() });
    }
    names
        .iter()
        .map(|name| {
            let tool = registry.get(name).ok_or_else(|| IntrospectionError::UnknownTool(name.clone()))?;
            let normalized = crate::validate::normalize_args(payload).unwrap_or_else(|_| payload.clone());
            let violations = crate::validate::validate_args(&tool.input_schema, &normalized);
            Ok(ToolValidationResult {
                tool_name: tool.name.clone(),
                valid: violations.is_empty(),
                violations: violations.into_iter().map(ValidationErrorView::from).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InputSchema, PropertySchema, PropertyType};
    use crate::tool::{ToolBuilder, ToolHandler};
    use crate::write_gate::WriteGate;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn schema() -> InputSchema {
        let mut properties = BTreeMap::new();
        properties.insert("path".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }));
        InputSchema::object(properties, vec!["path".to_string()])
    }

    fn noop_handler() -> ToolHandler {
        Arc::new(|_args| Box::pin(async { Ok(Value::Null) }))
    }

    fn registry_with_sample_tools() -> ToolRegistry {
        let registry = ToolRegistry::new(WriteGate::default());
        registry.register(ToolBuilder::new("get_file_contents", "reads a file", schema()).build(noop_handler()));
        registry.register(ToolBuilder::new("create_pull_request", "opens a PR", schema()).build(noop_handler()));
        registry
    }

    #[test]
    fn list_tools_filters_by_write_action() {
        let registry = registry_with_sample_tools();
        let writes = list_tools(&registry, &ListToolsFilter { only_write: true, ..Default::default() });
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].name, "create_pull_request");
    }

    #[test]
    fn list_tools_filters_by_name_prefix() {
        let registry = registry_with_sample_tools();
        let filtered = list_tools(&registry, &ListToolsFilter { name_prefix: Some("get_".to_string()), ..Default::default() });
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn describe_tool_rejects_unknown_name() {
        let registry = registry_with_sample_tools();
        let err = describe_tool(&registry, &["ghost".to_string()]).unwrap_err();
        assert!(matches!(err, IntrospectionError::UnknownTool(_)));
    }

    #[test]
    fn describe_tool_rejects_oversized_batch() {
        let registry = registry_with_sample_tools();
        let names: Vec<String> = (0..11).map(|i| format!("tool_{i}")).collect();
        let err = describe_tool(&registry, &names).unwrap_err();
        assert!(matches!(err, IntrospectionError::BatchTooLarge { .. }));
    }

    #[test]
    fn validate_tool_args_reports_missing_required_field() {
        let registry = registry_with_sample_tools();
        let results = validate_tool_args(&registry, &["get_file_contents".to_string()], &serde_json::json!({})).unwrap();
        assert!(!results[0].valid);
        assert_eq!(results[0].violations[0].field, "path");
    }

    #[test]
    fn validate_tool_args_checks_every_named_tool() {
        let registry = registry_with_sample_tools();
        let names = vec!["get_file_contents".to_string(), "create_pull_request".to_string()];
        let results = validate_tool_args(&registry, &names, &serde_json::json!({"path": "a.rs"})).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.valid));
    }
}
