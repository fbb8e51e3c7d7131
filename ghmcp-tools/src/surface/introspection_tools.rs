//! Registers the introspection functions themselves as `READ_ONLY` tools
//! (spec §4.H) on an already-built [`ToolRegistry`], so they're reachable
//! through the same `dispatch` path every other tool uses.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::dispatch_error::ToolDispatchError;
use crate::introspection::{self, ListToolsFilter};
use crate::registry::ToolRegistry;
use crate::schema::{InputSchema, PropertySchema, PropertyType};
use crate::tool::ToolBuilder;
use crate::validate::ValidationError;

fn string_array(description: &str) -> PropertySchema {
    PropertySchema::new(PropertyType::Array { items: Box::new(PropertyType::String { r#enum: None }) }).describe(description)
}

fn names_arg(args: &Value) -> Result<Vec<String>, ToolDispatchError> {
    if let Some(name) = args.get("tool_name").and_then(Value::as_str) {
        return Ok(vec![name.to_string()]);
    }
    let names = args
        .get("tool_names")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_default();
    if names.is_empty() {
        return Err(ToolDispatchError::Validation(vec![ValidationError {
            field: "tool_name".to_string(),
            message: "must supply tool_name or a non-empty tool_names array".to_string(),
        }]));
    }
    Ok(names)
}

/// Registers `list_tools`, `list_all_actions`, `describe_tool`, and
/// `validate_tool_args` against `registry`, each closing over a `Weak`
/// handle so the tools don't keep their own registry alive after the
/// caller drops it.
pub fn register_into(registry: &Arc<ToolRegistry>) {
    register_list_tools(registry);
    register_list_all_actions(registry);
    register_describe_tool(registry);
    register_validate_tool_args(registry);
}

fn register_list_tools(registry: &Arc<ToolRegistry>) {
    let weak = Arc::downgrade(registry);
    let mut properties = BTreeMap::new();
    properties.insert("only_write".to_string(), PropertySchema::new(PropertyType::Boolean).describe("restrict to write-action tools"));
    properties.insert("only_read".to_string(), PropertySchema::new(PropertyType::Boolean).describe("restrict to read-only tools"));
    properties.insert(
        "name_prefix".to_string(),
        PropertySchema::new(PropertyType::Nullable { inner: Box::new(PropertyType::String { r#enum: None }) })
            .describe("only tools whose name starts with this prefix"),
    );
    let schema = InputSchema::object(properties, vec![]);

    registry.register(
        ToolBuilder::new("list_tools", "Lists the registered tool catalog, optionally filtered.", schema)
            .internal()
            .tags(["introspection"])
            .build(Arc::new(move |args: Value| {
                let weak = weak.clone();
                Box::pin(async move {
                    let registry = weak.upgrade().ok_or_else(|| ToolDispatchError::Other(anyhow::anyhow!("registry dropped")))?;
                    let filter = ListToolsFilter {
                        only_write: args.get("only_write").and_then(Value::as_bool).unwrap_or(false),
                        only_read: args.get("only_read").and_then(Value::as_bool).unwrap_or(false),
                        name_prefix: args.get("name_prefix").and_then(Value::as_str).map(str::to_string),
                    };
                    let summaries = introspection::list_tools(&registry, &filter);
                    Ok(serde_json::to_value(summaries).unwrap_or(Value::Null))
                })
            })),
    );
}

fn register_list_all_actions(registry: &Arc<ToolRegistry>) {
    let weak = Arc::downgrade(registry);
    let mut properties = BTreeMap::new();
    properties.insert("include_parameters".to_string(), PropertySchema::new(PropertyType::Boolean).describe("attach each tool's full input_schema"));
    let schema = InputSchema::object(properties, vec![]);

    registry.register(
        ToolBuilder::new("list_all_actions", "Lists every tool's name and side-effect class, optionally with full parameter schemas.", schema)
            .internal()
            .tags(["introspection"])
            .build(Arc::new(move |args: Value| {
                let weak = weak.clone();
                Box::pin(async move {
                    let registry = weak.upgrade().ok_or_else(|| ToolDispatchError::Other(anyhow::anyhow!("registry dropped")))?;
                    let include_parameters = args.get("include_parameters").and_then(Value::as_bool).unwrap_or(false);
                    let actions = introspection::list_all_actions(&registry, include_parameters);
                    Ok(serde_json::to_value(actions).unwrap_or(Value::Null))
                })
            })),
    );
}

fn register_describe_tool(registry: &Arc<ToolRegistry>) {
    let weak = Arc::downgrade(registry);
    let mut properties = BTreeMap::new();
    properties.insert("tool_name".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }).describe("single tool name"));
    properties.insert("tool_names".to_string(), string_array("batch of tool names (at most 10)"));
    let schema = InputSchema::object(properties, vec![]);

    registry.register(
        ToolBuilder::new("describe_tool", "Returns the full description, side-effect class, and input schema for one or more tools.", schema)
            .internal()
            .tags(["introspection"])
            .build(Arc::new(move |args: Value| {
                let weak = weak.clone();
                Box::pin(async move {
                    let registry = weak.upgrade().ok_or_else(|| ToolDispatchError::Other(anyhow::anyhow!("registry dropped")))?;
                    let names = names_arg(&args)?;
                    let descriptions = introspection::describe_tool(&registry, &names)
                        .map_err(|e| ToolDispatchError::Other(anyhow::anyhow!(e)))?;
                    Ok(serde_json::to_value(descriptions).unwrap_or(Value::Null))
                })
            })),
    );
}

fn register_validate_tool_args(registry: &Arc<ToolRegistry>) {
    let weak = Arc::downgrade(registry);
    let mut properties = BTreeMap::new();
    properties.insert("tool_name".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }).describe("single tool name"));
    properties.insert("tool_names".to_string(), string_array("batch of tool names (at most 10)"));
    properties.insert("payload".to_string(), PropertySchema::new(PropertyType::Object).describe("candidate arguments to validate"));
    let schema = InputSchema::object(properties, vec!["payload".to_string()]);

    registry.register(
        ToolBuilder::new("validate_tool_args", "Validates a candidate arguments payload against one or more tools' input schemas, without executing them.", schema)
            .internal()
            .tags(["introspection"])
            .build(Arc::new(move |args: Value| {
                let weak = weak.clone();
                Box::pin(async move {
                    let registry = weak.upgrade().ok_or_else(|| ToolDispatchError::Other(anyhow::anyhow!("registry dropped")))?;
                    let names = names_arg(&args)?;
                    let payload = args.get("payload").cloned().unwrap_or(Value::Object(Default::default()));
                    let results = introspection::validate_tool_args(&registry, &names, &payload)
                        .map_err(|e| ToolDispatchError::Other(anyhow::anyhow!(e)))?;
                    Ok(serde_json::to_value(results).unwrap_or(Value::Null))
                })
            })),
    );
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap as TestBTreeMap;

    use ghmcp_events::RequestContext;

    use crate::registry::DispatchOutcome;
    use crate::schema::InputSchema as TestInputSchema;
    use crate::tool::ToolHandler;
    use crate::write_gate::WriteGate;

    use super::*;

    fn ctx() -> RequestContext {
        RequestContext {
            request_id: "req-1".to_string(),
            session_id: None,
            idempotency_key: None,
            assistant_conversation_id: None,
            assistant_id: None,
            assistant_project_id: None,
            server_anchor: "anchor".to_string(),
        }
    }

    fn noop_handler() -> ToolHandler {
        Arc::new(|_args| Box::pin(async { Ok(Value::Null) }))
    }

    fn registry_with_introspection() -> Arc<ToolRegistry> {
        let registry = Arc::new(ToolRegistry::new(WriteGate::default()));
        let schema = TestInputSchema::object(TestBTreeMap::new(), vec![]);
        registry.register(ToolBuilder::new("get_file_contents", "reads a file", schema).build(noop_handler()));
        register_into(&registry);
        registry
    }

    #[tokio::test]
    async fn list_tools_excludes_the_introspection_tools_themselves() {
        let registry = registry_with_introspection();
        let outcome = registry.dispatch("list_tools", serde_json::json!({}), &ctx()).await;
        match outcome {
            DispatchOutcome::Success(value) => {
                let names: Vec<&str> = value.as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
                assert!(names.contains(&"get_file_contents"));
                assert!(!names.contains(&"list_tools"));
            }
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn describe_tool_accepts_a_single_tool_name() {
        let registry = registry_with_introspection();
        let outcome = registry.dispatch("describe_tool", serde_json::json!({"tool_name": "get_file_contents"}), &ctx()).await;
        match outcome {
            DispatchOutcome::Success(value) => {
                let described = value.as_array().unwrap();
                assert_eq!(described.len(), 1);
                assert_eq!(described[0]["name"], "get_file_contents");
            }
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn describe_tool_without_names_is_rejected() {
        let registry = registry_with_introspection();
        let outcome = registry.dispatch("describe_tool", serde_json::json!({}), &ctx()).await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn validate_tool_args_reports_each_named_tool() {
        let registry = registry_with_introspection();
        let outcome = registry
            .dispatch(
                "validate_tool_args",
                serde_json::json!({"tool_names": ["get_file_contents"], "payload": {}}),
                &ctx(),
            )
            .await;
        match outcome {
            DispatchOutcome::Success(value) => {
                let results = value.as_array().unwrap();
                assert_eq!(results.len(), 1);
                assert_eq!(results[0]["tool_name"], "get_file_contents");
            }
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn registry_dropped_before_call_yields_other_error() {
        let registry = Arc::new(ToolRegistry::new(WriteGate::default()));
        register_into(&registry);
        let tool = registry.get("list_tools").expect("list_tools registered");
        drop(registry);

        let result = (tool.handler)(serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
