//! MCP Transport Adapter shape helpers (spec §4.M, §6).
//!
//! Spec.md's explicit Non-goal excludes full SSE/streamable-HTTP on-wire
//! framing ("treated as an opaque adapter"); what lives here is the part
//! that *is* in scope: turning [`ghmcp_tools::Tool`] catalog entries and
//! dispatch outcomes into protocol-correct `mcp-types` shapes, so a real
//! `rmcp` transport could be dropped in without touching the dispatcher.
//! `src/http.rs` exposes the same conversions over plain JSON routes
//! (`/tools`, `/tool_invocations`) for callers that don't speak MCP framing.

use ghmcp_tools::registry::DispatchOutcome;
use ghmcp_tools::Tool;
use mcp_types::{CallToolResult, CallToolResultContentItem, Resource, TextContent, ToolInputSchema};
use serde_json::Value;

/// Converts a registered [`Tool`]'s schema into the MCP `Tool` shape (spec
/// §4.M: "wires `rmcp`'s tool/schema model types... so the JSON shape is
/// protocol-correct").
pub fn to_mcp_tool(tool: &Tool) -> mcp_types::Tool {
    let schema_json = tool.input_schema.to_json();
    let properties = schema_json
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.as_object().cloned().unwrap_or_default()))
        .collect();

    mcp_types::Tool {
        name: tool.name.clone(),
        description: Some(tool.description.clone()),
        input_schema: ToolInputSchema {
            properties,
            required: tool.input_schema.required.clone(),
        },
    }
}

/// Each tool is exposed as an MCP resource at `tools/{name}` (spec §6: `GET
/// /resources`: "each tool has a relative URI `tools/{name}`"). `prefix` is
/// the `X-Forwarded-Prefix` header value, if any, so the URI is correct
/// behind a reverse proxy.
pub fn to_mcp_resource(tool: &Tool, prefix: &str) -> Resource {
    Resource {
        annotations: None,
        description: Some(tool.description.clone()),
        mime_type: Some("application/json".to_string()),
        name: tool.name.clone(),
        size: None,
        uri: format!("{prefix}tools/{}", tool.name),
    }
}

/// Wraps a [`DispatchOutcome`] into the MCP `CallToolResult` shape: success
/// results are serialized as a single JSON text block, error envelopes are
/// likewise serialized text with `is_error: true` — never surfaced as a
/// transport-level failure, matching spec §4.B ("tools return normalized
/// envelopes; they do not throw across transport").
pub fn to_call_tool_result(outcome: &DispatchOutcome) -> CallToolResult {
    let (value, is_error) = match outcome {
        DispatchOutcome::Success(value) => (value.clone(), false),
        DispatchOutcome::Error(envelope) => (serde_json::to_value(envelope).unwrap_or(Value::Null), true),
    };
    let text = serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string());
    CallToolResult {
        content: vec![CallToolResultContentItem::TextContent(TextContent {
            annotations: None,
            text,
            type_: "text".to_string(),
        })],
        is_error: Some(is_error),
        meta: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghmcp_tools::schema::{InputSchema, PropertySchema, PropertyType};
    use ghmcp_tools::tool::ToolBuilder;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn sample_tool() -> Tool {
        let mut properties = BTreeMap::new();
        properties.insert("path".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }));
        let schema = InputSchema::object(properties, vec!["path".to_string()]);
        ToolBuilder::new("get_file_contents", "reads a file", schema)
            .build(Arc::new(|_args| Box::pin(async { Ok(Value::Null) })))
    }

    #[test]
    fn mcp_tool_carries_required_fields() {
        let mcp_tool = to_mcp_tool(&sample_tool());
        assert_eq!(mcp_tool.name, "get_file_contents");
        assert_eq!(mcp_tool.input_schema.required, vec!["path".to_string()]);
        assert!(mcp_tool.input_schema.properties.contains_key("path"));
    }

    #[test]
    fn resource_uri_uses_forwarded_prefix() {
        let resource = to_mcp_resource(&sample_tool(), "/api/");
        assert_eq!(resource.uri, "/api/tools/get_file_contents");
    }

    #[test]
    fn success_outcome_is_not_marked_error() {
        let outcome = DispatchOutcome::Success(serde_json::json!({"ok": true}));
        let result = to_call_tool_result(&outcome);
        assert_eq!(result.is_error, Some(false));
    }
}
