//! Tool Registry & Dispatch Core (spec §4.G): holds the static catalog of
//! [`Tool`] values and implements the request→result pipeline — resolve,
//! normalize, validate, gate, execute, observe.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ghmcp_commons::ErrorEnvelope;
use ghmcp_events::{RequestContext, ToolCallCancelled, ToolCallError, ToolCallEvent, ToolCallStart, ToolCallSuccess, ToolMetrics};
use parking_lot::Mutex;
use serde_json::Value;

use crate::dispatch_error::ToolDispatchError;
use crate::side_effect::SideEffectClass;
use crate::tool::Tool;
use crate::write_gate::WriteGate;

/// Receives every lifecycle event the dispatcher emits (spec §4.G steps
/// 5-8). The HTTP adapter wires this to its tracing/telemetry sink; tests
/// can capture events in a `Vec`.
pub type EventSink = Arc<dyn Fn(ToolCallEvent) + Send + Sync>;

fn noop_sink() -> EventSink {
    Arc::new(|_event| {})
}

/// Either the handler's successful JSON result, or the structured envelope
/// a failure was converted into (spec §4.B) — the dispatcher never lets a
/// raw Rust error cross this boundary.
#[derive(Debug)]
pub enum DispatchOutcome {
    Success(Value),
    Error(ErrorEnvelope),
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success(_))
    }
}

/// Tool Registry & Dispatch Core. Built once at startup via [`ToolRegistry::builder`]
/// or by inserting [`Tool`] values directly, then shared (`Arc`) across
/// concurrent calls.
pub struct ToolRegistry {
    tools: Mutex<HashMap<String, Tool>>,
    gate: WriteGate,
    metrics: Mutex<HashMap<String, ToolMetrics>>,
    event_sink: EventSink,
    /// `GITHUB_MCP_DEBUG_ARGS` (spec §4.B): opt-in, never on by default.
    include_debug_args: bool,
}

impl ToolRegistry {
    pub fn new(gate: WriteGate) -> Self {
        Self {
            tools: Mutex::new(HashMap::new()),
            gate,
            metrics: Mutex::new(HashMap::new()),
            event_sink: noop_sink(),
            include_debug_args: false,
        }
    }

    pub fn with_event_sink(mut self, sink: EventSink) -> Self {
        self.event_sink = sink;
        self
    }

    pub fn with_debug_args(mut self, include_debug_args: bool) -> Self {
        self.include_debug_args = include_debug_args;
        self
    }

    /// Registers a tool. Panics on a duplicate name — two tools racing for
    /// the same name is a startup bug, not something to resolve silently by
    /// last-registration-wins. Takes `&self` (not `&mut self`) so
    /// introspection tools can be registered after the registry is already
    /// shared behind an `Arc` (spec §4.H: introspection tools enumerate the
    /// very registry they're registered into).
    pub fn register(&self, tool: Tool) {
        let mut tools = self.tools.lock();
        if tools.contains_key(&tool.name) {
            panic!("tool `{}` is already registered", tool.name);
        }
        tools.insert(tool.name.clone(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Tool> {
        self.tools.lock().get(name).cloned()
    }

    /// Snapshot of every registered tool, cloned out from under the lock.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.lock().values().cloned().collect()
    }

    pub fn gate(&self) -> &WriteGate {
        &self.gate
    }

    pub fn metrics_snapshot(&self, tool_name: &str) -> ToolMetrics {
        self.metrics.lock().get(tool_name).cloned().unwrap_or_default()
    }

    fn emit(&self, event: ToolCallEvent) {
        (self.event_sink)(event);
    }

    /// The spec §4.G dispatch pipeline:
    /// 1. resolve tool name, erroring `TOOL_NOT_FOUND` if absent
    /// 2. normalize args (object, or a JSON string decoding to one)
    /// 3. validate against `input_schema`, collecting every violation
    /// 4. resolve whether this call is a write action and consult the gate
    /// 5. emit `tool_call_start`
    /// 6. run the handler, timing its latency
    /// 7. emit `tool_call_success`/`tool_call_error`
    /// 8. return the result or the converted error envelope — never a raw error
    pub async fn dispatch(&self, tool_name: &str, raw_args: Value, ctx: &RequestContext) -> DispatchOutcome {
        match self.try_dispatch(tool_name, raw_args, ctx).await {
            Ok(value) => DispatchOutcome::Success(value),
            Err(err) => {
                let arg_keys = err.arg_keys.clone();
                DispatchOutcome::Error(err.error.into_envelope(&arg_keys, self.include_debug_args))
            }
        }
    }

    async fn try_dispatch(
        &self,
        tool_name: &str,
        raw_args: Value,
        ctx: &RequestContext,
    ) -> Result<Value, DispatchFailure> {
        let Some(tool) = self.get(tool_name) else {
            return Err(DispatchFailure::new(ToolDispatchError::UnknownTool(tool_name.to_string())));
        };

        let args = crate::validate::normalize_args(&raw_args).map_err(ToolDispatchError::from)?;
        let arg_keys: Vec<String> = args.as_object().map(|m| m.keys().cloned().collect()).unwrap_or_default();

        let violations = crate::validate::validate_args(&tool.input_schema, &args);
        if !violations.is_empty() {
            return Err(DispatchFailure::with_keys(ToolDispatchError::Validation(violations), arg_keys));
        }

        let target_ref = args.get("ref").and_then(Value::as_str).map(str::to_string);
        // `REMOTE_MUTATION` honors the resolver's downgrade (e.g.
        // `preview_only=true`); `LOCAL_MUTATION` always reaches the gate and
        // lets `WriteGate::ensure_allowed` decide based on
        // `GITHUB_MCP_WRITE_ALLOWED` (spec §4.F — every non-read-only tool is
        // gated, not only ones that resolve to a `write_action`).
        let needs_gate_check = match tool.side_effect {
            SideEffectClass::ReadOnly => false,
            SideEffectClass::RemoteMutation => tool.resolves_to_write(&args),
            SideEffectClass::LocalMutation => true,
        };
        if needs_gate_check {
            self.gate
                .ensure_allowed(tool_name, tool.side_effect, target_ref.as_deref())
                .map_err(ToolDispatchError::from)
                .map_err(|err| DispatchFailure::with_keys(err, arg_keys.clone()))?;
        }

        let call_id = ghmcp_events::new_call_id();
        let repo = args.get("full_name").and_then(Value::as_str).map(str::to_string);
        let path = args.get("path").and_then(Value::as_str).map(str::to_string);
        self.emit(ToolCallEvent::Start(ToolCallStart {
            tool_name: tool_name.to_string(),
            call_id: call_id.clone(),
            arg_keys: arg_keys.clone(),
            repo,
            path,
            r#ref: target_ref.clone(),
        }));
        let _ = ctx;

        let is_write = tool.resolves_to_write(&args);
        let started = Instant::now();
        let outcome = (tool.handler)(args).await;
        let duration = started.elapsed();
        self.record(tool_name, duration, is_write, outcome.is_err());

        match outcome {
            Ok(value) => {
                self.emit(ToolCallEvent::Success(ToolCallSuccess {
                    call_id,
                    duration_ms: duration.as_millis() as u64,
                    write_action: is_write,
                }));
                Ok(strip_internal_fields(value))
            }
            Err(err) => {
                let category = err.category();
                self.emit(ToolCallEvent::Error(ToolCallError {
                    call_id,
                    duration_ms: duration.as_millis() as u64,
                    category: format!("{category:?}"),
                    retryable: category.is_retryable(),
                }));
                Err(DispatchFailure::with_keys(err, arg_keys))
            }
        }
    }

    fn record(&self, tool_name: &str, duration: Duration, is_write: bool, errored: bool) {
        self.metrics.lock().entry(tool_name.to_string()).or_default().record_call(duration, is_write, errored);
    }

    /// Marks a call cancelled (client disconnect observed mid-handler).
    /// The dispatcher itself doesn't race handlers against cancellation —
    /// that's a transport-layer concern — but exposes this so the adapter
    /// can still emit a consistent `tool_call_cancelled` event.
    pub fn note_cancelled(&self, call_id: &str, duration: Duration) {
        self.emit(ToolCallEvent::Cancelled(ToolCallCancelled {
            call_id: call_id.to_string(),
            duration_ms: duration.as_millis() as u64,
        }));
    }
}

struct DispatchFailure {
    error: ToolDispatchError,
    arg_keys: Vec<String>,
}

impl DispatchFailure {
    fn new(error: ToolDispatchError) -> Self {
        Self { error, arg_keys: Vec::new() }
    }

    fn with_keys(error: ToolDispatchError, arg_keys: Vec<String>) -> Self {
        Self { error, arg_keys }
    }
}

/// Drops any `__log_*`-prefixed fields a handler attached for tracing
/// purposes before the result reaches the caller (spec §4.G step 8).
fn strip_internal_fields(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.retain(|key, _| !key.starts_with("__log_"));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InputSchema, PropertySchema, PropertyType};
    use crate::tool::{ToolBuilder, ToolHandler};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn schema() -> InputSchema {
        let mut properties = BTreeMap::new();
        properties.insert("path".to_string(), PropertySchema::new(PropertyType::String { r#enum: None }));
        InputSchema::object(properties, vec!["path".to_string()])
    }

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

    fn echo_handler() -> ToolHandler {
        Arc::new(|args| Box::pin(async move { Ok(serde_json::json!({"echo": args})) }))
    }

    #[tokio::test]
    async fn unknown_tool_returns_not_found_envelope() {
        let registry = ToolRegistry::new(WriteGate::default());
        let outcome = registry.dispatch("ghost", serde_json::json!({}), &ctx()).await;
        match outcome {
            DispatchOutcome::Error(envelope) => {
                assert_eq!(envelope.error_detail.code.as_deref(), Some("TOOL_NOT_FOUND"));
            }
            DispatchOutcome::Success(_) => panic!("expected error"),
        }
    }

    #[tokio::test]
    async fn successful_call_strips_internal_log_fields() {
        let registry = ToolRegistry::new(WriteGate::default());
        let handler: ToolHandler = Arc::new(|_args| {
            Box::pin(async { Ok(serde_json::json!({"result": "ok", "__log_internal": "secret"})) })
        });
        registry.register(ToolBuilder::new("get_file_contents", "reads", schema()).build(handler));

        let outcome = registry.dispatch("get_file_contents", serde_json::json!({"path": "a.rs"}), &ctx()).await;
        match outcome {
            DispatchOutcome::Success(value) => {
                assert_eq!(value["result"], "ok");
                assert!(value.get("__log_internal").is_none());
            }
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn validation_failure_is_reported_before_handler_runs() {
        let registry = ToolRegistry::new(WriteGate::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let handler: ToolHandler = Arc::new(move |_args| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Ok(Value::Null) })
        });
        registry.register(ToolBuilder::new("get_file_contents", "reads", schema()).build(handler));

        let outcome = registry.dispatch("get_file_contents", serde_json::json!({}), &ctx()).await;
        assert!(!outcome.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remote_mutation_without_approval_is_gated() {
        let registry = ToolRegistry::new(WriteGate::default());
        registry.register(ToolBuilder::new("create_pull_request", "opens a PR", schema()).build(echo_handler()));

        let outcome = registry.dispatch("create_pull_request", serde_json::json!({"path": "a"}), &ctx()).await;
        match outcome {
            DispatchOutcome::Error(envelope) => {
                assert_eq!(envelope.error_detail.code.as_deref(), Some("WRITE_APPROVAL_REQUIRED"));
            }
            DispatchOutcome::Success(_) => panic!("expected gate to block the call"),
        }
    }

    #[tokio::test]
    async fn local_mutation_without_approval_is_gated() {
        let registry = ToolRegistry::new(WriteGate::default());
        registry.register(ToolBuilder::new("workspace_apply_patch", "applies a patch", schema()).build(echo_handler()));

        let outcome = registry.dispatch("workspace_apply_patch", serde_json::json!({"path": "a"}), &ctx()).await;
        match outcome {
            DispatchOutcome::Error(envelope) => {
                assert_eq!(envelope.error_detail.code.as_deref(), Some("WRITE_APPROVAL_REQUIRED"));
            }
            DispatchOutcome::Success(_) => panic!("expected local mutation to be gated"),
        }
    }

    #[tokio::test]
    async fn local_mutation_succeeds_once_approved() {
        let gate = WriteGate::default();
        gate.authorize_write_actions(true);
        let registry = ToolRegistry::new(gate);
        registry.register(ToolBuilder::new("workspace_apply_patch", "applies a patch", schema()).build(echo_handler()));

        let outcome = registry.dispatch("workspace_apply_patch", serde_json::json!({"path": "a"}), &ctx()).await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn remote_mutation_succeeds_once_approved() {
        let gate = WriteGate::default();
        gate.authorize_write_actions(true);
        let registry = ToolRegistry::new(gate);
        registry.register(ToolBuilder::new("create_pull_request", "opens a PR", schema()).build(echo_handler()));

        let outcome = registry.dispatch("create_pull_request", serde_json::json!({"path": "a"}), &ctx()).await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn json_string_args_are_normalized_before_validation() {
        let registry = ToolRegistry::new(WriteGate::default());
        registry.register(ToolBuilder::new("get_file_contents", "reads", schema()).build(echo_handler()));

        let outcome = registry
            .dispatch("get_file_contents", Value::String(r#"{"path": "a.rs"}"#.to_string()), &ctx())
            .await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn metrics_accumulate_across_calls() {
        let registry = ToolRegistry::new(WriteGate::default());
        registry.register(ToolBuilder::new("get_file_contents", "reads", schema()).build(echo_handler()));

        registry.dispatch("get_file_contents", serde_json::json!({"path": "a"}), &ctx()).await;
        registry.dispatch("get_file_contents", serde_json::json!({"path": "b"}), &ctx()).await;

        let snapshot = registry.metrics_snapshot("get_file_contents");
        assert_eq!(snapshot.calls_total, 2);
        assert_eq!(snapshot.errors_total, 0);
    }
}
