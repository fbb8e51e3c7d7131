//! Event schema shared by the Tool Registry & Dispatch Core (spec §4.G),
//! Request Context (§4.I), and the metrics snapshot (§3).
//!
//! Kept as its own crate (rather than folded into `ghmcp-tools`) so that
//! `ghmcp-github` and `ghmcp-workspace` can emit/consume the same event
//! shapes without depending on the full dispatcher.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Emitted immediately before a tool handler runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallStart {
    pub tool_name: String,
    pub call_id: String,
    /// Argument key names only, never values (spec §4.B: debug args are opt-in).
    pub arg_keys: Vec<String>,
    pub repo: Option<String>,
    pub path: Option<String>,
    pub r#ref: Option<String>,
}

/// Emitted when a tool handler completes successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallSuccess {
    pub call_id: String,
    pub duration_ms: u64,
    pub write_action: bool,
}

/// Emitted when a tool handler raises and the dispatcher normalizes the
/// error into an envelope (spec §4.B).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallError {
    pub call_id: String,
    pub duration_ms: u64,
    pub category: String,
    pub retryable: bool,
}

/// Emitted when a handler observes cancellation (client disconnect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallCancelled {
    pub call_id: String,
    pub duration_ms: u64,
}

/// Closed sum type over the dispatch lifecycle, convenient for a single
/// `TelemetrySink<ToolCallEvent>` implementation (spec §4.G step 5-8).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToolCallEvent {
    Start(ToolCallStart),
    Success(ToolCallSuccess),
    Error(ToolCallError),
    Cancelled(ToolCallCancelled),
}

impl ToolCallEvent {
    pub fn call_id(&self) -> &str {
        match self {
            ToolCallEvent::Start(e) => &e.call_id,
            ToolCallEvent::Success(e) => &e.call_id,
            ToolCallEvent::Error(e) => &e.call_id,
            ToolCallEvent::Cancelled(e) => &e.call_id,
        }
    }
}

/// Generates a fresh call id, distinct from the request id (one request may
/// retry several tool calls).
pub fn new_call_id() -> String {
    format!("call-{}", Uuid::new_v4().simple())
}

/// Per-invocation request context established by the transport middleware
/// (spec §4.I) before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RequestContext {
    pub request_id: String,
    pub session_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub assistant_conversation_id: Option<String>,
    pub assistant_id: Option<String>,
    pub assistant_project_id: Option<String>,
    /// Process-stable opaque string, constant for the life of the server
    /// process; used by clients to detect a restart.
    pub server_anchor: String,
}

impl RequestContext {
    /// Generates a fresh 32-hex request id, used when no `X-Request-Id`
    /// header is present.
    pub fn generate_request_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Per-tool counters rolled up into the `/healthz` and metrics snapshot
/// (spec §3 "Metrics snapshot").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolMetrics {
    pub calls_total: u64,
    pub errors_total: u64,
    pub write_calls_total: u64,
    pub latency_ms_sum: u64,
}

impl ToolMetrics {
    pub fn record_call(&mut self, duration: Duration, is_write: bool, errored: bool) {
        self.calls_total += 1;
        if errored {
            self.errors_total += 1;
        }
        if is_write {
            self.write_calls_total += 1;
        }
        self.latency_ms_sum += duration.as_millis() as u64;
    }

    pub fn average_latency_ms(&self) -> f64 {
        if self.calls_total == 0 {
            0.0
        } else {
            self.latency_ms_sum as f64 / self.calls_total as f64
        }
    }
}

/// GitHub HTTP client counters (spec §3 "GitHub" metrics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubClientMetrics {
    pub requests_total: u64,
    pub errors_total: u64,
    pub rate_limit_events_total: u64,
    pub timeouts_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_id_has_stable_prefix() {
        let id = new_call_id();
        assert!(id.starts_with("call-"));
    }

    #[test]
    fn request_id_is_32_hex_chars() {
        let id = RequestContext::generate_request_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tool_metrics_accumulate() {
        let mut metrics = ToolMetrics::default();
        metrics.record_call(Duration::from_millis(10), true, false);
        metrics.record_call(Duration::from_millis(20), false, true);
        assert_eq!(metrics.calls_total, 2);
        assert_eq!(metrics.write_calls_total, 1);
        assert_eq!(metrics.errors_total, 1);
        assert_eq!(metrics.latency_ms_sum, 30);
        assert!((metrics.average_latency_ms() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn event_call_id_accessor_covers_every_variant() {
        let start = ToolCallEvent::Start(ToolCallStart {
            tool_name: "list_tools".into(),
            call_id: "call-1".into(),
            arg_keys: vec![],
            repo: None,
            path: None,
            r#ref: None,
        });
        assert_eq!(start.call_id(), "call-1");
    }
}
