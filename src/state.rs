//! Shared server state (spec §4.I, §4.M): the tool registry, config, the
//! process-stable anchor, and the in-memory invocation ledger the
//! `/tool_invocations` routes read/write.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use ghmcp_commons::ErrorEnvelope;
use ghmcp_config::ServerConfig;
use ghmcp_tools::{RequestContextBuilder, ToolRegistry};
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

/// Lifecycle status of a stored invocation (spec §6: "tool catalog +
/// invocation lifecycle"). Calls run to completion synchronously under the
/// current adapter (no durable job queue, per spec.md's Non-goals), so
/// `Running` is never observed by a client — it exists so the type models
/// the full lifecycle the route names imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationStatus {
    Running,
    Completed,
    Errored,
    Cancelled,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct InvocationRecord {
    pub id: String,
    pub tool_name: String,
    pub status: InvocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
}

/// Shared, `Arc`-wrapped application state (spec §4.M). Cloned cheaply per
/// request by axum's `State` extractor.
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
    pub config: Arc<ServerConfig>,
    pub context_builder: RequestContextBuilder,
    pub server_anchor: String,
    pub started_at: Instant,
    healthz_called: AtomicBool,
    invocations: Mutex<HashMap<String, InvocationRecord>>,
}

impl AppState {
    pub fn new(registry: Arc<ToolRegistry>, config: Arc<ServerConfig>) -> Self {
        let server_anchor = Uuid::new_v4().simple().to_string();
        Self {
            registry,
            config,
            context_builder: RequestContextBuilder::new(server_anchor.clone()),
            server_anchor,
            started_at: Instant::now(),
            healthz_called: AtomicBool::new(false),
            invocations: Mutex::new(HashMap::new()),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Returns `true` the first time it's called; every subsequent call
    /// returns `false` (spec §6: `/healthz` one-shot mode).
    pub fn mark_healthz_called(&self) -> bool {
        !self.healthz_called.swap(true, Ordering::SeqCst)
    }

    pub fn insert_invocation(&self, record: InvocationRecord) {
        self.invocations.lock().insert(record.id.clone(), record);
    }

    pub fn get_invocation(&self, id: &str) -> Option<InvocationRecord> {
        self.invocations.lock().get(id).cloned()
    }

    /// Marks a still-pending invocation cancelled. No-op (returns `false`)
    /// once the call has already completed, since the current adapter runs
    /// handlers to completion before a cancel request could ever observe
    /// them mid-flight.
    pub fn cancel_invocation(&self, id: &str) -> Option<InvocationRecord> {
        let mut invocations = self.invocations.lock();
        let record = invocations.get_mut(id)?;
        if record.status == InvocationStatus::Running {
            record.status = InvocationStatus::Cancelled;
        }
        Some(record.clone())
    }
}
