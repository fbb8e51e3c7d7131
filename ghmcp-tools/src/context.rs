//! Request Context & Anchor (spec §4.I) and the per-`(repo, ref)` workspace
//! serialization map (spec §5, SPEC_FULL §4.G: "a `tokio::sync::Mutex` map
//! keyed by `(full_name, effective_ref)` with `Weak`-counted entries").

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use ghmcp_events::RequestContext;
use parking_lot::Mutex as SyncMutex;
use tokio::sync::Mutex as AsyncMutex;

/// Minimal header-map abstraction so [`RequestContextBuilder`] doesn't
/// depend on any particular transport's header type (spec §4.I is
/// transport-agnostic; the HTTP adapter in the `ghmcp` bin crate implements
/// this over `axum::http::HeaderMap`).
pub trait HeaderLookup {
    fn get(&self, name: &str) -> Option<&str>;
}

impl HeaderLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

/// Builds a [`RequestContext`] from transport headers + query params (spec
/// §4.I): `request_id` from `X-Request-Id` or freshly generated,
/// `idempotency_key` header-family wins over query string, `session_id`
/// from header or query, assistant metadata from `X-OpenAI-*`.
pub struct RequestContextBuilder {
    server_anchor: String,
}

impl RequestContextBuilder {
    pub fn new(server_anchor: impl Into<String>) -> Self {
        Self { server_anchor: server_anchor.into() }
    }

    pub fn build(&self, headers: &impl HeaderLookup, query: &HashMap<String, String>) -> RequestContext {
        let request_id = headers
            .get("x-request-id")
            .map(str::to_string)
            .unwrap_or_else(RequestContext::generate_request_id);

        let idempotency_key = headers
            .get("idempotency-key")
            .or_else(|| headers.get("x-idempotency-key"))
            .map(str::to_string)
            .or_else(|| query.get("idempotency_key").cloned())
            .or_else(|| query.get("dedupe_key").cloned());

        let session_id = headers
            .get("x-session-id")
            .map(str::to_string)
            .or_else(|| query.get("session_id").cloned());

        RequestContext {
            request_id,
            session_id,
            idempotency_key,
            assistant_conversation_id: headers.get("x-openai-conversation-id").map(str::to_string),
            assistant_id: headers.get("x-openai-assistant-id").map(str::to_string),
            assistant_project_id: headers.get("x-openai-project-id").map(str::to_string),
            server_anchor: self.server_anchor.clone(),
        }
    }
}

/// Serializes workspace mutations on the same `(full_name, effective_ref)`
/// pair (spec §5: "workspace mutations on the same (repo, ref) are
/// serialized"). Entries are reference-counted and dropped once no caller
/// holds the guard, rather than growing unboundedly (SPEC_FULL §4.G).
#[derive(Default)]
pub struct WorkspaceLocks {
    inner: SyncMutex<HashMap<(String, String), Weak<AsyncMutex<()>>>>,
}

impl WorkspaceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the (possibly freshly created) mutex for `(full_name, ref)`.
    /// Callers `.lock().await` the returned `Arc<AsyncMutex<()>>` to hold
    /// the per-repo serialization for the duration of their mutation.
    pub fn get_or_create(&self, full_name: &str, effective_ref: &str) -> Arc<AsyncMutex<()>> {
        let key = (full_name.to_string(), effective_ref.to_string());
        let mut guard = self.inner.lock();
        if let Some(existing) = guard.get(&key).and_then(Weak::upgrade) {
            return existing;
        }
        let fresh = Arc::new(AsyncMutex::new(()));
        guard.insert(key, Arc::downgrade(&fresh));
        fresh
    }

    /// Number of live (non-dropped) entries, for tests verifying GC.
    pub fn live_entry_count(&self) -> usize {
        let mut guard = self.inner.lock();
        guard.retain(|_, weak| weak.strong_count() > 0);
        guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_defaults_to_generated_when_header_absent() {
        let builder = RequestContextBuilder::new("anchor-1");
        let headers = HashMap::new();
        let query = HashMap::new();
        let ctx = builder.build(&headers, &query);
        assert_eq!(ctx.request_id.len(), 32);
    }

    #[test]
    fn request_id_prefers_header() {
        let builder = RequestContextBuilder::new("anchor-1");
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), "custom-id".to_string());
        let ctx = builder.build(&headers, &HashMap::new());
        assert_eq!(ctx.request_id, "custom-id");
    }

    #[test]
    fn idempotency_header_wins_over_query_string() {
        let builder = RequestContextBuilder::new("anchor-1");
        let mut headers = HashMap::new();
        headers.insert("idempotency-key".to_string(), "from-header".to_string());
        let mut query = HashMap::new();
        query.insert("idempotency_key".to_string(), "from-query".to_string());
        let ctx = builder.build(&headers, &query);
        assert_eq!(ctx.idempotency_key.as_deref(), Some("from-header"));
    }

    #[test]
    fn idempotency_falls_back_to_query_string() {
        let builder = RequestContextBuilder::new("anchor-1");
        let mut query = HashMap::new();
        query.insert("dedupe_key".to_string(), "from-query".to_string());
        let ctx = builder.build(&HashMap::new(), &query);
        assert_eq!(ctx.idempotency_key.as_deref(), Some("from-query"));
    }

    #[tokio::test]
    async fn workspace_locks_serialize_same_key() {
        let locks = WorkspaceLocks::new();
        let a = locks.get_or_create("o/r", "main");
        let b = locks.get_or_create("o/r", "main");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn workspace_locks_distinguish_different_refs() {
        let locks = WorkspaceLocks::new();
        let a = locks.get_or_create("o/r", "main");
        let b = locks.get_or_create("o/r", "feature/x");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn dropped_entries_are_garbage_collected() {
        let locks = WorkspaceLocks::new();
        {
            let _a = locks.get_or_create("o/r", "main");
            assert_eq!(locks.live_entry_count(), 1);
        }
        assert_eq!(locks.live_entry_count(), 0);
    }
}
