//! GitHub Content Helpers surface (spec §4.K, §4.J): `get_file_contents`,
//! `get_file_excerpt`, `get_repository`, and `create_or_update_file` wired
//! as registry tools on top of `ghmcp-github`.

use std::collections::BTreeMap;
use std::sync::Arc;

use ghmcp_github::{decode_github_content, get_file_excerpt, perform_github_commit, resolve_file_sha, ExcerptRequest};
use reqwest::Method;
use serde_json::Value;

use crate::dispatch_error::ToolDispatchError;
use crate::registry::ToolRegistry;
use crate::schema::{InputSchema, PropertySchema, PropertyType};
use crate::tool::ToolBuilder;

use super::ToolDeps;

fn string_prop(description: &str) -> PropertySchema {
    PropertySchema::new(PropertyType::String { r#enum: None }).describe(description)
}

fn nullable_string_prop(description: &str) -> PropertySchema {
    PropertySchema::new(PropertyType::Nullable { inner: Box::new(PropertyType::String { r#enum: None }) })
        .describe(description)
}

fn required_arg<'a>(args: &'a Value, field: &str) -> Result<&'a str, ToolDispatchError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolDispatchError::Validation(vec![crate::validate::ValidationError {
            field: field.to_string(),
            message: "missing required field".to_string(),
        }]))
}

pub fn register(registry: &ToolRegistry, deps: &ToolDeps) {
    register_get_file_contents(registry, deps);
    register_get_file_excerpt(registry, deps);
    register_get_repository(registry, deps);
    register_create_or_update_file(registry, deps);
}

fn register_get_file_contents(registry: &ToolRegistry, deps: &ToolDeps) {
    let github = deps.github.clone();
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("path".to_string(), string_prop("repository-relative file path"));
    properties.insert("ref".to_string(), nullable_string_prop("branch, tag, or commit sha"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "path".to_string()]);

    registry.register(
        ToolBuilder::new(
            "get_file_contents",
            "Reads a file's content from a GitHub repository at a given ref, inlining it when small enough.",
            schema,
        )
        .tags(["github", "read"])
        .build(Arc::new(move |args: Value| {
            let github = github.clone();
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let path = required_arg(&args, "path")?.to_string();
                let requested_ref = args.get("ref").and_then(Value::as_str);
                let effective_ref = config.effective_ref_for_repo(&full_name, requested_ref).to_string();

                let decoded = decode_github_content(&github, &full_name, &path, &effective_ref).await?;
                Ok(serde_json::to_value(decoded).unwrap_or(Value::Null))
            })
        })),
    );
}

fn register_get_file_excerpt(registry: &ToolRegistry, deps: &ToolDeps) {
    let github = deps.github.clone();
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("path".to_string(), string_prop("repository-relative file path"));
    properties.insert("ref".to_string(), nullable_string_prop("branch, tag, or commit sha"));
    properties.insert(
        "start_byte".to_string(),
        PropertySchema::new(PropertyType::Nullable { inner: Box::new(PropertyType::Integer { minimum: Some(0), maximum: None }) })
            .describe("offset to start reading from; mutually exclusive with tail_bytes"),
    );
    properties.insert(
        "tail_bytes".to_string(),
        PropertySchema::new(PropertyType::Nullable { inner: Box::new(PropertyType::Integer { minimum: Some(1), maximum: None }) })
            .describe("read only the last N bytes; mutually exclusive with start_byte"),
    );
    properties.insert(
        "max_bytes".to_string(),
        PropertySchema::new(PropertyType::Integer { minimum: Some(1), maximum: None }).describe("maximum bytes to read"),
    );
    properties.insert("as_text".to_string(), PropertySchema::new(PropertyType::Boolean).describe("decode the excerpt as UTF-8 text"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "path".to_string(), "max_bytes".to_string()]);

    registry.register(
        ToolBuilder::new(
            "get_file_excerpt",
            "Reads a byte- or tail-bounded excerpt of a large file without downloading it in full.",
            schema,
        )
        .tags(["github", "read"])
        .build(Arc::new(move |args: Value| {
            let github = github.clone();
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let path = required_arg(&args, "path")?.to_string();
                let requested_ref = args.get("ref").and_then(Value::as_str);
                let effective_ref = config.effective_ref_for_repo(&full_name, requested_ref).to_string();
                let max_bytes = args.get("max_bytes").and_then(Value::as_u64).unwrap_or(65_536);

                let request = ExcerptRequest {
                    full_name,
                    path,
                    r#ref: effective_ref,
                    start_byte: args.get("start_byte").and_then(Value::as_u64),
                    max_bytes,
                    tail_bytes: args.get("tail_bytes").and_then(Value::as_u64),
                    as_text: args.get("as_text").and_then(Value::as_bool).unwrap_or(true),
                    max_text_chars: None,
                    numbered_lines: args.get("numbered_lines").and_then(Value::as_bool).unwrap_or(false),
                };
                let tail_bytes = request.tail_bytes;
                let response = get_file_excerpt(&github, &config.github_api_base_url, request).await?;
                let note = if tail_bytes.is_some() {
                    "tail read: bytes are counted from the end of the file, so `size` may be \
                     smaller than the requested tail when the file itself is shorter."
                        .to_string()
                } else {
                    "forward read: bytes are counted from `start_byte` (default 0); `size` may be \
                     smaller than `max_bytes` at end of file."
                        .to_string()
                };
                Ok(serde_json::json!({
                    "text": response.text,
                    "truncated": response.truncated,
                    "headers": response.headers,
                    "range_requested": response.range_requested,
                    "size": response.size,
                    "note": note,
                }))
            })
        })),
    );
}

fn register_get_repository(registry: &ToolRegistry, deps: &ToolDeps) {
    let github = deps.github.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string()]);

    registry.register(
        ToolBuilder::new("get_repository", "Fetches repository metadata from the GitHub REST API.", schema)
            .tags(["github", "read"])
            .build(Arc::new(move |args: Value| {
                let github = github.clone();
                Box::pin(async move {
                    let full_name = required_arg(&args, "full_name")?.to_string();
                    let response = github.request_api(Method::GET, &format!("repos/{full_name}"), None).await?;
                    Ok(response.json().cloned().unwrap_or(Value::Null))
                })
            })),
    );
}

fn register_create_or_update_file(registry: &ToolRegistry, deps: &ToolDeps) {
    let github = deps.github.clone();
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("path".to_string(), string_prop("repository-relative file path"));
    properties.insert("content".to_string(), string_prop("new file content, UTF-8"));
    properties.insert("message".to_string(), string_prop("commit message"));
    properties.insert("branch".to_string(), nullable_string_prop("branch to commit to"));
    let schema = InputSchema::object(
        properties,
        vec!["full_name".to_string(), "path".to_string(), "content".to_string(), "message".to_string()],
    );

    registry.register(
        ToolBuilder::new(
            "create_or_update_file",
            "Creates or updates a single file on a branch via the Contents API, resolving the current sha first (spec S2).",
            schema,
        )
        .tags(["github", "write"])
        .build(Arc::new(move |args: Value| {
            let github = github.clone();
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let path = required_arg(&args, "path")?.to_string();
                let content = required_arg(&args, "content")?.to_string();
                let message = required_arg(&args, "message")?.to_string();
                let requested_branch = args.get("branch").and_then(Value::as_str);
                let branch = config.effective_ref_for_repo(&full_name, requested_branch).to_string();

                let sha = resolve_file_sha(&github, &full_name, &path, &branch).await?;
                let result = perform_github_commit(
                    &github,
                    &full_name,
                    &branch,
                    &path,
                    &message,
                    content.as_bytes(),
                    sha.as_deref(),
                )
                .await?;
                Ok(result)
            })
        })),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ghmcp_config::ServerConfig;
    use ghmcp_events::RequestContext;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::registry::{DispatchOutcome, ToolRegistry};
    use crate::write_gate::WriteGate;

    use super::*;

    fn test_config(api_base_url: String) -> ServerConfig {
        ServerConfig {
            github_api_base_url: api_base_url,
            github_request_timeout: Duration::from_secs(5),
            http_max_connections: 10,
            http_max_keepalive: 5,
            http_timeout: Duration::from_secs(5),
            max_concurrency: 4,
            workspace_base_dir: "/tmp/ghmcp-workspaces-test".to_string(),
            controller_repo: None,
            controller_default_branch: None,
            write_allowed: true,
            git_author_name: "ghmcp-bot".to_string(),
            git_author_email: "ghmcp-bot@users.noreply.github.com".to_string(),
            git_committer_name: "ghmcp-bot".to_string(),
            git_committer_email: "ghmcp-bot@users.noreply.github.com".to_string(),
            tool_stdout_max_chars: 20_000,
            tool_stderr_max_chars: 20_000,
            rate_limit_retry_max_attempts: 1,
            rate_limit_retry_base_delay: Duration::from_millis(1),
            rate_limit_retry_max_wait: Duration::from_millis(10),
            healthz_oneshot: false,
            error_debug_truncate_chars: 2000,
            error_debug_args: false,
            render_api_key: None,
            render_owner_id: None,
            render_service_id: None,
            allowed_hosts: vec![],
        }
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

    async fn registry_against(server: &MockServer) -> ToolRegistry {
        let config = Arc::new(test_config(server.uri()));
        let deps = ToolDeps::new(config);
        let gate = WriteGate::default();
        gate.authorize_write_actions(true);
        let registry = ToolRegistry::new(gate);
        register(&registry, &deps);
        registry
    }

    #[tokio::test]
    async fn get_repository_returns_the_parsed_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"full_name": "octo/widgets"})))
            .mount(&server)
            .await;

        let registry = registry_against(&server).await;
        let outcome = registry.dispatch("get_repository", serde_json::json!({"full_name": "octo/widgets"}), &ctx()).await;
        match outcome {
            DispatchOutcome::Success(value) => assert_eq!(value["full_name"], "octo/widgets"),
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn get_file_excerpt_reports_range_size_and_tail_note() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/contents/big.log"))
            .respond_with(ResponseTemplate::new(206).set_body_bytes(b"0123456789".to_vec()))
            .mount(&server)
            .await;

        let registry = registry_against(&server).await;
        let outcome = registry
            .dispatch(
                "get_file_excerpt",
                serde_json::json!({
                    "full_name": "octo/widgets",
                    "path": "big.log",
                    "tail_bytes": 10,
                    "max_bytes": 10,
                }),
                &ctx(),
            )
            .await;
        match outcome {
            DispatchOutcome::Success(value) => {
                assert_eq!(value["range_requested"], "bytes=-10");
                assert_eq!(value["size"], 10);
                assert!(value["note"].as_str().unwrap().contains("tail read"));
            }
            DispatchOutcome::Error(envelope) => panic!("unexpected error: {envelope:?}"),
        }
    }

    #[tokio::test]
    async fn get_repository_missing_full_name_fails_validation_before_any_request() {
        let server = MockServer::start().await;
        let registry = registry_against(&server).await;

        let outcome = registry.dispatch("get_repository", serde_json::json!({}), &ctx()).await;
        match outcome {
            DispatchOutcome::Error(envelope) => assert_eq!(envelope.error_detail.category, ghmcp_commons::ErrorCategory::Validation),
            DispatchOutcome::Success(_) => panic!("expected validation failure"),
        }
    }

    #[tokio::test]
    async fn create_or_update_file_resolves_sha_then_commits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/contents/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sha": "abc123"})))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/repos/octo/widgets/contents/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": {"sha": "def456"}})))
            .mount(&server)
            .await;

        let registry = registry_against(&server).await;
        let outcome = registry
            .dispatch(
                "create_or_update_file",
                serde_json::json!({
                    "full_name": "octo/widgets",
                    "path": "README.md",
                    "content": "hello",
                    "message": "update readme",
                    "branch": "main",
                }),
                &ctx(),
            )
            .await;
        assert!(outcome.is_success(), "expected commit to succeed: {outcome:?}");
    }
}
