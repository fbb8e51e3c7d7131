//! Workspace Engine surface (spec §4.E, §4.L): `workspace_clone_repo`,
//! `workspace_create_branch`, `workspace_apply_patch`,
//! `workspace_apply_operations`, `workspace_read_file`, and
//! `workspace_sync_status` wired as registry tools on top of
//! `ghmcp-workspace`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use ghmcp_config::get_optional_github_token;
use ghmcp_workspace::{apply_patch, apply_workspace_operations, clone_repo, create_branch, sync_status, workspace_path, workspace_safe_join, WorkspaceOperation};
use serde_json::Value;

use crate::dispatch_error::ToolDispatchError;
use crate::registry::ToolRegistry;
use crate::schema::{InputSchema, PropertySchema, PropertyType};
use crate::tool::ToolBuilder;
use crate::validate::ValidationError;

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
        .ok_or_else(|| ToolDispatchError::Validation(vec![ValidationError { field: field.to_string(), message: "missing required field".to_string() }]))
}

pub fn register(registry: &ToolRegistry, deps: &ToolDeps) {
    register_clone_repo(registry, deps);
    register_create_branch(registry, deps);
    register_apply_patch(registry, deps);
    register_apply_operations(registry, deps);
    register_read_file(registry, deps);
    register_sync_status(registry, deps);
}

fn register_clone_repo(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("ref".to_string(), nullable_string_prop("branch to clone; defaults to the repository's default branch"));
    properties.insert(
        "preserve_changes".to_string(),
        PropertySchema::new(PropertyType::Boolean).describe("keep the existing working tree instead of resetting to origin"),
    );
    let schema = InputSchema::object(properties, vec!["full_name".to_string()]);

    registry.register(
        ToolBuilder::new(
            "workspace_clone_repo",
            "Clones or refreshes a persistent local mirror of a repository at a ref.",
            schema,
        )
        .tags(["workspace", "write"])
        .build(Arc::new(move |args: Value| {
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let requested_ref = args.get("ref").and_then(Value::as_str);
                let effective_ref = config.effective_ref_for_repo(&full_name, requested_ref).to_string();
                let preserve_changes = args.get("preserve_changes").and_then(Value::as_bool).unwrap_or(false);
                let token = get_optional_github_token();

                let path = clone_repo(&config, &full_name, Some(&effective_ref), preserve_changes, token.as_deref()).await?;
                Ok(serde_json::json!({ "path": path.display().to_string(), "ref": effective_ref }))
            })
        })),
    );
}

fn register_create_branch(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("base_ref".to_string(), string_prop("branch to branch from"));
    properties.insert("new_ref".to_string(), string_prop("name of the branch to create"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "base_ref".to_string(), "new_ref".to_string()]);

    registry.register(
        ToolBuilder::new(
            "workspace_create_branch",
            "Creates a new local branch from an already-cloned base ref and relocates the workspace to its keyed directory.",
            schema,
        )
        .tags(["workspace", "write"])
        .build(Arc::new(move |args: Value| {
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let base_ref = required_arg(&args, "base_ref")?.to_string();
                let new_ref = required_arg(&args, "new_ref")?.to_string();
                let token = get_optional_github_token();

                let path = create_branch(&config, &full_name, &base_ref, &new_ref, token.as_deref()).await?;
                Ok(serde_json::json!({ "path": path.display().to_string(), "ref": new_ref }))
            })
        })),
    );
}

fn register_apply_patch(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("ref".to_string(), string_prop("workspace ref the patch applies against"));
    properties.insert("patch".to_string(), string_prop("unified or rangeless diff text"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "ref".to_string(), "patch".to_string()]);

    registry.register(
        ToolBuilder::new(
            "workspace_apply_patch",
            "Applies a unified or rangeless diff to the working tree at full_name@ref (spec S3).",
            schema,
        )
        .tags(["workspace", "write"])
        .build(Arc::new(move |args: Value| {
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let effective_ref = required_arg(&args, "ref")?.to_string();
                let patch = required_arg(&args, "patch")?.to_string();
                let token = get_optional_github_token();

                let repo_dir = workspace_path(Path::new(&config.workspace_base_dir), &full_name, &effective_ref)?;
                apply_patch(&config, &repo_dir, &patch, token.as_deref()).await?;
                Ok(serde_json::json!({ "applied": true, "path": repo_dir.display().to_string() }))
            })
        })),
    );
}

fn register_apply_operations(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("ref".to_string(), string_prop("workspace ref the operations apply against"));
    properties.insert(
        "operations".to_string(),
        PropertySchema::new(PropertyType::Array { items: Box::new(PropertyType::Object) })
            .describe("ordered list of {op, path, ...} operations; see the editor op set"),
    );
    properties.insert("preview_only".to_string(), PropertySchema::new(PropertyType::Boolean).describe("compute results without writing to disk"));
    properties.insert("fail_fast".to_string(), PropertySchema::new(PropertyType::Boolean).describe("stop at the first failing operation"));
    properties.insert("rollback_on_error".to_string(), PropertySchema::new(PropertyType::Boolean).describe("restore prior file state if a fail-fast batch errors"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "ref".to_string(), "operations".to_string()]);

    registry.register(
        ToolBuilder::new(
            "workspace_apply_operations",
            "Applies a batch of structural file operations atomically against a workspace (spec S4).",
            schema,
        )
        .tags(["workspace", "write"])
        .write_action_resolver(Arc::new(|args| !args.get("preview_only").and_then(Value::as_bool).unwrap_or(false)))
        .build(Arc::new(move |args: Value| {
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let effective_ref = required_arg(&args, "ref")?.to_string();
                let ops_json = args
                    .get("operations")
                    .and_then(Value::as_array)
                    .ok_or_else(|| ToolDispatchError::Validation(vec![ValidationError {
                        field: "operations".to_string(),
                        message: "must be an array".to_string(),
                    }]))?;
                let ops: Vec<WorkspaceOperation> = ops_json
                    .iter()
                    .map(|op| serde_json::from_value(op.clone()))
                    .collect::<Result<_, _>>()
                    .map_err(|e: serde_json::Error| ToolDispatchError::Validation(vec![ValidationError {
                        field: "operations".to_string(),
                        message: e.to_string(),
                    }]))?;
                let preview_only = args.get("preview_only").and_then(Value::as_bool).unwrap_or(false);
                let fail_fast = args.get("fail_fast").and_then(Value::as_bool).unwrap_or(true);
                let rollback_on_error = args.get("rollback_on_error").and_then(Value::as_bool).unwrap_or(true);

                let repo_dir = workspace_path(Path::new(&config.workspace_base_dir), &full_name, &effective_ref)?;
                let outcome = apply_workspace_operations(&repo_dir, &ops, preview_only, fail_fast, rollback_on_error, true)?;
                Ok(serde_json::to_value(outcome).unwrap_or(Value::Null))
            })
        })),
    );
}

fn register_read_file(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("ref".to_string(), string_prop("workspace ref to read from"));
    properties.insert("path".to_string(), string_prop("repository-relative path"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "ref".to_string(), "path".to_string()]);

    registry.register(
        ToolBuilder::new("workspace_read_file", "Reads a file's current content from a local workspace checkout.", schema)
            .tags(["workspace", "read"])
            .build(Arc::new(move |args: Value| {
                let config = config.clone();
                Box::pin(async move {
                    let full_name = required_arg(&args, "full_name")?.to_string();
                    let effective_ref = required_arg(&args, "ref")?.to_string();
                    let path = required_arg(&args, "path")?.to_string();

                    let repo_dir = workspace_path(Path::new(&config.workspace_base_dir), &full_name, &effective_ref)?;
                    let target = workspace_safe_join(&repo_dir, &path)?;
                    let content = tokio::fs::read_to_string(&target).await.map_err(ghmcp_workspace::WorkspaceError::Io)?;
                    Ok(serde_json::json!({ "content": content }))
                })
            })),
    );
}

fn register_sync_status(registry: &ToolRegistry, deps: &ToolDeps) {
    let config = deps.config.clone();
    let mut properties = BTreeMap::new();
    properties.insert("full_name".to_string(), string_prop("owner/repo"));
    properties.insert("ref".to_string(), string_prop("workspace ref to check"));
    let schema = InputSchema::object(properties, vec!["full_name".to_string(), "ref".to_string()]);

    registry.register(
        ToolBuilder::new(
            "workspace_sync_status",
            "Reports ahead/behind divergence of a local workspace checkout against origin.",
            schema,
        )
        .tags(["workspace", "read"])
        .build(Arc::new(move |args: Value| {
            let config = config.clone();
            Box::pin(async move {
                let full_name = required_arg(&args, "full_name")?.to_string();
                let effective_ref = required_arg(&args, "ref")?.to_string();
                let token = get_optional_github_token();

                let repo_dir = workspace_path(Path::new(&config.workspace_base_dir), &full_name, &effective_ref)?;
                let status = sync_status(&config, &repo_dir, &effective_ref, token.as_deref()).await?;
                Ok(serde_json::to_value(status).unwrap_or(Value::Null))
            })
        })),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ghmcp_config::ServerConfig;
    use ghmcp_events::RequestContext;

    use crate::registry::{DispatchOutcome, ToolRegistry};
    use crate::side_effect::SideEffectClass;
    use crate::write_gate::WriteGate;

    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            github_api_base_url: "https://api.github.com".to_string(),
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

    fn test_registry() -> ToolRegistry {
        let deps = ToolDeps::new(Arc::new(test_config()));
        let gate = WriteGate::default();
        gate.authorize_write_actions(true);
        let registry = ToolRegistry::new(gate);
        register(&registry, &deps);
        registry
    }

    #[test]
    fn registers_the_full_workspace_surface_with_expected_side_effects() {
        let registry = test_registry();
        let expect = [
            ("workspace_clone_repo", SideEffectClass::LocalMutation),
            ("workspace_create_branch", SideEffectClass::LocalMutation),
            ("workspace_apply_patch", SideEffectClass::LocalMutation),
            ("workspace_apply_operations", SideEffectClass::LocalMutation),
            ("workspace_read_file", SideEffectClass::ReadOnly),
            ("workspace_sync_status", SideEffectClass::ReadOnly),
        ];
        for (name, side_effect) in expect {
            let tool = registry.get(name).unwrap_or_else(|| panic!("{name} not registered"));
            assert_eq!(tool.side_effect, side_effect, "unexpected side effect for {name}");
        }
    }

    #[tokio::test]
    async fn apply_patch_missing_patch_field_fails_validation_before_touching_disk() {
        let registry = test_registry();
        let outcome = registry
            .dispatch("workspace_apply_patch", serde_json::json!({"full_name": "octo/widgets", "ref": "main"}), &ctx())
            .await;
        match outcome {
            DispatchOutcome::Error(envelope) => assert_eq!(envelope.error_detail.category, ghmcp_commons::ErrorCategory::Validation),
            DispatchOutcome::Success(_) => panic!("expected validation failure"),
        }
    }

    #[tokio::test]
    async fn apply_operations_rejects_a_non_array_operations_field() {
        let registry = test_registry();
        let outcome = registry
            .dispatch(
                "workspace_apply_operations",
                serde_json::json!({"full_name": "octo/widgets", "ref": "main", "operations": "not-an-array"}),
                &ctx(),
            )
            .await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn read_file_missing_path_fails_validation() {
        let registry = test_registry();
        let outcome = registry
            .dispatch("workspace_read_file", serde_json::json!({"full_name": "octo/widgets", "ref": "main"}), &ctx())
            .await;
        match outcome {
            DispatchOutcome::Error(envelope) => assert_eq!(envelope.error_detail.category, ghmcp_commons::ErrorCategory::Validation),
            DispatchOutcome::Success(_) => panic!("expected validation failure"),
        }
    }
}
