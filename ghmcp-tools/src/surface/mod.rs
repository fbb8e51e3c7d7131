//! Workspace Tool Surface (spec §4.L): a representative set of tools built
//! on top of `ghmcp-github` and `ghmcp-workspace`. Per spec §3, the full
//! tool catalog is not enumerated — this wires one or two tools per
//! component (GitHub read, GitHub write, workspace local-mutation,
//! introspection) so the registry is demonstrably complete end to end
//! rather than exhaustive.

pub mod github_tools;
pub mod introspection_tools;
pub mod workspace_tools;

use std::sync::Arc;

use ghmcp_config::ServerConfig;
use ghmcp_github::GitHubClient;

use crate::registry::ToolRegistry;
use crate::write_gate::WriteGate;

/// Shared handles every surface tool closes over.
#[derive(Clone)]
pub struct ToolDeps {
    pub config: Arc<ServerConfig>,
    pub github: Arc<GitHubClient>,
}

impl ToolDeps {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let github = Arc::new(GitHubClient::new(config.clone()));
        Self { config, github }
    }
}

/// Builds a [`ToolRegistry`] with the representative surface registered
/// (spec §4.L). Introspection tools are registered last since they close
/// over the already-populated registry via `Arc`.
pub fn build_registry(deps: ToolDeps, gate: WriteGate) -> Arc<ToolRegistry> {
    let registry = ToolRegistry::new(gate);
    github_tools::register(&registry, &deps);
    workspace_tools::register(&registry, &deps);
    let registry = Arc::new(registry);
    introspection_tools::register_into(&registry);
    registry
}
