//! Environment-driven configuration for the GitHub MCP server (spec §4.A).
//!
//! Every value here is read from the process environment, never from disk,
//! and reads happen once per process: [`ServerConfig::from_env`] snapshots
//! everything at startup into an owned struct so the rest of the server
//! never calls `std::env::var` directly. A reload API is intentionally out
//! of scope (spec §4.A).

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Ordered list of env vars consulted for the GitHub token, in priority order.
const GITHUB_TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GITHUB_PAT"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no GitHub token found in environment (checked {0:?})")]
    MissingGitHubToken(&'static [&'static str]),
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Raised by helpers that require a GitHub token and none was resolvable.
/// Named distinctly from [`ConfigError`] so the dispatcher's error-category
/// inference (spec §4.B, `GitHubAuthError` → `auth`) can pattern-match it.
#[derive(Debug, Error)]
#[error("GitHub authentication required: {0}")]
pub struct GitHubAuthError(pub String);

/// Resolve the GitHub token from the environment, trimming whitespace and
/// treating an empty-after-trim value as absent. Consults
/// `GITHUB_TOKEN_ENV_VARS` in order and returns the first non-empty hit.
fn resolve_github_token_raw() -> Option<String> {
    for var in GITHUB_TOKEN_ENV_VARS {
        if let Ok(value) = env::var(var) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Required variant: fails with [`GitHubAuthError`] when no token is set.
pub fn get_github_token() -> Result<String, GitHubAuthError> {
    resolve_github_token_raw().ok_or_else(|| {
        GitHubAuthError(format!(
            "none of {GITHUB_TOKEN_ENV_VARS:?} were set (or all were empty after trimming)"
        ))
    })
}

/// Optional variant: returns `None` (the "absent" sentinel) instead of
/// failing, for read-only calls against public endpoints that can proceed
/// unauthenticated.
pub fn get_optional_github_token() -> Option<String> {
    resolve_github_token_raw()
}

fn parse_env_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|err| ConfigError::InvalidValue {
                name,
                value: raw,
                reason: err.to_string(),
            })
        }
        _ => Ok(default),
    }
}

fn env_string_or(name: &'static str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_bool_or(name: &'static str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(default)
}

/// A complete, process-scoped snapshot of server configuration. Constructed
/// once via [`ServerConfig::from_env`] and shared (typically behind an
/// `Arc`) by every crate that needs it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub github_api_base_url: String,
    pub github_request_timeout: Duration,
    pub http_max_connections: usize,
    pub http_max_keepalive: usize,
    pub http_timeout: Duration,
    pub max_concurrency: usize,
    pub workspace_base_dir: String,
    pub controller_repo: Option<String>,
    pub controller_default_branch: Option<String>,
    pub write_allowed: bool,
    pub git_author_name: String,
    pub git_author_email: String,
    pub git_committer_name: String,
    pub git_committer_email: String,
    pub tool_stdout_max_chars: usize,
    pub tool_stderr_max_chars: usize,
    pub rate_limit_retry_max_attempts: u32,
    pub rate_limit_retry_base_delay: Duration,
    pub rate_limit_retry_max_wait: Duration,
    pub healthz_oneshot: bool,
    pub error_debug_truncate_chars: usize,
    pub error_debug_args: bool,
    pub render_api_key: Option<String>,
    pub render_owner_id: Option<String>,
    pub render_service_id: Option<String>,
    pub allowed_hosts: Vec<String>,
}

/// Floor below which the debug-truncation length is never allowed to drop,
/// matching spec §4.B ("truncates long strings to a floor-protected limit
/// (min 200 chars)").
pub const MIN_ERROR_DEBUG_TRUNCATE_CHARS: usize = 200;

impl ServerConfig {
    /// Read every documented environment variable once and return an owned
    /// snapshot. Subsequent calls perform the same reads again (there is no
    /// process-wide cache here by design — callers that want a singleton
    /// hold the returned value themselves), but each *logical* config load
    /// happens once per server startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let error_debug_truncate_chars = parse_env_or(
            "ADAPTIV_MCP_ERROR_DEBUG_TRUNCATE_CHARS",
            2000usize,
        )?
        .max(MIN_ERROR_DEBUG_TRUNCATE_CHARS);

        let allowed_hosts_raw = env_string_or("ALLOWED_HOSTS", "");
        let mut allowed_hosts: Vec<String> = allowed_hosts_raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if let Ok(host) = env::var("RENDER_EXTERNAL_HOSTNAME") {
            if !host.trim().is_empty() {
                allowed_hosts.push(host.trim().to_string());
            }
        }
        if let Ok(url) = env::var("RENDER_EXTERNAL_URL") {
            if let Some(host) = extract_host(&url) {
                allowed_hosts.push(host);
            }
        }

        Ok(Self {
            github_api_base_url: env_string_or(
                "GITHUB_API_BASE_URL",
                "https://api.github.com",
            ),
            github_request_timeout: Duration::from_secs(parse_env_or(
                "GITHUB_REQUEST_TIMEOUT_SECONDS",
                30u64,
            )?),
            http_max_connections: parse_env_or("HTTPX_MAX_CONNECTIONS", 100usize)?,
            http_max_keepalive: parse_env_or("HTTPX_MAX_KEEPALIVE", 20usize)?,
            http_timeout: Duration::from_secs(parse_env_or("HTTPX_TIMEOUT", 60u64)?),
            max_concurrency: parse_env_or("MAX_CONCURRENCY", 16usize)?,
            workspace_base_dir: env_string_or("WORKSPACE_BASE_DIR", "/tmp/ghmcp-workspaces"),
            controller_repo: env::var("GITHUB_MCP_CONTROLLER_REPO")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            controller_default_branch: env::var("GITHUB_MCP_CONTROLLER_BRANCH")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            write_allowed: env_bool_or("GITHUB_MCP_WRITE_ALLOWED", false),
            git_author_name: env_string_or("GIT_AUTHOR_NAME", "ghmcp-bot"),
            git_author_email: env_string_or("GIT_AUTHOR_EMAIL", "ghmcp-bot@users.noreply.github.com"),
            git_committer_name: env_string_or("GIT_COMMITTER_NAME", "ghmcp-bot"),
            git_committer_email: env_string_or(
                "GIT_COMMITTER_EMAIL",
                "ghmcp-bot@users.noreply.github.com",
            ),
            tool_stdout_max_chars: parse_env_or("TOOL_STDOUT_MAX_CHARS", 20_000usize)?,
            tool_stderr_max_chars: parse_env_or("TOOL_STDERR_MAX_CHARS", 20_000usize)?,
            rate_limit_retry_max_attempts: parse_env_or(
                "GITHUB_RATE_LIMIT_RETRY_MAX_ATTEMPTS",
                5u32,
            )?,
            rate_limit_retry_base_delay: Duration::from_secs_f64(parse_env_or(
                "GITHUB_RATE_LIMIT_RETRY_BASE_DELAY_SECONDS",
                1.0f64,
            )?),
            rate_limit_retry_max_wait: Duration::from_secs_f64(parse_env_or(
                "GITHUB_RATE_LIMIT_RETRY_MAX_WAIT_SECONDS",
                60.0f64,
            )?),
            healthz_oneshot: env_bool_or("HEALTHZ_ONESHOT", false),
            error_debug_truncate_chars,
            error_debug_args: env_bool_or("ADAPTIV_MCP_ERROR_DEBUG_ARGS", false),
            render_api_key: env::var("RENDER_API_KEY").ok().filter(|s| !s.trim().is_empty()),
            render_owner_id: env::var("RENDER_OWNER_ID").ok().filter(|s| !s.trim().is_empty()),
            render_service_id: env::var("RENDER_SERVICE_ID")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            allowed_hosts,
        })
    }

    /// Applies the controller-repo override rule (spec §3, `_effective_ref_for_repo`):
    /// when `full_name` matches the configured controller repo and the
    /// caller's ref is absent or `"main"`, substitute the controller's
    /// default branch. Idempotent: calling twice with the already-resolved
    /// ref returns the same value, since the substitution condition
    /// (`ref ∈ {None, "main"}`) no longer holds once the branch name differs
    /// from `"main"`.
    pub fn effective_ref_for_repo<'a>(&'a self, full_name: &str, ref_: Option<&'a str>) -> &'a str {
        let is_controller = self
            .controller_repo
            .as_deref()
            .is_some_and(|repo| repo == full_name);
        if is_controller && matches!(ref_, None | Some("main")) {
            if let Some(branch) = self.controller_default_branch.as_deref() {
                return branch;
            }
        }
        ref_.unwrap_or("main")
    }
}

fn extract_host(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let host_port = without_scheme.split(['/', '?', '#']).next()?;
    let host = host_port.split(':').next()?;
    if host.is_empty() { None } else { Some(host.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn token_resolution_prefers_github_token_over_pat() {
        // SAFETY: serialized via #[serial] to avoid cross-test env races.
        unsafe {
            env::set_var("GITHUB_TOKEN", "  primary-token  ");
            env::set_var("GITHUB_PAT", "fallback-token");
        }
        assert_eq!(get_github_token().unwrap(), "primary-token");
        unsafe {
            env::remove_var("GITHUB_TOKEN");
            env::remove_var("GITHUB_PAT");
        }
    }

    #[test]
    #[serial]
    fn token_resolution_falls_back_to_pat() {
        unsafe {
            env::remove_var("GITHUB_TOKEN");
            env::set_var("GITHUB_PAT", "pat-token");
        }
        assert_eq!(get_github_token().unwrap(), "pat-token");
        unsafe {
            env::remove_var("GITHUB_PAT");
        }
    }

    #[test]
    #[serial]
    fn empty_after_trim_is_absent() {
        unsafe {
            env::set_var("GITHUB_TOKEN", "   ");
            env::remove_var("GITHUB_PAT");
        }
        assert!(get_optional_github_token().is_none());
        assert!(get_github_token().is_err());
        unsafe {
            env::remove_var("GITHUB_TOKEN");
        }
    }

    #[test]
    #[serial]
    fn error_debug_truncate_has_a_floor() {
        unsafe {
            env::set_var("ADAPTIV_MCP_ERROR_DEBUG_TRUNCATE_CHARS", "10");
        }
        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(cfg.error_debug_truncate_chars, MIN_ERROR_DEBUG_TRUNCATE_CHARS);
        unsafe {
            env::remove_var("ADAPTIV_MCP_ERROR_DEBUG_TRUNCATE_CHARS");
        }
    }

    #[test]
    #[serial]
    fn effective_ref_substitutes_for_controller_repo_main() {
        unsafe {
            env::set_var("GITHUB_MCP_CONTROLLER_REPO", "owner/ctrl");
            env::set_var("GITHUB_MCP_CONTROLLER_BRANCH", "ally-refactor");
        }
        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(
            cfg.effective_ref_for_repo("owner/ctrl", Some("main")),
            "ally-refactor"
        );
        assert_eq!(cfg.effective_ref_for_repo("owner/ctrl", None), "ally-refactor");
        assert_eq!(
            cfg.effective_ref_for_repo("owner/ctrl", Some("feature/x")),
            "feature/x"
        );
        assert_eq!(cfg.effective_ref_for_repo("owner/other", None), "main");
        unsafe {
            env::remove_var("GITHUB_MCP_CONTROLLER_REPO");
            env::remove_var("GITHUB_MCP_CONTROLLER_BRANCH");
        }
    }

    #[test]
    fn extract_host_handles_scheme_and_path() {
        assert_eq!(
            extract_host("https://ghmcp.onrender.com/healthz").as_deref(),
            Some("ghmcp.onrender.com")
        );
        assert_eq!(extract_host("example.com:8080").as_deref(), Some("example.com"));
    }
}
