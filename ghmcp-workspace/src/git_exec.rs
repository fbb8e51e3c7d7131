//! Git execution with auth, retry, and subprocess safety (spec §4.E.3,
//! §4.E.4). Built directly on `tokio::process::Command` rather than
//! `ghmcp_process`'s pipe-based spawner, since git needs separate
//! stdout/stderr capture (stderr is pattern-matched for auth/rate-limit
//! markers) and per-call env overrides the generic `BashRunner` shell
//! surface doesn't expose; it reuses `ghmcp_process::process_group` for the
//! same POSIX process-group kill semantics the rest of the server relies on.

use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use ghmcp_process::process_group;
use rand::Rng;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::error::WorkspaceError;

/// Hard sub-timeout for draining stdout/stderr after a kill, so a wedged
/// pipe can never hang the caller indefinitely (spec §4.E.4).
const DRAIN_SUB_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct GitCommandOutput {
    pub status_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub stdout_truncated: bool,
    pub stderr_truncated: bool,
}

/// Markers in stderr that indicate a transient, retry-worthy GitHub-side
/// rate limit (spec §4.E.3).
const RATE_LIMIT_MARKERS: &[&str] = ["rate limit", "secondary rate limit", "abuse detection"];

const AUTH_FAILURE_MARKERS: &[&str] = ["authentication failed", "could not read username"];

fn looks_like_rate_limit(stderr: &str) -> bool {
    let lower = stderr.to_ascii_lowercase();
    RATE_LIMIT_MARKERS.iter().any(|m| lower.contains(m))
}

fn looks_like_auth_failure(stderr: &str) -> bool {
    let lower = stderr.to_ascii_lowercase();
    AUTH_FAILURE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Runs a single `git` invocation under its own process group, truncating
/// stdout/stderr to `max_output_chars`, and killing the whole group on
/// `timeout` (spec §4.E.4).
pub async fn run_git_once(
    args: &[&str],
    cwd: &Path,
    env: &HashMap<String, String>,
    timeout: Duration,
    max_output_chars: usize,
) -> Result<GitCommandOutput, WorkspaceError> {
    let mut command = Command::new("git");
    command.args(args);
    command.current_dir(cwd);
    command.env_clear();
    for (key, value) in env {
        command.env(key, value);
    }
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    #[cfg(unix)]
    unsafe {
        command.pre_exec(|| process_group::set_process_group());
    }

    let mut child = command.spawn().map_err(WorkspaceError::Io)?;
    let pid = child.id();
    let mut stdout_pipe = child.stdout.take();
    let mut stderr_pipe = child.stderr.take();

    let run = async {
        let mut stdout_buf = Vec::new();
        let mut stderr_buf = Vec::new();
        if let Some(mut pipe) = stdout_pipe.take() {
            let _ = pipe.read_to_end(&mut stdout_buf).await;
        }
        if let Some(mut pipe) = stderr_pipe.take() {
            let _ = pipe.read_to_end(&mut stderr_buf).await;
        }
        let status = child.wait().await;
        (stdout_buf, stderr_buf, status)
    };

    match tokio::time::timeout(timeout, run).await {
        Ok((stdout_buf, stderr_buf, status)) => {
            let status = status.map_err(WorkspaceError::Io)?;
            let (stdout, stdout_truncated) = truncate_output(&stdout_buf, max_output_chars);
            let (stderr, stderr_truncated) = truncate_output(&stderr_buf, max_output_chars);
            Ok(GitCommandOutput {
                status_code: status.code(),
                success: status.success(),
                stdout,
                stderr,
                stdout_truncated,
                stderr_truncated,
            })
        }
        Err(_) => {
            #[cfg(unix)]
            if let Some(pid) = pid {
                let _ = process_group::kill_process_group_by_pid(pid);
            }
            #[cfg(windows)]
            if let Some(pid) = pid {
                let _ = process_group::kill_process(pid);
            }
            let _ = tokio::time::timeout(DRAIN_SUB_TIMEOUT, child.wait()).await;
            Err(WorkspaceError::Timeout(timeout.as_millis() as u64))
        }
    }
}

fn truncate_output(raw: &[u8], max_chars: usize) -> (String, bool) {
    let text = String::from_utf8_lossy(raw).into_owned();
    if text.chars().count() > max_chars {
        (text.chars().take(max_chars).collect(), true)
    } else {
        (text, false)
    }
}

/// Builds the env map used for an authenticated git invocation, preferring
/// `GIT_HTTP_EXTRAHEADER` + the `GIT_CONFIG_COUNT/KEY/VALUE` trio to pass
/// the bearer token, with `GIT_TERMINAL_PROMPT=0` so a missing/invalid
/// credential fails fast instead of hanging on a prompt (spec §4.E.3).
pub fn build_git_env(base: &HashMap<String, String>, token: Option<&str>) -> HashMap<String, String> {
    let mut env = base.clone();
    env.insert("GIT_TERMINAL_PROMPT".to_string(), "0".to_string());
    if let Some(token) = token {
        let header = format!("Authorization: Basic {}", base64_basic_auth(token));
        env.insert("GIT_CONFIG_COUNT".to_string(), "1".to_string());
        env.insert(
            "GIT_CONFIG_KEY_0".to_string(),
            "http.extraHeader".to_string(),
        );
        env.insert("GIT_CONFIG_VALUE_0".to_string(), header.clone());
        env.insert("GIT_HTTP_EXTRAHEADER".to_string(), header);
    }
    env
}

fn base64_basic_auth(token: &str) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(format!("x-access-token:{token}"))
}

/// `_run_git_with_retry` (spec §4.E.3): retries on rate-limit stderr
/// markers with bounded backoff + jitter, retries once without auth on an
/// auth-looking `fetch` failure, and surfaces a typed auth error on a
/// persistent auth-like failure.
pub async fn run_git_with_retry(
    args: &[&str],
    cwd: &Path,
    base_env: &HashMap<String, String>,
    token: Option<&str>,
    max_attempts: u32,
    base_delay: Duration,
    max_wait: Duration,
    timeout: Duration,
    max_output_chars: usize,
) -> Result<GitCommandOutput, WorkspaceError> {
    let mut attempt = 0u32;
    let mut last_err: Option<WorkspaceError> = None;

    while attempt < max_attempts.max(1) {
        attempt += 1;
        let env = build_git_env(base_env, token);
        let output = run_git_once(args, cwd, &env, timeout, max_output_chars).await?;

        if output.success {
            return Ok(output);
        }

        if looks_like_rate_limit(&output.stderr) && attempt < max_attempts {
            let backoff = exponential_backoff_with_jitter(attempt, base_delay, max_wait);
            tracing::warn!(attempt, backoff_ms = backoff.as_millis() as u64, "git rate limited, retrying");
            tokio::time::sleep(backoff).await;
            last_err = Some(WorkspaceError::GitCommandFailed(output.stderr));
            continue;
        }

        let is_fetch = args.first() == Some(&"fetch");
        if is_fetch && token.is_some() && looks_like_auth_failure(&output.stderr) {
            let no_auth_env = build_git_env(base_env, None);
            let retry = run_git_once(args, cwd, &no_auth_env, timeout, max_output_chars).await?;
            if retry.success {
                return Ok(retry);
            }
            if looks_like_auth_failure(&retry.stderr) {
                return Err(WorkspaceError::Auth(retry.stderr));
            }
            return Err(WorkspaceError::GitCommandFailed(retry.stderr));
        }

        if looks_like_auth_failure(&output.stderr) {
            return Err(WorkspaceError::Auth(output.stderr));
        }

        return Err(WorkspaceError::GitCommandFailed(output.stderr));
    }

    Err(last_err.unwrap_or_else(|| WorkspaceError::GitCommandFailed("git command failed".into())))
}

fn exponential_backoff_with_jitter(attempt: u32, base: Duration, max: Duration) -> Duration {
    let exp = base.saturating_mul(1u32 << attempt.min(10));
    let capped = exp.min(max);
    let jitter_ms = rand::rng().random_range(0..=(capped.as_millis() as u64 / 4).max(1));
    capped + Duration::from_millis(jitter_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_markers_detected_case_insensitively() {
        assert!(looks_like_rate_limit("You have exceeded a secondary rate limit"));
        assert!(looks_like_rate_limit("ABUSE DETECTION triggered"));
        assert!(!looks_like_rate_limit("fatal: repository not found"));
    }

    #[test]
    fn auth_failure_markers_detected() {
        assert!(looks_like_auth_failure("Authentication failed for 'https://github.com/x'"));
        assert!(!looks_like_auth_failure("fatal: pathspec did not match"));
    }

    #[test]
    fn build_git_env_sets_terminal_prompt_and_headers() {
        let base = HashMap::new();
        let env = build_git_env(&base, Some("tok123"));
        assert_eq!(env.get("GIT_TERMINAL_PROMPT").map(String::as_str), Some("0"));
        assert!(env.contains_key("GIT_HTTP_EXTRAHEADER"));
        assert_eq!(env.get("GIT_CONFIG_COUNT").map(String::as_str), Some("1"));
    }

    #[test]
    fn build_git_env_without_token_omits_auth_headers() {
        let base = HashMap::new();
        let env = build_git_env(&base, None);
        assert!(!env.contains_key("GIT_HTTP_EXTRAHEADER"));
        assert_eq!(env.get("GIT_TERMINAL_PROMPT").map(String::as_str), Some("0"));
    }

    #[test]
    fn backoff_grows_and_is_capped() {
        let small = exponential_backoff_with_jitter(1, Duration::from_millis(100), Duration::from_secs(10));
        let large = exponential_backoff_with_jitter(8, Duration::from_millis(100), Duration::from_secs(10));
        assert!(small < Duration::from_secs(11));
        assert!(large <= Duration::from_secs(11));
    }

    #[tokio::test]
    async fn run_git_once_executes_version_command() {
        let output = run_git_once(
            &["--version"],
            Path::new("."),
            &HashMap::from([("PATH".to_string(), std::env::var("PATH").unwrap_or_default())]),
            Duration::from_secs(5),
            1000,
        )
        .await
        .unwrap();
        assert!(output.success);
        assert!(output.stdout.to_ascii_lowercase().contains("git version"));
    }
}
