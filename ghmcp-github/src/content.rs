//! GitHub Contents API helpers (spec §4.K).

use std::net::IpAddr;
use std::path::Path;

use base64::Engine;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::GitHubClient;
use crate::error::{GitHubApiError, GitHubClientError};

/// Cap, in bytes, above which `_decode_github_content` hands the caller off
/// to the excerpt reader instead of inlining content (spec §4.K).
pub const INLINE_CONTENT_SIZE_CAP: u64 = 1_000_000;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DecodedContent {
    Inline {
        content: String,
        sha: String,
        size: u64,
    },
    LargeFile {
        large_file: bool,
        message: String,
    },
}

/// Fetches the Contents API for `path`@`ref` and decodes the inline base64
/// body. GitHub omits inline content above its own size threshold, and this
/// helper additionally enforces `INLINE_CONTENT_SIZE_CAP` as a second guard.
pub async fn decode_github_content(
    client: &GitHubClient,
    full_name: &str,
    path: &str,
    r#ref: &str,
) -> Result<DecodedContent, GitHubClientError> {
    let api_path = format!(
        "repos/{full_name}/contents/{}?ref={ref}",
        path.trim_start_matches('/')
    );
    let response = client.request_api(Method::GET, &api_path, None).await?;
    let json = response
        .json()
        .ok_or_else(|| GitHubClientError::Validation("contents response was not JSON".into()))?;

    let size = json.get("size").and_then(Value::as_u64).unwrap_or(0);
    let sha = json
        .get("sha")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let content_b64 = json.get("content").and_then(Value::as_str);

    if size > INLINE_CONTENT_SIZE_CAP || content_b64.is_none() {
        return Ok(DecodedContent::LargeFile {
            large_file: true,
            message: format!(
                "{path} is {size} bytes; use get_file_excerpt instead of inlining its content"
            ),
        });
    }

    let cleaned: String = content_b64
        .unwrap()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(cleaned)
        .map_err(|e| GitHubClientError::Validation(format!("invalid base64 content: {e}")))?;
    let content = String::from_utf8_lossy(&decoded).into_owned();

    Ok(DecodedContent::Inline {
        content,
        sha,
        size,
    })
}

/// PUTs to the Contents API to create/update a file, stripping the
/// (potentially megabyte-sized) inline `content`/`encoding` fields from the
/// response before returning it (spec §4.K).
pub async fn perform_github_commit(
    client: &GitHubClient,
    full_name: &str,
    branch: &str,
    path: &str,
    message: &str,
    body_bytes: &[u8],
    sha: Option<&str>,
) -> Result<Value, GitHubClientError> {
    let api_path = format!("repos/{full_name}/contents/{}", path.trim_start_matches('/'));
    let encoded = base64::engine::general_purpose::STANDARD.encode(body_bytes);

    let mut payload = serde_json::json!({
        "message": message,
        "content": encoded,
        "branch": branch,
    });
    if let Some(sha) = sha {
        payload["sha"] = Value::String(sha.to_string());
    }

    let response = client
        .request_api(Method::PUT, &api_path, Some(payload))
        .await?;
    let mut json = response
        .json()
        .cloned()
        .ok_or_else(|| GitHubClientError::Validation("commit response was not JSON".into()))?;

    if let Some(content_obj) = json.get_mut("content") {
        if let Some(obj) = content_obj.as_object_mut() {
            obj.remove("content");
            obj.remove("encoding");
        }
    }

    Ok(json)
}

/// Fetches only the blob `sha` for `path`@`ref`, used by write wrappers that
/// need the current sha to PUT an update (spec §4.K).
pub async fn resolve_file_sha(
    client: &GitHubClient,
    full_name: &str,
    path: &str,
    r#ref: &str,
) -> Result<Option<String>, GitHubClientError> {
    let api_path = format!(
        "repos/{full_name}/contents/{}?ref={ref}",
        path.trim_start_matches('/')
    );
    match client.request_api(Method::GET, &api_path, None).await {
        Ok(response) => Ok(response
            .json()
            .and_then(|json| json.get("sha"))
            .and_then(Value::as_str)
            .map(str::to_string)),
        Err(GitHubClientError::Api(ref err)) if err.status_code == 404 => Ok(None),
        Err(other) => Err(other),
    }
}

/// Confirms `path` exists on `branch` with the expected `sha`, used after a
/// commit to guard against a racing concurrent write (spec §4.K).
pub async fn verify_file_on_branch(
    client: &GitHubClient,
    full_name: &str,
    path: &str,
    branch: &str,
    expected_sha: &str,
) -> Result<bool, GitHubClientError> {
    let sha = resolve_file_sha(client, full_name, path, branch).await?;
    Ok(sha.as_deref() == Some(expected_sha))
}

/// Parsed form of a `_load_body_from_content_url` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentUrl {
    GitHub {
        full_name: String,
        path: String,
        r#ref: Option<String>,
    },
    Sandbox(String),
    LocalPath(String),
    Http(String),
}

/// Parses the four accepted forms: `github:owner/repo:path[@ref]`,
/// `sandbox:<abs-path>`, a bare absolute local path, or `http(s)://` (spec
/// §4.K).
pub fn parse_content_url(raw: &str) -> Result<ContentUrl, GitHubClientError> {
    if let Some(rest) = raw.strip_prefix("github:") {
        let (repo_and_path, r#ref) = match rest.rsplit_once('@') {
            Some((head, tail)) if !tail.contains('/') => (head, Some(tail.to_string())),
            _ => (rest, None),
        };
        let (full_name, path) = repo_and_path
            .split_once(':')
            .ok_or_else(|| GitHubClientError::Validation(format!("malformed github: url: {raw}")))?;
        return Ok(ContentUrl::GitHub {
            full_name: full_name.to_string(),
            path: path.to_string(),
            r#ref,
        });
    }
    if let Some(rest) = raw.strip_prefix("sandbox:") {
        return Ok(ContentUrl::Sandbox(rest.to_string()));
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Ok(ContentUrl::Http(raw.to_string()));
    }
    if Path::new(raw).is_absolute() {
        return Ok(ContentUrl::LocalPath(raw.to_string()));
    }
    Err(GitHubClientError::Validation(format!(
        "unrecognized content url form: {raw}"
    )))
}

/// SSRF block-list per spec §4.K: localhost, RFC1918 ranges, link-local,
/// and IPv6 loopback are all rejected for `http(s)://` bodies.
pub fn is_blocked_host(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => {
            let octets = addr.octets();
            addr.is_loopback()
                || octets[0] == 10
                || (octets[0] == 172 && (16..=31).contains(&octets[1]))
                || (octets[0] == 192 && octets[1] == 168)
                || (octets[0] == 169 && octets[1] == 254)
        }
        Ok(IpAddr::V6(addr)) => addr.is_loopback() || addr.is_unspecified(),
        Err(_) => false,
    }
}

/// Validates an `http(s)://` content URL against the SSRF block-list,
/// returning a [`GitHubApiError`]-shaped validation failure on a hit.
pub fn check_ssrf_block_list(url: &str) -> Result<(), GitHubClientError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| GitHubClientError::Validation(format!("invalid URL: {e}")))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| GitHubClientError::Validation("URL has no host".to_string()))?;
    if is_blocked_host(host) {
        return Err(GitHubClientError::Api(
            GitHubApiError::new(400, format!("refusing to fetch blocked host: {host}"))
                .with_category(ghmcp_commons::ErrorCategory::Validation)
                .with_code("SSRF_BLOCKED_HOST"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_github_url_with_ref() {
        let parsed = parse_content_url("github:owner/repo:src/lib.rs@feature/x").unwrap();
        assert_eq!(
            parsed,
            ContentUrl::GitHub {
                full_name: "owner/repo".to_string(),
                path: "src/lib.rs".to_string(),
                r#ref: Some("feature/x".to_string()),
            }
        );
    }

    #[test]
    fn parses_github_url_without_ref() {
        let parsed = parse_content_url("github:owner/repo:README.md").unwrap();
        assert_eq!(
            parsed,
            ContentUrl::GitHub {
                full_name: "owner/repo".to_string(),
                path: "README.md".to_string(),
                r#ref: None,
            }
        );
    }

    #[test]
    fn parses_sandbox_and_http_and_local() {
        assert_eq!(
            parse_content_url("sandbox:/tmp/x").unwrap(),
            ContentUrl::Sandbox("/tmp/x".to_string())
        );
        assert_eq!(
            parse_content_url("https://example.com/x").unwrap(),
            ContentUrl::Http("https://example.com/x".to_string())
        );
        assert_eq!(
            parse_content_url("/abs/local/path").unwrap(),
            ContentUrl::LocalPath("/abs/local/path".to_string())
        );
    }

    #[test]
    fn rejects_unrecognized_form() {
        assert!(parse_content_url("relative/path").is_err());
    }

    #[test]
    fn blocks_loopback_and_private_ranges() {
        assert!(is_blocked_host("127.0.0.1"));
        assert!(is_blocked_host("localhost"));
        assert!(is_blocked_host("10.0.0.5"));
        assert!(is_blocked_host("172.16.0.1"));
        assert!(is_blocked_host("192.168.1.1"));
        assert!(is_blocked_host("169.254.1.1"));
        assert!(is_blocked_host("::1"));
        assert!(!is_blocked_host("172.32.0.1"));
        assert!(!is_blocked_host("github.com"));
    }

    #[test]
    fn check_ssrf_block_list_rejects_private_ip_url() {
        let result = check_ssrf_block_list("http://127.0.0.1/secret");
        assert!(result.is_err());
    }

    #[test]
    fn check_ssrf_block_list_allows_public_host() {
        let result = check_ssrf_block_list("https://raw.githubusercontent.com/x");
        assert!(result.is_ok());
    }
}
