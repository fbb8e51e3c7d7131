//! Large-file excerpt reader (spec §4.J): a streamed, range-limited view
//! over a file's raw content, so callers never have to pull a multi-MB blob
//! into memory to read the first few kilobytes.

use bytes::Bytes;
use futures::StreamExt;
use reqwest::Method;
use serde::Serialize;

use crate::client::GitHubClient;
use crate::error::GitHubClientError;

/// Arguments for [`get_file_excerpt`]. `start_byte` and `tail_bytes` are
/// mutually exclusive (spec §4.J).
#[derive(Debug, Clone, Default)]
pub struct ExcerptRequest {
    pub full_name: String,
    pub path: String,
    pub r#ref: String,
    pub start_byte: Option<u64>,
    pub max_bytes: u64,
    pub tail_bytes: Option<u64>,
    pub as_text: bool,
    pub max_text_chars: Option<usize>,
    pub numbered_lines: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExcerptResponse {
    pub content_bytes: Option<Vec<u8>>,
    pub text: Option<String>,
    pub truncated: bool,
    pub headers: std::collections::HashMap<String, String>,
    /// The `Range` header actually sent upstream (spec §8 S6), e.g. `"bytes=-10"`
    /// for a tail read.
    pub range_requested: String,
    /// Bytes actually collected before `max_bytes` or stream end cut it off.
    pub size: u64,
}

/// Builds the `Range` header per spec §4.J: an explicit start, an
/// open-ended tail capped by `max_bytes`, or a plain open-ended range.
fn build_range_header(request: &ExcerptRequest) -> Result<String, GitHubClientError> {
    if request.start_byte.is_some() && request.tail_bytes.is_some() {
        return Err(GitHubClientError::Validation(
            "start_byte and tail_bytes are mutually exclusive".to_string(),
        ));
    }
    if let Some(start) = request.start_byte {
        let end = start + request.max_bytes.saturating_sub(1);
        return Ok(format!("bytes={start}-{end}"));
    }
    if let Some(tail) = request.tail_bytes {
        let capped = tail.min(request.max_bytes);
        return Ok(format!("bytes=-{capped}"));
    }
    Ok(format!("bytes=0-{}", request.max_bytes.saturating_sub(1)))
}

/// Streams a file's raw content via the GitHub raw-content client, stopping
/// once `max_bytes` have been received (spec §4.J).
pub async fn get_file_excerpt(
    client: &GitHubClient,
    config_api_base: &str,
    request: ExcerptRequest,
) -> Result<ExcerptResponse, GitHubClientError> {
    let range = build_range_header(&request)?;
    let url = format!(
        "{}/repos/{}/contents/{}?ref={}",
        config_api_base.trim_end_matches('/'),
        request.full_name,
        request.path.trim_start_matches('/'),
        request.r#ref
    );

    let response = client
        .request_raw(Method::GET, &url, Some(range))
        .await?;

    let headers: std::collections::HashMap<String, String> = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_ascii_lowercase(), value.to_string()))
        })
        .filter(|(name, _)| {
            matches!(
                name.as_str(),
                "content-range" | "accept-ranges" | "etag" | "content-length"
            )
        })
        .collect();

    let mut collected: Vec<u8> = Vec::with_capacity(request.max_bytes.min(1 << 20) as usize);
    let mut truncated = false;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk: Bytes = chunk.map_err(|e| GitHubClientError::Other(e.into()))?;
        let remaining = request.max_bytes.saturating_sub(collected.len() as u64);
        if remaining == 0 {
            truncated = true;
            break;
        }
        if (chunk.len() as u64) > remaining {
            collected.extend_from_slice(&chunk[..remaining as usize]);
            truncated = true;
            break;
        }
        collected.extend_from_slice(&chunk);
    }

    if request.as_text {
        let mut text = String::from_utf8_lossy(&collected).into_owned();
        if let Some(max_chars) = request.max_text_chars {
            if text.chars().count() > max_chars {
                text = text.chars().take(max_chars).collect();
                truncated = true;
            }
        }
        if request.numbered_lines {
            text = text
                .lines()
                .enumerate()
                .map(|(i, line)| format!("{:>6}\t{line}", i + 1))
                .collect::<Vec<_>>()
                .join("\n");
        }
        Ok(ExcerptResponse {
            content_bytes: None,
            text: Some(text),
            truncated,
            headers,
            range_requested: range,
            size: collected.len() as u64,
        })
    } else {
        let size = collected.len() as u64;
        Ok(ExcerptResponse {
            content_bytes: Some(collected),
            text: None,
            truncated,
            headers,
            range_requested: range,
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_header_uses_explicit_start() {
        let request = ExcerptRequest {
            start_byte: Some(100),
            max_bytes: 50,
            ..Default::default()
        };
        assert_eq!(build_range_header(&request).unwrap(), "bytes=100-149");
    }

    #[test]
    fn range_header_caps_tail_by_max_bytes() {
        let request = ExcerptRequest {
            tail_bytes: Some(1000),
            max_bytes: 200,
            ..Default::default()
        };
        assert_eq!(build_range_header(&request).unwrap(), "bytes=-200");
    }

    #[test]
    fn range_header_open_ended_without_start_or_tail() {
        let request = ExcerptRequest {
            max_bytes: 300,
            ..Default::default()
        };
        assert_eq!(build_range_header(&request).unwrap(), "bytes=0-299");
    }

    #[test]
    fn start_and_tail_are_mutually_exclusive() {
        let request = ExcerptRequest {
            start_byte: Some(1),
            tail_bytes: Some(1),
            max_bytes: 100,
            ..Default::default()
        };
        assert!(build_range_header(&request).is_err());
    }

    #[test]
    fn numbered_lines_prefixes_line_numbers() {
        let numbered = "a\nb\nc"
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{:>6}\t{line}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(numbered, "     1\ta\n     2\tb\n     3\tc");
    }
}
