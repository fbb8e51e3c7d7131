//! GitHub HTTP Client Layer (spec §4.C, §4.J, §4.K): a pooled, runtime-scoped
//! client with rate-limit-aware retry and status-code mapping, the
//! large-file excerpt reader, and the Contents API write/read helpers.
//!
//! ## Modules
//!
//! - [`client`] - `GitHubClient`, the three pooled identities, metrics
//! - [`error`] - typed `GitHubAuthError`/`GitHubRateLimitError`/`GitHubApiError`
//! - [`excerpt`] - `get_file_excerpt`, the streamed range reader
//! - [`content`] - Contents API decode/commit/sha helpers, SSRF block-list

pub mod client;
pub mod content;
pub mod error;
pub mod excerpt;

pub use client::{ClientKind, GitHubClient, GitHubResponseBody};
pub use content::{
    ContentUrl, DecodedContent, INLINE_CONTENT_SIZE_CAP, check_ssrf_block_list,
    decode_github_content, is_blocked_host, parse_content_url, perform_github_commit,
    resolve_file_sha, verify_file_on_branch,
};
pub use error::{GitHubApiError, GitHubAuthError, GitHubClientError, GitHubRateLimitError};
pub use excerpt::{ExcerptRequest, ExcerptResponse, get_file_excerpt};
