//! Shared primitives reused by every crate in the workspace: the closed
//! error taxonomy and structured envelope (§4.B), secret redaction (§4.D),
//! diff/patch text classification helpers used by the workspace engine's
//! patch parser (§4.E), generic path-safety helpers, and small HTTP client
//! factory functions shared by the GitHub client layer (§4.C).

pub mod diff_paths;
pub mod error_category;
pub mod errors;
pub mod http;
pub mod paths;
pub mod sanitizer;
pub mod telemetry;
pub mod utils;

pub use error_category::{BackoffStrategy, ErrorCategory, Retryability, classify_error_message};
pub use errors::{
    DisplayErrorFormatter, ErrorDetail, ErrorEnvelope, ErrorEnvelopeBuilder, ErrorFormatter,
    ErrorReporter, NoopErrorReporter,
};
pub use paths::{
    PathResolver, PathScope, WorkspacePaths, file_name_from_path, is_safe_relative_path,
    normalize_ascii_identifier,
};
pub use sanitizer::{MIN_TRUNCATE_CHARS, redact_secrets, redact_secrets_aggressive, sanitize_value};
pub use telemetry::{NoopTelemetry, TelemetrySink};
