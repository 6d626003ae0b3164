//! Request path normalization.
//!
//! # Responsibilities
//! - Percent-decode request paths before lookup
//! - Strip the leading slash into framework-relative form
//! - Compute the trailing-slash candidate for redirects
//!
//! # Design Decisions
//! - Patterns are stored without the leading slash (`""`, `"about/"`)
//! - Only the single leading slash is stripped from request paths
//! - Invalid UTF-8 after decoding is replaced, never rejected

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Percent-decode a raw request path (`/ab%6Fut/` becomes `/about/`).
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Strip the single leading `/` of a request path.
///
/// `/about/` becomes `about/`, `/` becomes the empty string.
pub fn relative_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Returns the path with a trailing slash appended, or `None` if it already ends in one.
pub fn append_slash_candidate(path: &str) -> Option<String> {
    if path.ends_with('/') {
        None
    } else {
        Some(format!("{}/", path))
    }
}
