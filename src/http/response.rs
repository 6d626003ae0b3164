//! Responses produced by the dispatcher itself.
//!
//! Matched requests return whatever their handler produces; these cover the
//! unmatched cases only.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// `404 Not Found` for a path with no route.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// `301 Moved Permanently` pointing at `location`.
pub fn moved_permanently(location: String) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}
