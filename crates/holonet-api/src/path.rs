//! Integer path segments.
//!
//! Ids are unsigned decimal digits only. Anything else (`abc`, `+1`, `-1`)
//! does not name a route, so it answers a JSON 404 rather than axum's
//! plain-text path rejection.

use crate::error::ApiError;

/// Parse a path segment made only of ASCII digits.
pub fn parse_id(segment: &str) -> Result<i64, ApiError> {
  if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
    return Err(no_route(segment));
  }
  segment.parse().map_err(|_| no_route(segment))
}

/// Parse `"<prefix><id>"`, e.g. `users12` with prefix `users`.
pub fn owner_id(segment: &str, prefix: &str) -> Result<i64, ApiError> {
  segment
    .strip_prefix(prefix)
    .ok_or_else(|| no_route(segment))
    .and_then(parse_id)
    .map_err(|_| no_route(segment))
}

fn no_route(segment: &str) -> ApiError { ApiError::NotFound(format!("no route for /{segment}")) }
