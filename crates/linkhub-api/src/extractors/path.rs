//! Typed path parameter helpers.

use linkhub_core::error::AppError;
use linkhub_core::types::LinkId;

/// Parses a link ID from a path segment.
pub fn parse_link_id(s: &str) -> Result<LinkId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid URL id: {s}")))
}
