//! Access logging keyed by route template.
//!
//! Raw paths carry link ids and short codes, so only the matched route
//! (`/url/{id}`, `/r/{code}`) is recorded.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Label used when no route matched the request.
const UNMATCHED_ROUTE: &str = "<unmatched>";

/// Returns the route template the request was dispatched to.
pub fn route_template(request: &Request) -> &str {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or(UNMATCHED_ROUTE)
}

/// Logs method, route, status and latency for every request.
///
/// Server errors are logged at `warn`, everything else at `info`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = route_template(&request).to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %route, status, latency_ms, "Request failed");
    } else {
        info!(%method, %route, status, latency_ms, "Request handled");
    }

    response
}
