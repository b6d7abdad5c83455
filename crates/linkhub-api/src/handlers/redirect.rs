//! Public short code resolution.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use linkhub_core::config::ResolveMode;
use linkhub_core::error::AppError;

use crate::dto::response::{ApiResponse, ResolveResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /r/{code}
///
/// Answers with `303 See Other` or with the URL in a JSON payload,
/// depending on `links.resolve_mode`.
pub async fn resolve(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Response> {
    let link = state.link_service.resolve(&code).await?;

    match state.config.links.resolve_mode {
        ResolveMode::Redirect => {
            // Stored URLs are not validated, so they may not fit in a header.
            let location = HeaderValue::from_str(&link.original).map_err(|_| {
                AppError::validation("Stored URL cannot be used as a redirect target")
            })?;
            Ok((StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response())
        }
        ResolveMode::Payload => Ok(Json(ApiResponse::ok(
            "Redirecting...",
            ResolveResponse {
                original_url: link.original,
            },
        ))
        .into_response()),
    }
}
