//! Short link handlers. All require a session.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::CreateLinkRequest;
use crate::dto::response::{ApiResponse, ShortenedUrlResponse, ShortenedUrlsResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_link_id};
use crate::state::AppState;

/// GET /url
pub async fn list_links(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<ShortenedUrlsResponse>>> {
    let links = state.link_service.list_links(&auth).await?;

    Ok(Json(ApiResponse::ok(
        "Successfully retrieved shortened URLs!",
        ShortenedUrlsResponse {
            shortened_urls: links.into_iter().map(Into::into).collect(),
        },
    )))
}

/// POST /url
pub async fn create_link(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateLinkRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ShortenedUrlResponse>>)> {
    let link = state
        .link_service
        .create_link(&auth, &req.original_url)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Successfully shortened URL!",
            ShortenedUrlResponse {
                shortened_url: link.into(),
            },
        )),
    ))
}

/// DELETE /url/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ShortenedUrlResponse>>> {
    let id = parse_link_id(&id)?;
    let link = state.link_service.delete_link(&auth, id).await?;

    Ok(Json(ApiResponse::ok(
        "Successfully deleted URL!",
        ShortenedUrlResponse {
            shortened_url: link.into(),
        },
    )))
}
