//! Handler for the `/{type}/{id}/trailer` endpoint.

use axum::extract::{Path, State};
use axum::Json;

use cinevault_core::types::MediaType;
use cinevault_tmdb::models::{trailer_links, TrailerLink};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/{type}/{id}/trailer where type ∈ {movie, tv}.
///
/// Fetch the title's video list, keep only entries typed `Trailer`, and map
/// each to a YouTube watch link. No trailers after filtering is a 404, not
/// an empty success.
pub async fn index(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((media_type, id)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<Vec<TrailerLink>>>> {
    // Both segments are taken as strings so failures stay in the JSON error
    // envelope. A path that names an unknown type or a non-integer id does
    // not denote a title, so either way it is a 404.
    let media_type: MediaType = media_type.parse().map_err(|_| AppError::NotFound {
        code: "general:not-found",
        message: "Not found",
    })?;
    let id: i64 = id.parse().map_err(|_| AppError::NotFound {
        code: "general:not-found",
        message: "Not found",
    })?;

    let payload = state.tmdb.videos(media_type, id).await.map_err(|e| {
        AppError::upstream("trailers:fetch_failed", "Failed to fetch trailer links", e)
    })?;

    let links = trailer_links(payload).map_err(|e| {
        AppError::upstream("trailers:fetch_failed", "Failed to fetch trailer links", e)
    })?;

    if links.is_empty() {
        return Err(AppError::NotFound {
            code: "trailers:not_found",
            message: "No trailers found for this movie or TV show",
        });
    }

    Ok(ApiResponse::success(
        "Trailer links fetched successfully",
        links,
    ))
}
