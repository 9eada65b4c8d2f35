//! Handlers for the TV show catalog endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use cinevault_tmdb::models::TvDetails;

use crate::error::{field_error, AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/tv
///
/// Fetch popular and top-rated TV shows (each sliced to `size`) plus the TV
/// genre list.
pub async fn index(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let page = params.page();
    let size = params.size();

    let popular = state
        .tmdb
        .popular_tv(page)
        .await
        .map_err(|e| AppError::upstream("tvshows:fetch_failed", "Failed to fetch TV shows", e))?;

    let top_rated = state
        .tmdb
        .top_rated_tv(page)
        .await
        .map_err(|e| AppError::upstream("tvshows:fetch_failed", "Failed to fetch TV shows", e))?;

    let genres = state
        .tmdb
        .tv_genres()
        .await
        .map_err(|e| AppError::upstream("tvshows:fetch_failed", "Failed to fetch TV shows", e))?;

    let popular: Vec<Value> = popular.into_iter().take(size).collect();
    let top_rated: Vec<Value> = top_rated.into_iter().take(size).collect();
    let total = popular.len() + top_rated.len();

    Ok(ApiResponse::paginated(
        "TV shows fetched successfully",
        json!({
            "popular": popular,
            "topRated": top_rated,
            "genres": genres,
        }),
        page,
        size,
        total,
    ))
}

/// GET /api/v1/tv/{id}
///
/// Fetch a single TV show and project it down to the detail shape.
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<TvDetails>>> {
    let id: i64 = id.parse().map_err(|_| AppError::Validation {
        code: "validation:failed",
        errors: field_error(
            "id",
            "integer",
            "The TV show ID is required and must be an integer",
        ),
    })?;

    let payload = state
        .tmdb
        .tv_details(id)
        .await
        .map_err(|e| AppError::upstream("tvshow:fetch_failed", "Failed to fetch TV show", e))?;

    let show = TvDetails::from_payload(payload)
        .map_err(|e| AppError::upstream("tvshow:fetch_failed", "Failed to fetch TV show", e))?;

    Ok(ApiResponse::success("TV show fetched successfully", show))
}
