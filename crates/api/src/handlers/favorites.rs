//! Handlers for the `/favorites` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::{Validate, ValidationError};

use cinevault_core::types::MediaType;
use cinevault_db::models::favorite::Favorite;
use cinevault_db::repositories::FavoriteRepo;
use cinevault_tmdb::models::tag_with_type;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /favorites` and `DELETE /favorites`.
#[derive(Debug, Deserialize, Validate)]
pub struct FavoriteRequest {
    #[validate(required(message = "Media ID is required"))]
    pub media_id: Option<i64>,
    #[validate(
        required(message = "Media type is required"),
        custom(
            function = validate_media_type,
            message = "Media type must be either \"movie\" or \"tv\""
        )
    )]
    pub media_type: Option<String>,
}

fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<MediaType>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("media_type"))
}

impl FavoriteRequest {
    /// Validate and unpack into typed values.
    fn into_parts(self, code: &'static str) -> Result<(i64, MediaType), AppError> {
        self.validate()
            .map_err(|errors| AppError::Validation { code, errors })?;

        // `validate()` guarantees both fields are present and well-formed.
        let media_id = self.media_id.unwrap_or_default();
        let media_type = self
            .media_type
            .as_deref()
            .unwrap_or_default()
            .parse::<MediaType>()
            .map_err(AppError::Core)?;
        Ok((media_id, media_type))
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/favorites
///
/// For each stored favorite, re-fetch the full title details from TMDB and
/// tag the payload with its `type`. Details are fetched fresh on every call;
/// a single upstream failure fails the whole listing.
pub async fn index(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<ApiResponse<Value>>> {
    let favorite_movies =
        FavoriteRepo::list_by_user(&state.pool, auth_user.user_id, MediaType::Movie).await?;
    let favorite_tv =
        FavoriteRepo::list_by_user(&state.pool, auth_user.user_id, MediaType::Tv).await?;

    let mut movies = Vec::with_capacity(favorite_movies.len());
    for favorite in &favorite_movies {
        let movie = state.tmdb.movie(favorite.tmdb_id).await.map_err(|e| {
            AppError::upstream("favorites:fetch_failed", "Failed to fetch favorites", e)
        })?;
        movies.push(tag_with_type(movie, MediaType::Movie));
    }

    let mut tv_shows = Vec::with_capacity(favorite_tv.len());
    for favorite in &favorite_tv {
        let show = state.tmdb.tv(favorite.tmdb_id).await.map_err(|e| {
            AppError::upstream("favorites:fetch_failed", "Failed to fetch favorites", e)
        })?;
        tv_shows.push(tag_with_type(show, MediaType::Tv));
    }

    Ok(ApiResponse::success(
        "Favorites fetched successfully",
        json!({
            "movies": movies,
            "tv_shows": tv_shows,
        }),
    ))
}

/// POST /api/v1/favorites
///
/// Add a title to the authenticated user's favorites. Favoriting the same
/// title twice trips the storage-level unique constraint and returns 409.
pub async fn store(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppJson(input): AppJson<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<Favorite>>> {
    let (media_id, media_type) = input.into_parts("favorites:validation_failed")?;

    let favorite =
        FavoriteRepo::create(&state.pool, auth_user.user_id, media_id, media_type).await?;

    Ok(ApiResponse::success("Favorite added successfully", favorite))
}

/// DELETE /api/v1/favorites
///
/// Remove a favorite by (user, title, type). Removing a favorite that does
/// not exist -- including a second remove of the same target -- is a 404.
pub async fn destroy(
    State(state): State<AppState>,
    auth_user: AuthUser,
    AppJson(input): AppJson<FavoriteRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let (media_id, media_type) = input.into_parts("favorites:validation_failed")?;

    let favorite = FavoriteRepo::find_one(&state.pool, auth_user.user_id, media_id, media_type)
        .await?
        .ok_or(AppError::NotFound {
            code: "favorites:not_found",
            message: "Favorite not found",
        })?;

    // The row can vanish between find and delete; report that as the same
    // not-found the caller would have seen a moment later.
    let deleted = FavoriteRepo::delete(&state.pool, favorite.id).await?;
    if !deleted {
        return Err(AppError::NotFound {
            code: "favorites:not_found",
            message: "Favorite not found",
        });
    }

    Ok(ApiResponse::message("Favorite removed successfully"))
}
