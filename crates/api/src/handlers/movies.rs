//! Handlers for the movie catalog endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use cinevault_tmdb::models::MovieDetails;

use crate::error::{field_error, AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/
///
/// Fetch popular and now-playing movies (each sliced to `size`) plus the
/// movie genre list. The three upstream calls run sequentially; any failure
/// fails the whole request.
pub async fn index(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let page = params.page();
    let size = params.size();

    let popular = state
        .tmdb
        .popular_movies(page)
        .await
        .map_err(|e| AppError::upstream("movies:fetch_failed", "Failed to fetch movies", e))?;

    let now_playing = state
        .tmdb
        .now_playing_movies(page)
        .await
        .map_err(|e| AppError::upstream("movies:fetch_failed", "Failed to fetch movies", e))?;

    let genres = state
        .tmdb
        .movie_genres()
        .await
        .map_err(|e| AppError::upstream("movies:fetch_failed", "Failed to fetch movies", e))?;

    let popular: Vec<Value> = popular.into_iter().take(size).collect();
    let now_playing: Vec<Value> = now_playing.into_iter().take(size).collect();
    let total = popular.len() + now_playing.len();

    Ok(ApiResponse::paginated(
        "Movies fetched successfully",
        json!({
            "popular": popular,
            "nowPlaying": now_playing,
            "genres": genres,
        }),
        page,
        size,
        total,
    ))
}

/// GET /api/v1/movies/{id}
///
/// Fetch a single movie (with credits/videos/images appended upstream) and
/// project it down to the detail shape. A non-integer id is a 400 here,
/// unlike the TV endpoint's 422.
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MovieDetails>>> {
    let id: i64 = id.parse().map_err(|_| AppError::BadRequest {
        code: "movie:validation_error",
        errors: field_error("id", "integer", "The movie ID must be an integer"),
    })?;

    let payload = state
        .tmdb
        .movie_details(id)
        .await
        .map_err(|e| AppError::upstream("movie:fetch_failed", "Failed to fetch movie", e))?;

    let movie = MovieDetails::from_payload(payload)
        .map_err(|e| AppError::upstream("movie:fetch_failed", "Failed to fetch movie", e))?;

    Ok(ApiResponse::success("Movie fetched successfully", movie))
}
