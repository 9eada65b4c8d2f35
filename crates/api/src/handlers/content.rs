//! Handler for the `/content/top5` endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// How many titles of each kind the endpoint returns at most.
const TOP_N: usize = 5;

/// Query parameters for `GET /content/top5`.
///
/// `genre_id` arrives as a query string, so integer-ness is a validation
/// rule rather than a deserialization concern.
#[derive(Debug, Deserialize, Validate)]
pub struct Top5Params {
    #[validate(
        required(message = "Genre ID is required"),
        custom(function = validate_integer, message = "Genre ID must be an integer")
    )]
    pub genre_id: Option<String>,
}

fn validate_integer(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("integer"))
}

/// GET /api/v1/content/top5?genre_id=
///
/// Fetch the highest-rated movies and TV shows in a genre and truncate each
/// list to the first five. Fewer than five upstream results are returned
/// as-is.
pub async fn top5(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<Top5Params>,
) -> AppResult<Json<ApiResponse<Value>>> {
    params.validate().map_err(|errors| AppError::Validation {
        code: "top5:validation_failed",
        errors,
    })?;

    // `validate()` guarantees the field is present and parses.
    let genre_id: i64 = params
        .genre_id
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::Internal("validated genre_id failed to parse".into()))?;

    let mut movies = state.tmdb.discover_movies_by_genre(genre_id).await.map_err(|e| {
        AppError::upstream(
            "top5:fetch_failed",
            "Failed to fetch top 5 movies and TV shows",
            e,
        )
    })?;

    let mut tv_shows = state.tmdb.discover_tv_by_genre(genre_id).await.map_err(|e| {
        AppError::upstream(
            "top5:fetch_failed",
            "Failed to fetch top 5 movies and TV shows",
            e,
        )
    })?;

    movies.truncate(TOP_N);
    tv_shows.truncate(TOP_N);

    Ok(ApiResponse::success(
        "Top 5 movies and TV shows fetched successfully",
        json!({
            "movies": movies,
            "tv_shows": tv_shows,
        }),
    ))
}
