//! Handler for the `/search` endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use cinevault_tmdb::SearchKind;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(
        required(message = "Query string is required"),
        length(min = 1, message = "Query string must not be empty")
    )]
    pub query: Option<String>,
    #[validate(
        required(message = "Type is required"),
        custom(
            function = validate_search_kind,
            message = "Type must be either \"movie\", \"tv\", or \"multi\""
        )
    )]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub page: Option<u32>,
}

fn validate_search_kind(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<SearchKind>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("search_kind"))
}

/// GET /api/v1/search?query=&type=&page=
///
/// Dispatch the query to TMDB's matching search endpoint and return the raw
/// result list.
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<ApiResponse<Vec<Value>>>> {
    params.validate().map_err(|errors| AppError::Validation {
        code: "search:validation_failed",
        errors,
    })?;

    // `validate()` guarantees both fields are present and the kind is valid.
    let query = params.query.unwrap_or_default();
    let kind = params
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse::<SearchKind>()
        .map_err(AppError::Core)?;
    let page = params.page.unwrap_or(1);

    let results = state.tmdb.search(kind, &query, page).await.map_err(|e| {
        AppError::upstream("search:fetch_failed", "Failed to fetch search results", e)
    })?;

    Ok(ApiResponse::success(
        "Search results fetched successfully",
        results,
    ))
}
