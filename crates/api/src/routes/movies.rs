//! Route definitions for the movie catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET /             -> index (popular + now playing + genres)
/// GET /movies/{id}  -> show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::index))
        .route("/movies/{id}", get(movies::show))
}
