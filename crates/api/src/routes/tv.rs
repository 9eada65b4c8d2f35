//! Route definitions for the TV show catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::tv;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET /tv       -> index (popular + top rated + genres)
/// GET /tv/{id}  -> show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tv", get(tv::index))
        .route("/tv/{id}", get(tv::show))
}
