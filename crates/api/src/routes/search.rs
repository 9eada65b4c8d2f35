//! Route definitions for the `/search` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET /search  -> search (movie, tv or multi)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}
