//! Route definitions for trailer lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::trailers;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET /{type}/{id}/trailer  -> index (type is movie or tv)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{media_type}/{id}/trailer", get(trailers::index))
}
