//! Route definitions for the `/favorites` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET    /favorites  -> index (list the caller's favorites)
/// POST   /favorites  -> store
/// DELETE /favorites  -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/favorites",
        get(favorites::index)
            .post(favorites::store)
            .delete(favorites::destroy),
    )
}
