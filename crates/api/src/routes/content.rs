//! Route definitions for the `/content` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET /top5  -> top5 (highest rated titles in a genre)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/top5", get(content::top5))
}
