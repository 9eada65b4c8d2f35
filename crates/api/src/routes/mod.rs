pub mod auth;
pub mod content;
pub mod favorites;
pub mod health;
pub mod movies;
pub mod search;
pub mod trailers;
pub mod tv;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login              login (public)
/// /auth/register           register (public)
/// /auth/user               current user (requires auth)
///
/// /                        popular + now-playing movies with genres
/// /movies/{id}             movie detail
///
/// /tv                      popular + top-rated TV shows with genres
/// /tv/{id}                 TV show detail
///
/// /content/top5            top 5 titles by genre
///
/// /favorites               list (GET), add (POST), remove (DELETE)
///
/// /search                  search movies / tv / multi
///
/// /{type}/{id}/trailer     trailer links (type ∈ movie, tv)
/// ```
///
/// Everything except `/auth/login` and `/auth/register` requires a bearer
/// token, enforced per-handler via the `AuthUser` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(movies::router())
        .merge(tv::router())
        .nest("/content", content::router())
        .merge(favorites::router())
        .merge(search::router())
        .merge(trailers::router())
}
