//! Shared helpers for HTTP-level integration tests.
//!
//! Provides a test `ServerConfig` (fixed JWT secret, overridable TMDB base
//! URL), app construction through the same [`build_app_router`] the binary
//! uses, `oneshot` request helpers, and a stub TMDB server serving canned
//! payloads on an ephemeral port.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use cinevault_api::auth::jwt::{generate_access_token, JwtConfig};
use cinevault_api::auth::password::hash_password;
use cinevault_api::config::{ServerConfig, TmdbSettings};
use cinevault_api::router::build_app_router;
use cinevault_api::state::AppState;
use cinevault_db::models::user::{CreateUser, User};
use cinevault_db::repositories::UserRepo;

/// JWT configuration with a fixed secret so tests can mint tokens directly.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build a test `ServerConfig` with safe defaults and the given TMDB base URL.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(tmdb_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        tmdb: TmdbSettings {
            token: "test-tmdb-token".to_string(),
            base_url: tmdb_base_url.to_string(),
        },
    }
}

/// Build the full application router against an unreachable TMDB base URL.
///
/// Suitable for everything that never calls upstream; TMDB-backed endpoints
/// will fail with an upstream error (which some tests rely on).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_tmdb(pool, "http://127.0.0.1:1")
}

/// Build the full application router pointing the TMDB client at `base_url`
/// (normally a [`spawn_stub_tmdb`] address).
///
/// This goes through the same `build_app_router` as `main.rs`, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app_with_tmdb(pool: PgPool, base_url: &str) -> Router {
    let config = test_config(base_url);
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// `GET` a path without authentication.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// `GET` a path with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// `POST` a JSON body without authentication.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// `POST` a JSON body with a bearer token.
pub async fn post_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// `DELETE` with a JSON body and a bearer token.
pub async fn delete_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
pub async fn seed_user(pool: &PgPool, username: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role: "user".to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint an access token for a seeded user, signed with the test JWT secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_jwt_config())
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Stub TMDB server
// ---------------------------------------------------------------------------

/// TV show id whose `/videos` list contains no trailers.
pub const TRAILERLESS_ID: i64 = 999;

fn result_list(count: usize, title_key: &'static str, prefix: &'static str) -> Value {
    Value::Array(
        (1..=count)
            .map(|i| {
                json!({
                    "id": i,
                    title_key: format!("{prefix} {i}"),
                    "vote_average": 8.0,
                })
            })
            .collect(),
    )
}

async fn stub_movie_list() -> Json<Value> {
    Json(json!({ "page": 1, "results": result_list(12, "title", "Movie") }))
}

async fn stub_tv_list() -> Json<Value> {
    Json(json!({ "page": 1, "results": result_list(12, "name", "Show") }))
}

async fn stub_genres() -> Json<Value> {
    Json(json!({
        "genres": [
            { "id": 28, "name": "Action" },
            { "id": 18, "name": "Drama" },
        ]
    }))
}

async fn stub_movie_detail(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({
        "id": id,
        "title": format!("Movie {id}"),
        "overview": "A stub movie.",
        "release_date": "1999-10-15",
        "runtime": 139,
        "poster_path": "/poster.jpg",
        "backdrop_path": null,
        "vote_average": 8.4,
        "genres": [{ "id": 18, "name": "Drama" }],
        "credits": { "cast": [] },
        "videos": { "results": [] },
        "images": { "posters": [] }
    }))
}

async fn stub_tv_detail(Path(id): Path<i64>) -> Json<Value> {
    Json(json!({
        "id": id,
        "name": format!("Show {id}"),
        "original_name": format!("Show {id}"),
        "overview": "A stub show.",
        "poster_path": null,
        "backdrop_path": null,
        "vote_average": 8.5,
        "vote_count": 24000,
        "genres": [{ "id": 18, "name": "Drama" }],
        "first_air_date": "2011-04-17",
        "last_air_date": "2019-05-19",
        "number_of_seasons": 8,
        "number_of_episodes": 73,
        "in_production": false,
        "status": "Ended"
    }))
}

async fn stub_videos(Path(id): Path<i64>) -> Json<Value> {
    if id == TRAILERLESS_ID {
        return Json(json!({ "id": id, "results": [] }));
    }
    Json(json!({
        "id": id,
        "results": [
            {
                "name": "Official Trailer",
                "key": "SUXWAEX2jlg",
                "type": "Trailer",
                "official": true,
                "published_at": "2015-02-26T03:32:59.000Z"
            },
            {
                "name": "Behind the Scenes",
                "key": "abc123",
                "type": "Featurette",
                "official": false,
                "published_at": "2016-01-01T00:00:00.000Z"
            }
        ]
    }))
}

async fn stub_search() -> Json<Value> {
    Json(json!({ "page": 1, "results": result_list(3, "title", "Result") }))
}

async fn stub_discover_movies() -> Json<Value> {
    Json(json!({ "page": 1, "results": result_list(8, "title", "Discovered Movie") }))
}

async fn stub_discover_tv() -> Json<Value> {
    Json(json!({ "page": 1, "results": result_list(3, "name", "Discovered Show") }))
}

/// Spawn a stub TMDB server on an ephemeral port and return its base URL.
///
/// Serves fixed payloads shaped like the real API: list endpoints return 12
/// results, discover returns 8 movies and 3 shows, and `/videos` for
/// [`TRAILERLESS_ID`] contains no trailer entries.
pub async fn spawn_stub_tmdb() -> String {
    let app = Router::new()
        .route("/movie/popular", axum::routing::get(stub_movie_list))
        .route("/movie/now_playing", axum::routing::get(stub_movie_list))
        .route("/movie/{id}", axum::routing::get(stub_movie_detail))
        .route("/movie/{id}/videos", axum::routing::get(stub_videos))
        .route("/tv/popular", axum::routing::get(stub_tv_list))
        .route("/tv/top_rated", axum::routing::get(stub_tv_list))
        .route("/tv/{id}", axum::routing::get(stub_tv_detail))
        .route("/tv/{id}/videos", axum::routing::get(stub_videos))
        .route("/genre/movie/list", axum::routing::get(stub_genres))
        .route("/genre/tv/list", axum::routing::get(stub_genres))
        .route("/search/movie", axum::routing::get(stub_search))
        .route("/search/tv", axum::routing::get(stub_search))
        .route("/search/multi", axum::routing::get(stub_search))
        .route("/discover/movie", axum::routing::get(stub_discover_movies))
        .route("/discover/tv", axum::routing::get(stub_discover_tv));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    format!("http://{addr}")
}
