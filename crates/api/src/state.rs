use std::sync::Arc;

use cinevault_tmdb::TmdbClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinevault_db::DbPool,
    /// Server configuration (accessed by the auth extractor and handlers).
    pub config: Arc<ServerConfig>,
    /// TMDB upstream client.
    pub tmdb: TmdbClient,
}

impl AppState {
    /// Build application state from a pool and configuration, constructing
    /// the TMDB client from the configured token and base URL.
    pub fn new(pool: cinevault_db::DbPool, config: ServerConfig) -> Self {
        let tmdb = TmdbClient::with_base_url(config.tmdb.token.clone(), config.tmdb.base_url.clone());
        Self {
            pool,
            config: Arc::new(config),
            tmdb,
        }
    }
}
