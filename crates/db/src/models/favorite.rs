//! Favorite entity model.

use serde::Serialize;
use sqlx::FromRow;

use cinevault_core::types::{DbId, Timestamp};

/// A row from the `favorites` table: one user's bookmark of one TMDB title.
///
/// `media_type` is stored as lowercase text (`"movie"` / `"tv"`); rows are
/// created and deleted, never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    /// The upstream provider's identifier for the title.
    pub tmdb_id: i64,
    pub media_type: String,
    pub created_at: Timestamp,
}
