//! Repository for the `favorites` table.
//!
//! Every operation is a single storage round trip; there is no transaction
//! spanning multiple favorites. Uniqueness over `(user_id, tmdb_id,
//! media_type)` is guaranteed by the `uq_favorites_user_media` constraint, so
//! a duplicate insert surfaces as a database error rather than a silent
//! second row.

use sqlx::PgPool;

use cinevault_core::types::{DbId, MediaType};

use crate::models::favorite::Favorite;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, tmdb_id, media_type, created_at";

/// Provides create/list/find/delete operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite for the given user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        tmdb_id: i64,
        media_type: MediaType,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, tmdb_id, media_type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(tmdb_id)
            .bind(media_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// List one user's favorites of a given media type.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        media_type: MediaType,
    ) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites
             WHERE user_id = $1 AND media_type = $2
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(media_type.as_str())
            .fetch_all(pool)
            .await
    }

    /// Find a single favorite by its (user, title, type) key.
    pub async fn find_one(
        pool: &PgPool,
        user_id: DbId,
        tmdb_id: i64,
        media_type: MediaType,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorites
             WHERE user_id = $1 AND tmdb_id = $2 AND media_type = $3"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(tmdb_id)
            .bind(media_type.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a favorite by primary key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
