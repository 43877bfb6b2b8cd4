//! Repository for the `exhibitions` table.

use sqlx::PgPool;

use musea_core::types::DbId;

use crate::models::exhibition::{CreateExhibition, Exhibition, UpdateExhibition};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, museum_id, created_at, updated_at";

/// Provides CRUD operations for exhibitions.
pub struct ExhibitionRepo;

impl ExhibitionRepo {
    /// Insert a new exhibition, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExhibition) -> Result<Exhibition, sqlx::Error> {
        let query = format!(
            "INSERT INTO exhibitions (name, description, museum_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.museum_id)
            .fetch_one(pool)
            .await
    }

    /// Find an exhibition by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions WHERE id = $1");
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all exhibitions ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions ORDER BY created_at DESC");
        sqlx::query_as::<_, Exhibition>(&query).fetch_all(pool).await
    }

    /// List a museum's exhibitions, oldest first.
    pub async fn list_by_museum(
        pool: &PgPool,
        museum_id: DbId,
    ) -> Result<Vec<Exhibition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exhibitions WHERE museum_id = $1 ORDER BY id");
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(museum_id)
            .fetch_all(pool)
            .await
    }

    /// Update an exhibition. Only non-`None` fields in `input` are
    /// applied, merged over the persisted record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExhibition,
    ) -> Result<Option<Exhibition>, sqlx::Error> {
        let query = format!(
            "UPDATE exhibitions SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exhibition>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exhibition by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exhibitions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
