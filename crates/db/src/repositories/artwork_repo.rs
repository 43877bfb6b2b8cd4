//! Repository for the `artworks` table, including the museum association
//! mutations.

use sqlx::PgPool;

use musea_core::types::DbId;

use crate::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, year, description, kind, main_image, museum_id, created_at, updated_at";

/// Provides CRUD and association operations for artworks.
pub struct ArtworkRepo;

impl ArtworkRepo {
    /// Insert a new artwork, returning the created row. New artworks
    /// start unassociated.
    pub async fn create(pool: &PgPool, input: &CreateArtwork) -> Result<Artwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO artworks (name, year, description, kind, main_image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(&input.main_image)
            .fetch_one(pool)
            .await
    }

    /// Find an artwork by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE id = $1");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artworks ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks ORDER BY created_at DESC");
        sqlx::query_as::<_, Artwork>(&query).fetch_all(pool).await
    }

    /// List a museum's artwork collection, oldest membership first.
    pub async fn list_by_museum(pool: &PgPool, museum_id: DbId) -> Result<Vec<Artwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artworks WHERE museum_id = $1 ORDER BY id");
        sqlx::query_as::<_, Artwork>(&query)
            .bind(museum_id)
            .fetch_all(pool)
            .await
    }

    /// Update an artwork. Only non-`None` fields in `input` are applied,
    /// merged over the persisted record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtwork,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET
                name = COALESCE($2, name),
                year = COALESCE($3, year),
                description = COALESCE($4, description),
                kind = COALESCE($5, kind),
                main_image = COALESCE($6, main_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(&input.main_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artwork by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Association mutations ------------------------------------------

    /// Attach an artwork to a museum, returning the updated row.
    ///
    /// Idempotent for an artwork already in the collection; an artwork
    /// owned by another museum is moved (single-owner invariant, last
    /// write wins).
    pub async fn attach(
        pool: &PgPool,
        museum_id: DbId,
        artwork_id: DbId,
    ) -> Result<Option<Artwork>, sqlx::Error> {
        let query = format!(
            "UPDATE artworks SET museum_id = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artwork>(&query)
            .bind(museum_id)
            .bind(artwork_id)
            .fetch_optional(pool)
            .await
    }

    /// Detach an artwork from whichever museum owns it. Returns `true`
    /// if a row was updated.
    pub async fn detach(pool: &PgPool, artwork_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE artworks SET museum_id = NULL, updated_at = NOW() WHERE id = $1")
                .bind(artwork_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a museum's entire artwork collection with the given ids.
    ///
    /// Runs detach-all + attach in one transaction so a failure cannot
    /// leave the collection half-replaced. Callers are expected to have
    /// verified that all candidate ids exist.
    pub async fn replace_for_museum(
        pool: &PgPool,
        museum_id: DbId,
        artwork_ids: &[DbId],
    ) -> Result<Vec<Artwork>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE artworks SET museum_id = NULL, updated_at = NOW() WHERE museum_id = $1")
            .bind(museum_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE artworks SET museum_id = $1, updated_at = NOW() WHERE id = ANY($2)",
        )
        .bind(museum_id)
        .bind(artwork_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::list_by_museum(pool, museum_id).await
    }
}
