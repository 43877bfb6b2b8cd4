//! Repository for the `museums` table.

use sqlx::PgPool;

use musea_core::types::DbId;

use crate::models::museum::{CreateMuseum, Museum, MuseumWithRelations, UpdateMuseum};
use crate::repositories::{ArtworkRepo, ExhibitionRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, address, city, image, created_at, updated_at";

/// Provides CRUD operations for museums.
pub struct MuseumRepo;

impl MuseumRepo {
    /// Insert a new museum, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMuseum) -> Result<Museum, sqlx::Error> {
        let query = format!(
            "INSERT INTO museums (name, description, address, city, image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a museum by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums WHERE id = $1");
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all museums ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Museum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM museums ORDER BY created_at DESC");
        sqlx::query_as::<_, Museum>(&query).fetch_all(pool).await
    }

    /// Find a museum by ID with its artwork and exhibition collections
    /// eagerly loaded. Returns `None` if no such museum exists.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MuseumWithRelations>, sqlx::Error> {
        let Some(museum) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let artworks = ArtworkRepo::list_by_museum(pool, id).await?;
        let exhibitions = ExhibitionRepo::list_by_museum(pool, id).await?;
        Ok(Some(MuseumWithRelations {
            museum,
            artworks,
            exhibitions,
        }))
    }

    /// List all museums with their collections eagerly loaded.
    pub async fn list_with_relations(
        pool: &PgPool,
    ) -> Result<Vec<MuseumWithRelations>, sqlx::Error> {
        let museums = Self::list(pool).await?;
        let mut out = Vec::with_capacity(museums.len());
        for museum in museums {
            let artworks = ArtworkRepo::list_by_museum(pool, museum.id).await?;
            let exhibitions = ExhibitionRepo::list_by_museum(pool, museum.id).await?;
            out.push(MuseumWithRelations {
                museum,
                artworks,
                exhibitions,
            });
        }
        Ok(out)
    }

    /// Update a museum. Only non-`None` fields in `input` are applied,
    /// merged over the persisted record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMuseum,
    ) -> Result<Option<Museum>, sqlx::Error> {
        let query = format!(
            "UPDATE museums SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                address = COALESCE($4, address),
                city = COALESCE($5, city),
                image = COALESCE($6, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Museum>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a museum by ID. Returns `true` if a row was removed.
    ///
    /// The schema clears `museum_id` on associated artworks and
    /// exhibitions (ON DELETE SET NULL); they are orphaned, not deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM museums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
