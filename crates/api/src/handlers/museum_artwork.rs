//! Handlers for the museum ↔ artwork association, mounted at
//! `/museums/{museum_id}/artworks`.
//!
//! Every operation validates the referenced entities before mutating.
//! For add/find/remove the artwork is checked before the museum, so a
//! request with two bad ids always reports the artwork; a valid artwork
//! outside the museum's collection is a precondition failure (412), not
//! a 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;

use musea_core::error::CoreError;
use musea_core::types::DbId;
use musea_db::models::artwork::{Artwork, ReplaceArtworks};
use musea_db::models::museum::{Museum, MuseumWithRelations};
use musea_db::repositories::{ArtworkRepo, MuseumRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fetch an artwork or fail with 404.
async fn require_artwork(pool: &PgPool, id: DbId) -> AppResult<Artwork> {
    ArtworkRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))
}

/// Fetch a museum or fail with 404.
async fn require_museum(pool: &PgPool, id: DbId) -> AppResult<Museum> {
    MuseumRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Museum",
            id,
        }))
}

/// The loaded museum, refetched with its (now mutated) collections.
async fn museum_with_relations(pool: &PgPool, id: DbId) -> AppResult<MuseumWithRelations> {
    MuseumRepo::find_by_id_with_relations(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Museum",
            id,
        }))
}

/// POST /api/v1/museums/{museum_id}/artworks/{artwork_id}
///
/// Add an artwork to the museum's collection. No duplicate check: adding
/// a current member is an idempotent update.
pub async fn add(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MuseumWithRelations>> {
    let artwork = require_artwork(&state.pool, artwork_id).await?;
    require_museum(&state.pool, museum_id).await?;

    ArtworkRepo::attach(&state.pool, museum_id, artwork.id).await?;
    Ok(Json(museum_with_relations(&state.pool, museum_id).await?))
}

/// GET /api/v1/museums/{museum_id}/artworks/{artwork_id}
///
/// Return the artwork only if it is associated to the museum.
pub async fn find_associated(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Artwork>> {
    let artwork = require_artwork(&state.pool, artwork_id).await?;
    require_museum(&state.pool, museum_id).await?;

    if artwork.museum_id != Some(museum_id) {
        return Err(AppError::Core(CoreError::PreconditionFailed(format!(
            "Artwork with id {artwork_id} is not associated to museum with id {museum_id}"
        ))));
    }
    Ok(Json(artwork))
}

/// GET /api/v1/museums/{museum_id}/artworks
///
/// Return the museum's artwork collection as-is.
pub async fn list_associated(
    State(state): State<AppState>,
    Path(museum_id): Path<DbId>,
) -> AppResult<Json<Vec<Artwork>>> {
    require_museum(&state.pool, museum_id).await?;
    let artworks = ArtworkRepo::list_by_museum(&state.pool, museum_id).await?;
    Ok(Json(artworks))
}

/// PUT /api/v1/museums/{museum_id}/artworks
///
/// Replace the museum's entire artwork collection with the candidate
/// list. Every candidate id must exist; prior members are detached.
pub async fn replace_all(
    State(state): State<AppState>,
    Path(museum_id): Path<DbId>,
    Json(input): Json<ReplaceArtworks>,
) -> AppResult<Json<MuseumWithRelations>> {
    require_museum(&state.pool, museum_id).await?;
    for &artwork_id in &input.artwork_ids {
        require_artwork(&state.pool, artwork_id).await?;
    }

    ArtworkRepo::replace_for_museum(&state.pool, museum_id, &input.artwork_ids).await?;
    Ok(Json(museum_with_relations(&state.pool, museum_id).await?))
}

/// DELETE /api/v1/museums/{museum_id}/artworks/{artwork_id}
///
/// Remove an artwork from the museum's collection. The artwork itself is
/// not deleted.
pub async fn remove(
    State(state): State<AppState>,
    Path((museum_id, artwork_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let artwork = require_artwork(&state.pool, artwork_id).await?;
    require_museum(&state.pool, museum_id).await?;

    if artwork.museum_id != Some(museum_id) {
        return Err(AppError::Core(CoreError::PreconditionFailed(format!(
            "Artwork with id {artwork_id} is not associated to museum with id {museum_id}"
        ))));
    }

    ArtworkRepo::detach(&state.pool, artwork_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
