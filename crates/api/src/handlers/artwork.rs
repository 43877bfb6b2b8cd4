//! Handlers for the `/artworks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use musea_core::error::CoreError;
use musea_core::types::DbId;
use musea_db::models::artwork::{Artwork, CreateArtwork, UpdateArtwork};
use musea_db::repositories::ArtworkRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/artworks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtwork>,
) -> AppResult<(StatusCode, Json<Artwork>)> {
    input.validate()?;
    let artwork = ArtworkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
}

/// GET /api/v1/artworks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artwork>>> {
    let artworks = ArtworkRepo::list(&state.pool).await?;
    Ok(Json(artworks))
}

/// GET /api/v1/artworks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artwork>> {
    let artwork = ArtworkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// PUT /api/v1/artworks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtwork>,
) -> AppResult<Json<Artwork>> {
    input.validate()?;
    let artwork = ArtworkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// DELETE /api/v1/artworks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ArtworkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artwork",
            id,
        }))
    }
}
