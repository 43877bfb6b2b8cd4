//! Handlers for the `/museums` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use musea_core::error::CoreError;
use musea_core::types::DbId;
use musea_db::models::museum::{CreateMuseum, Museum, MuseumWithRelations, UpdateMuseum};
use musea_db::repositories::MuseumRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/museums
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMuseum>,
) -> AppResult<(StatusCode, Json<Museum>)> {
    input.validate()?;
    let museum = MuseumRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(museum)))
}

/// GET /api/v1/museums
///
/// Artwork and exhibition collections are eagerly loaded.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MuseumWithRelations>>> {
    let museums = MuseumRepo::list_with_relations(&state.pool).await?;
    Ok(Json(museums))
}

/// GET /api/v1/museums/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MuseumWithRelations>> {
    let museum = MuseumRepo::find_by_id_with_relations(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Museum",
            id,
        }))?;
    Ok(Json(museum))
}

/// PUT /api/v1/museums/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMuseum>,
) -> AppResult<Json<Museum>> {
    input.validate()?;
    let museum = MuseumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Museum",
            id,
        }))?;
    Ok(Json(museum))
}

/// DELETE /api/v1/museums/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MuseumRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Museum",
            id,
        }))
    }
}
