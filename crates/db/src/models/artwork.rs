//! Artwork entity model and DTOs.
//!
//! The `museum_id` column is the sole source of truth for the
//! museum ↔ artwork association; an artwork belongs to at most one museum.

use musea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artworks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artwork {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub description: String,
    /// Artwork category, e.g. "Painting" or "Sculpture". Exposed as
    /// `type` in JSON.
    #[serde(rename = "type")]
    pub kind: String,
    pub main_image: String,
    pub museum_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artwork.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtwork {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub year: i32,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub kind: String,
    #[validate(url(message = "main_image must be a valid URL"))]
    pub main_image: String,
}

/// DTO for updating an existing artwork. Omitted fields keep their
/// persisted values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArtwork {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub year: Option<i32>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub kind: Option<String>,
    #[validate(url(message = "main_image must be a valid URL"))]
    pub main_image: Option<String>,
}

/// DTO for wholesale replacement of a museum's artwork collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceArtworks {
    pub artwork_ids: Vec<DbId>,
}
