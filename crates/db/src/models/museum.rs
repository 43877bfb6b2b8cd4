//! Museum entity model and DTOs.

use musea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::artwork::Artwork;
use crate::models::exhibition::Exhibition;

/// A row from the `museums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Museum {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A museum together with its eagerly loaded collections.
#[derive(Debug, Clone, Serialize)]
pub struct MuseumWithRelations {
    #[serde(flatten)]
    pub museum: Museum,
    pub artworks: Vec<Artwork>,
    pub exhibitions: Vec<Exhibition>,
}

/// DTO for creating a new museum.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMuseum {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(url(message = "image must be a valid URL"))]
    pub image: String,
}

/// DTO for updating an existing museum. Omitted fields keep their
/// persisted values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMuseum {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: Option<String>,
    #[validate(url(message = "image must be a valid URL"))]
    pub image: Option<String>,
}
