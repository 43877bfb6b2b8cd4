//! Exhibition entity model and DTOs.

use musea_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `exhibitions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exhibition {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub museum_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new exhibition.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExhibition {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub museum_id: Option<DbId>,
}

/// DTO for updating an existing exhibition. Omitted fields keep their
/// persisted values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExhibition {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
}
