use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Both referenced entities exist, but the claimed relation between
    /// them does not hold (e.g. an artwork that belongs to no museum, or
    /// to a different one).
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Museum",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Museum with id 7");
    }

    #[test]
    fn precondition_failed_carries_message() {
        let err = CoreError::PreconditionFailed("not associated".into());
        assert_eq!(err.to_string(), "Precondition failed: not associated");
    }
}
