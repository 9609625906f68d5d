use crate::types::DbId;

/// Domain-level error taxonomy shared by every operation.
///
/// `NotFound` covers both a genuinely unknown id and an ownership mismatch:
/// callers must not be able to distinguish "does not exist" from "exists but
/// belongs to someone else".
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
