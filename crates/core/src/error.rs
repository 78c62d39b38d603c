use serde::Serialize;

use crate::types::DbId;

/// A single field-level business-rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Every rule violation found for a save, in evaluation order.
    #[error("Validation failed: {}", join_messages(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failed_lists_every_field() {
        let err = CoreError::ValidationFailed(vec![
            FieldError::new("data_review", "first"),
            FieldError::new("qc_user", "second"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: data_review: first; qc_user: second"
        );
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Run",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Run with id 7");
    }
}
