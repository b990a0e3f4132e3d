use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Convenience constructor for a missing person.
    pub fn person_not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Person",
            id: reference.into(),
        }
    }

    /// Returns true if this error reports an absent record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
