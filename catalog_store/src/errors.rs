use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CatalogStoreError {
    /// Database failure with table and operation context
    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        Self::DatabaseError(format!("{table}.{operation}: {source}"))
    }

    /// A record that was expected to exist
    pub fn not_found(table: &str, key: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{table} record {key}"))
    }
}

impl From<serde_json::Error> for CatalogStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
