//! Error types for the Curio crate
//!
//! This module contains all error types that can be returned by Curio
//! operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] catalog_store::CatalogStoreError),

    #[error("No user is signed in")]
    SignedOut,

    #[error("User {user_id} does not own {kind} {id}")]
    NotOwner {
        user_id: i32,
        kind: &'static str,
        id: i32,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}
