//! Convenience re-exports for common Curio usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Curio ecosystem, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use curio::prelude::*;
//!
//! // Now you have access to all the common Curio types and traits
//! ```

// Core Curio components
pub use crate::catalog::{CatalogService, LATEST_ITEMS};
pub use crate::core::Curio;
pub use crate::directory::UserDirectory;
pub use crate::errors::CurioError;
pub use crate::migration;
pub use crate::session::Session;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig, DirectoryConfig};

// Re-export commonly used catalog-store types for convenience
pub use catalog_store::prelude::*;

// Re-export the cache layer
pub use memory_cache::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use serde_json;
pub use sqlx;
pub use tokio;

// Commonly used external types
pub use chrono::{DateTime, Utc};
pub use sqlx::{FromRow, PgPool, Row};
