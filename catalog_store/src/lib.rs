//! Catalog Store - Durable storage layer for Curio
//!
//! This crate provides the PostgreSQL-backed record stores for the three
//! catalog tables (users, categories, items), their models and schema,
//! and the trait seam the user directory consumes.

pub mod categories;
pub mod errors;
pub mod items;
pub mod models;
pub mod prelude;
pub mod schema;
pub mod users;

pub use categories::{CategoryRecords, CategoryStore};
pub use errors::CatalogStoreError;
pub use items::{ItemRecords, ItemStore};
pub use models::{Category, Item, ItemDraft, ItemFeedEntry, User, UserProfile};
pub use users::{UserRecords, UserStore};

use sqlx::PgPool;

pub type DbPool = PgPool;
