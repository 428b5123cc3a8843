//! Convenience re-exports for common catalog-store usage

pub use crate::categories::{CategoryRecords, CategoryStore};
pub use crate::errors::CatalogStoreError;
pub use crate::items::{ItemRecords, ItemStore};
pub use crate::models::{Category, Item, ItemDraft, ItemFeedEntry, User, UserProfile};
pub use crate::schema;
pub use crate::users::{UserRecords, UserStore};
pub use crate::DbPool;

// Common external dependencies
pub use async_trait::async_trait;
pub use sqlx;
