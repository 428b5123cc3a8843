//! Item store

use crate::errors::CatalogStoreError;
use crate::models::{Item, ItemDraft};
use crate::DbPool;
use async_trait::async_trait;

const ITEM_COLUMNS: &str = "id, name, description, created, updated, category_id, user_id";

/// Durable item-record operations consumed by the catalog service
#[async_trait]
pub trait ItemRecords: Send + Sync {
    /// Insert a new item owned by `user_id`; `created` is stamped by the
    /// database
    async fn create(&self, draft: ItemDraft, user_id: i32) -> Result<Item, CatalogStoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Item>, CatalogStoreError>;

    /// Rewrite an item from a draft, stamping `updated`. A missing id is
    /// a `NotFound` error.
    async fn update(&self, id: i32, draft: ItemDraft) -> Result<Item, CatalogStoreError>;

    /// Delete an item; reports whether a row actually went away
    async fn delete(&self, id: i32) -> Result<bool, CatalogStoreError>;

    /// The newest `limit` items across all categories
    async fn latest(&self, limit: i64) -> Result<Vec<Item>, CatalogStoreError>;

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Item>, CatalogStoreError>;

    /// Item names are unique within a category by convention; the lookup
    /// takes the first match
    async fn find_in_category(
        &self,
        name: &str,
        category_id: i32,
    ) -> Result<Option<Item>, CatalogStoreError>;

    /// Every item, newest first (the feed order)
    async fn list_all_newest_first(&self) -> Result<Vec<Item>, CatalogStoreError>;

    async fn count(&self) -> Result<i64, CatalogStoreError>;
}

/// PostgreSQL-backed item store
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: DbPool,
}

impl ItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRecords for ItemStore {
    async fn create(&self, draft: ItemDraft, user_id: i32) -> Result<Item, CatalogStoreError> {
        draft.validate()?;

        let sql = format!(
            "INSERT INTO item (name, description, category_id, user_id)
             VALUES ($1, $2, $3, $4) RETURNING {ITEM_COLUMNS}"
        );
        let item: Item = sqlx::query_as(&sql)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.category_id)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "create", e))?;

        tracing::debug!(item_id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Item>, CatalogStoreError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM item WHERE id = $1");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "get_by_id", e))
    }

    async fn update(&self, id: i32, draft: ItemDraft) -> Result<Item, CatalogStoreError> {
        draft.validate()?;

        let sql = format!(
            "UPDATE item SET name = $1, description = $2, category_id = $3, updated = NOW()
             WHERE id = $4 RETURNING {ITEM_COLUMNS}"
        );
        let updated: Option<Item> = sqlx::query_as(&sql)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.category_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "update", e))?;

        let item = updated.ok_or_else(|| CatalogStoreError::not_found("item", id))?;
        tracing::debug!(item_id = item.id, "item updated");
        Ok(item)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogStoreError> {
        let result = sqlx::query("DELETE FROM item WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "delete", e))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(item_id = id, "item deleted");
        }
        Ok(deleted)
    }

    async fn latest(&self, limit: i64) -> Result<Vec<Item>, CatalogStoreError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM item ORDER BY created DESC LIMIT $1");
        sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "latest", e))
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Item>, CatalogStoreError> {
        let sql =
            format!("SELECT {ITEM_COLUMNS} FROM item WHERE category_id = $1 ORDER BY created DESC");
        sqlx::query_as(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "list_by_category", e))
    }

    async fn find_in_category(
        &self,
        name: &str,
        category_id: i32,
    ) -> Result<Option<Item>, CatalogStoreError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM item WHERE name = $1 AND category_id = $2 LIMIT 1"
        );
        sqlx::query_as(&sql)
            .bind(name)
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "find_in_category", e))
    }

    async fn list_all_newest_first(&self) -> Result<Vec<Item>, CatalogStoreError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM item ORDER BY created DESC");
        sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "list_all", e))
    }

    async fn count(&self) -> Result<i64, CatalogStoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM item")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("item", "count", e))?;
        Ok(total)
    }
}
