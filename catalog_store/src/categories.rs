//! Category store

use crate::errors::CatalogStoreError;
use crate::models::Category;
use crate::DbPool;
use async_trait::async_trait;

/// Durable category-record operations consumed by the catalog service
#[async_trait]
pub trait CategoryRecords: Send + Sync {
    /// Insert a new category owned by `user_id`
    async fn create(&self, name: &str, user_id: i32) -> Result<Category, CatalogStoreError>;

    /// All categories in name order
    async fn list_all(&self) -> Result<Vec<Category>, CatalogStoreError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, CatalogStoreError>;

    /// Category names are the browse keys; lookups by name take the
    /// first match
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CatalogStoreError>;

    async fn count(&self) -> Result<i64, CatalogStoreError>;
}

/// PostgreSQL-backed category store
#[derive(Debug, Clone)]
pub struct CategoryStore {
    pool: DbPool,
}

impl CategoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRecords for CategoryStore {
    async fn create(&self, name: &str, user_id: i32) -> Result<Category, CatalogStoreError> {
        if name.trim().is_empty() {
            return Err(CatalogStoreError::ValidationError(
                "category name cannot be empty".to_string(),
            ));
        }

        let category: Category = sqlx::query_as(
            "INSERT INTO category (name, user_id) VALUES ($1, $2)
             RETURNING id, name, user_id",
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogStoreError::database_operation("category", "create", e))?;

        tracing::debug!(category_id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    async fn list_all(&self) -> Result<Vec<Category>, CatalogStoreError> {
        sqlx::query_as("SELECT id, name, user_id FROM category ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("category", "list_all", e))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, CatalogStoreError> {
        sqlx::query_as("SELECT id, name, user_id FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("category", "get_by_id", e))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CatalogStoreError> {
        sqlx::query_as("SELECT id, name, user_id FROM category WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("category", "find_by_name", e))
    }

    async fn count(&self) -> Result<i64, CatalogStoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("category", "count", e))?;
        Ok(total)
    }
}
