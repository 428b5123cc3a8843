//! User store
//!
//! This module defines the durable user-record seam and its PostgreSQL
//! implementation. The two lookup paths deliberately signal "missing"
//! differently: `find_by_id` treats absence as a failure (the caller
//! asked for a record it believed existed), while `find_by_email`
//! returns `None` (the sign-in flow branches on absence to create the
//! record).

use crate::errors::CatalogStoreError;
use crate::models::{User, UserProfile};
use crate::DbPool;
use async_trait::async_trait;

/// Durable user-record operations consumed by the user directory
#[async_trait]
pub trait UserRecords: Send + Sync {
    /// Insert a new user record built from a verified identity profile
    async fn create(&self, profile: UserProfile) -> Result<User, CatalogStoreError>;

    /// Fetch a user by id; a missing id is a `NotFound` error
    async fn find_by_id(&self, id: i32) -> Result<User, CatalogStoreError>;

    /// Fetch a user by email; a missing email is `None`
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogStoreError>;
}

/// PostgreSQL-backed user store
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, CatalogStoreError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("users", "count", e))?;
        Ok(total)
    }
}

#[async_trait]
impl UserRecords for UserStore {
    async fn create(&self, profile: UserProfile) -> Result<User, CatalogStoreError> {
        profile.validate()?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (name, email, picture) VALUES ($1, $2, $3)
             RETURNING id, name, email, picture",
        )
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.picture)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CatalogStoreError::database_operation("users", "create", e))?;

        tracing::debug!(user_id = user.id, email = %user.email, "user record created");
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<User, CatalogStoreError> {
        sqlx::query_as("SELECT id, name, email, picture FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("users", "find_by_id", e))?
            .ok_or_else(|| CatalogStoreError::not_found("users", id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogStoreError> {
        sqlx::query_as("SELECT id, name, email, picture FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CatalogStoreError::database_operation("users", "find_by_email", e))
    }
}
