//! Core Curio functionality
//!
//! This module contains the main Curio struct and its implementation,
//! providing centralized coordination for the database connection, the
//! record stores, the user directory, and the catalog service.

use sqlx::PgPool;
use std::time::Duration;

use crate::catalog::CatalogService;
use crate::directory::UserDirectory;
use crate::errors::CurioError;
use catalog_store::{CategoryStore, DbPool, ItemStore, UserStore};
use config::{AppConfig, DatabaseConfig};
use memory_cache::CacheParams;

/// Main Curio coordinator that owns the database connection and wires
/// the stores, caches, and services together.
///
/// Every cache in the system is constructed here from configuration and
/// handed to its owner; nothing is process-global.
pub struct Curio {
    pool: DbPool,
    directory: UserDirectory<UserStore>,
    catalog: CatalogService<CategoryStore, ItemStore>,
}

impl Curio {
    /// Connect to the database and build the full service stack
    pub async fn new(config: AppConfig) -> Result<Self, CurioError> {
        let pool = Self::connect(&config.database).await?;

        let directory = UserDirectory::new(UserStore::new(pool.clone()), &config.directory);
        let catalog = CatalogService::new(
            CategoryStore::new(pool.clone()),
            ItemStore::new(pool.clone()),
            CacheParams::from(&config.item_cache),
        );

        Ok(Self {
            pool,
            directory,
            catalog,
        })
    }

    async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        pool_options.connect(&connection_string).await
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// The user directory (identity cache included)
    pub fn directory(&self) -> &UserDirectory<UserStore> {
        &self.directory
    }

    /// The catalog service (item cache included)
    pub fn catalog(&self) -> &CatalogService<CategoryStore, ItemStore> {
        &self.catalog
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), CurioError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
