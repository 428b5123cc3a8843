//! Database migration functionality
//!
//! This module provides table and index creation for the catalog schema
//! managed by Curio.

use crate::core::Curio;
use crate::errors::CurioError;
use catalog_store::schema;

impl Curio {
    /// Create the catalog tables and indexes.
    /// If recreate is true, drops existing tables first.
    pub async fn migrate(&self, recreate: bool) -> Result<(), CurioError> {
        if recreate {
            for drop_sql in schema::drop_tables_sql() {
                tracing::info!(sql = drop_sql, "dropping table");
                sqlx::query(drop_sql).execute(self.pool()).await?;
            }
        }

        for create_sql in schema::create_tables_sql() {
            tracing::info!(sql = create_sql, "creating table");
            sqlx::query(create_sql).execute(self.pool()).await?;
        }

        for index_sql in schema::create_indexes_sql() {
            tracing::info!(sql = index_sql, "creating index");
            sqlx::query(index_sql).execute(self.pool()).await?;
        }

        Ok(())
    }
}
