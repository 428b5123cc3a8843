//! # Curio
//!
//! The storage and user-control core of a small catalog application:
//! PostgreSQL-backed stores for users, categories, and items; a user
//! directory fronted by a capacity-bounded identity cache; and an
//! owner-checked catalog service with a TTL'd item read cache.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use curio::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!
//!     let curio = Curio::new(config).await?;
//!     curio.migrate(false).await?;
//!
//!     // Sign in with a verified identity profile (the OAuth exchange
//!     // itself happens in the host web layer)
//!     let mut session = Session::new();
//!     let user = curio
//!         .directory()
//!         .sign_in(&mut session, UserProfile::new("Ada", "ada@example.com"))
//!         .await?;
//!
//!     let category = curio
//!         .catalog()
//!         .add_category(Some(&user), "Hockey")
//!         .await?;
//!     let item = curio
//!         .catalog()
//!         .add_item(Some(&user), ItemDraft::new("Stick", category.id))
//!         .await?;
//!     println!("Created item: {}", item.name);
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod core;
pub mod directory;
pub mod errors;
pub mod migration;
pub mod prelude;
pub mod session;

// Re-export the main public types for convenience
pub use catalog::CatalogService;
pub use core::Curio;
pub use directory::UserDirectory;
pub use errors::CurioError;
pub use session::Session;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig, DirectoryConfig};

// Re-export internal crates used in the public API
pub use catalog_store;
pub use memory_cache;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
