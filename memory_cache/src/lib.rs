//! Process-local bounded caching
//!
//! This crate provides a capacity- and time-bounded in-memory cache
//! with lazy expiration, plus a lock-guarded shared handle for use
//! across concurrent tasks.

pub mod cache;
pub mod params;
pub mod prelude;
pub mod shared;

// Re-export centralized config
pub use config::CacheConfig;

pub use cache::BoundedTimedCache;
pub use params::CacheParams;
pub use shared::SharedCache;
