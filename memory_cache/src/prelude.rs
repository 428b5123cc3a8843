//! Convenience re-exports for common memory-cache usage

// Core cache components
pub use crate::cache::BoundedTimedCache;
pub use crate::params::CacheParams;
pub use crate::shared::SharedCache;

// Re-export centralized config
pub use config::CacheConfig;

// Common external dependencies
pub use tokio;
