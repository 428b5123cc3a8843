//! Cache parameter configuration
//!
//! This module defines the CacheParams struct
//! for configuring cache capacity and TTL per use site.

use config::CacheConfig;
use std::time::Duration;

/// Cache parameters for configuring cache behavior per use site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheParams {
    /// Maximum number of live entries; 0 disables storage entirely
    pub capacity: usize,
    /// Entry time-to-live; `None` means entries only ever leave by
    /// capacity pressure or explicit removal
    pub ttl: Option<Duration>,
}

impl CacheParams {
    /// Capacity- and time-bounded configuration
    pub fn bounded(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl: Some(ttl),
        }
    }

    /// Capacity-only configuration; entries never expire by time
    pub fn capacity_only(capacity: usize) -> Self {
        Self {
            capacity,
            ttl: None,
        }
    }
}

impl From<&CacheConfig> for CacheParams {
    fn from(config: &CacheConfig) -> Self {
        Self::bounded(config.capacity, config.ttl_duration())
    }
}
