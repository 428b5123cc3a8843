//! Shared cache handle
//!
//! This module provides SharedCache, a cloneable handle that guards a
//! BoundedTimedCache with an async RwLock so one cache instance can be
//! passed explicitly to every task that needs it.

use crate::cache::BoundedTimedCache;
use crate::params::CacheParams;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable, internally locked cache handle.
///
/// All clones point at the same underlying cache. There is no ambient or
/// global instance; whoever constructs the handle owns the cache's scope
/// and hands clones to collaborators.
pub struct SharedCache<K, V> {
    inner: Arc<RwLock<BoundedTimedCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Eq + Hash, V> Debug for SharedCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (len, state) = match self.inner.try_read() {
            Ok(cache) => (cache.len(), "idle"),
            Err(_) => (0, "locked"),
        };

        f.debug_struct("SharedCache")
            .field("entries", &len)
            .field("state", &state)
            .finish()
    }
}

impl<K: Eq + Hash, V> SharedCache<K, V> {
    /// Create a new shared cache with the given parameters
    pub fn new(params: CacheParams) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BoundedTimedCache::new(params))),
        }
    }

    /// Insert or overwrite the entry for `key`
    pub async fn put(&self, key: K, value: V) {
        self.inner.write().await.put(key, value);
    }

    /// Fetch a clone of the cached value, sweeping it if stale
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.write().await.get(key).cloned()
    }

    /// Remove the entry for `key`, returning its value if one was stored
    pub async fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().await.remove(key)
    }

    /// Drop every entry
    pub async fn invalidate_all(&self) {
        self.inner.write().await.clear();
    }

    /// Number of stored entries, including stale ones no `get` has swept
    /// yet
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
