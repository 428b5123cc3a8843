//! Bounded timed cache implementation
//!
//! This module provides the BoundedTimedCache struct, an in-memory
//! mapping with a maximum entry count and an optional per-entry TTL.

use crate::params::CacheParams;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

struct CacheEntry<V> {
    value: V,
    stamped_at: Instant,
    /// Recency tick; larger means touched more recently
    touched: u64,
}

/// In-memory cache bounded by entry count and, optionally, entry age.
///
/// Eviction on overflow removes the least-recently-used entry; both reads
/// and overwrites refresh recency. Expired entries are swept lazily: a
/// `get` that finds a stale entry removes it and reports a miss, and no
/// background sweep exists. The cache is a plain single-owner value with
/// no interior locking; wrap it in [`crate::SharedCache`] to share it
/// across tasks.
pub struct BoundedTimedCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    params: CacheParams,
    clock: u64,
}

impl<K: Eq + Hash, V> BoundedTimedCache<K, V> {
    /// Create a new cache with the given capacity and TTL settings
    pub fn new(params: CacheParams) -> Self {
        Self {
            entries: HashMap::with_capacity(params.capacity),
            params,
            clock: 0,
        }
    }

    /// Insert or overwrite the entry for `key`, stamping it with the
    /// current time.
    ///
    /// Inserting a new key at capacity first evicts the least-recently
    /// used entry. Overwrites never evict. A capacity of 0 stores
    /// nothing; the call is a no-op. Never fails and never signals which
    /// entry, if any, was evicted.
    pub fn put(&mut self, key: K, value: V) {
        if self.params.capacity == 0 {
            return;
        }

        let tick = self.tick();
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.stamped_at = Instant::now();
            entry.touched = tick;
            return;
        }

        if self.entries.len() >= self.params.capacity {
            self.evict_one();
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stamped_at: Instant::now(),
                touched: tick,
            },
        );
    }

    /// Return the cached value for `key` if present and not stale.
    ///
    /// A stale entry is removed as a side effect of the failed lookup;
    /// an absent key has no side effects. With a zero TTL every entry is
    /// already stale by the time it is read.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let stale = match self.entries.get(key) {
            Some(entry) => !self.is_live(entry),
            None => return None,
        };
        if stale {
            self.entries.remove(key);
            return None;
        }

        let tick = self.tick();
        let entry = self.entries.get_mut(key)?;
        entry.touched = tick;
        Some(&entry.value)
    }

    /// Remove the entry for `key`, returning its value if one was stored
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, including stale ones no `get` has swept
    /// yet
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is stored for `key`. Does not consult the TTL, so
    /// an expired entry still counts until a `get` sweeps it.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Configured parameters
    pub fn params(&self) -> CacheParams {
        self.params
    }

    fn is_live(&self, entry: &CacheEntry<V>) -> bool {
        match self.params.ttl {
            Some(ttl) => entry.stamped_at.elapsed() < ttl,
            None => true,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Remove the least-recently-used entry. Capacities stay small enough
    /// here that a linear victim scan beats maintaining a linked order.
    /// Recency ticks are unique per entry, so exactly one entry goes.
    fn evict_one(&mut self) {
        let Some(victim_tick) = self.entries.values().map(|entry| entry.touched).min() else {
            return;
        };
        self.entries.retain(|_, entry| entry.touched != victim_tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn bounded(capacity: usize, ttl: Duration) -> BoundedTimedCache<String, i32> {
        BoundedTimedCache::new(CacheParams::bounded(capacity, ttl))
    }

    #[test]
    fn put_then_get_returns_value() {
        let mut cache = bounded(10, Duration::from_secs(30));
        cache.put("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(&1));
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut cache = bounded(3, Duration::from_secs(30));
        for i in 0..20 {
            cache.put(format!("key-{i}"), i);
            assert!(cache.len() <= 3);
        }
    }

    #[test]
    fn overflow_evicts_exactly_one() {
        let mut cache = bounded(2, Duration::from_secs(30));
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        cache.put("c".to_string(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"c".to_string()), Some(&3));
        // "a" was the least recently touched
        assert!(!cache.contains(&"a".to_string()));
        assert!(cache.contains(&"b".to_string()));
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = bounded(2, Duration::from_secs(30));
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(&1));

        cache.put("c".to_string(), 3);
        assert!(cache.contains(&"a".to_string()));
        assert!(!cache.contains(&"b".to_string()));
    }

    #[test]
    fn overwrite_refreshes_value_without_eviction() {
        let mut cache = bounded(2, Duration::from_secs(30));
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        cache.put("a".to_string(), 10);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(&10));
        assert_eq!(cache.get(&"b".to_string()), Some(&2));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut cache = bounded(10, Duration::from_millis(10));
        cache.put("a".to_string(), 1);
        std::thread::sleep(Duration::from_millis(30));

        assert_eq!(cache.get(&"a".to_string()), None);
        // The failed get swept the stale entry
        assert!(!cache.contains(&"a".to_string()));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn zero_ttl_is_stale_immediately() {
        let mut cache = bounded(100, Duration::ZERO);
        cache.put("x".to_string(), 42);

        assert_eq!(cache.get(&"x".to_string()), None);
        assert!(!cache.contains(&"x".to_string()));
    }

    #[test]
    fn get_on_absent_key_has_no_side_effects() {
        let mut cache = bounded(10, Duration::from_secs(30));
        cache.put("a".to_string(), 1);

        assert_eq!(cache.get(&"missing".to_string()), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = bounded(0, Duration::from_secs(30));
        cache.put("a".to_string(), 1);

        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    #[test]
    fn capacity_only_entries_never_expire_by_time() {
        let mut cache: BoundedTimedCache<String, i32> =
            BoundedTimedCache::new(CacheParams::capacity_only(10));
        cache.put("a".to_string(), 1);
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.get(&"a".to_string()), Some(&1));
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = bounded(10, Duration::from_secs(30));
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        assert_eq!(cache.remove(&"a".to_string()), Some(1));
        assert_eq!(cache.remove(&"a".to_string()), None);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn from_cache_config() {
        let params = CacheParams::from(&config::CacheConfig::new(8, 5));
        assert_eq!(params.capacity, 8);
        assert_eq!(params.ttl, Some(Duration::from_secs(5)));
    }
}
