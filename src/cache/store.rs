//! Cache Store Module
//!
//! TTL cache engine: a HashMap of entries with absolute expiry timestamps.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_SECS};
use crate::clock::{now_ms, system_clock, Clock};

// == TTL Cache ==
/// In-memory key-value store with per-entry expiration.
///
/// Expired entries are never returned. They are removed lazily by `get` and
/// in bulk by `cleanup`.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds for entries stored without an explicit TTL
    default_ttl: u64,
    /// Time source
    clock: Clock,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in seconds for entries stored without one
    pub fn new(default_ttl: u64) -> Self {
        Self::with_clock(default_ttl, system_clock())
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(default_ttl: u64, clock: Clock) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns a copy of the value stored under `key` if it has not expired.
    ///
    /// An expired entry found here is removed.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = now_ms(&self.clock);

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expired_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<u64>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, now_ms(&self.clock), effective_ttl);
        self.entries.insert(key.into(), entry);
    }

    // == Delete ==
    /// Removes the entry for `key`. Returns whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Returns the number removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.record_clear();
        debug!("Cache cleared: {} entries invalidated", removed);
        removed
    }

    // == Cleanup Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        let now = now_ms(&self.clock);
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of stored entries, including expired ones not yet
    /// removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entry is stored, expired or not.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// TTL in seconds applied when `set` is called without one.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECS)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tick::ClockControl;

    fn cache_with_clock(default_ttl: u64) -> (TtlCache<Value>, ClockControl) {
        let clock = ClockControl::new_at(std::time::UNIX_EPOCH + Duration::from_millis(1_700_000_000_000));
        let cache = TtlCache::with_clock(default_ttl, clock.to_clock());
        (cache, clock)
    }

    #[test]
    fn test_store_new() {
        let cache: TtlCache<String> = TtlCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.default_ttl(), 60);
    }

    #[test]
    fn test_store_set_and_get() {
        let (mut cache, _clock) = cache_with_clock(60);

        cache.set("key1", json!("value1"), None);

        assert_eq!(cache.get("key1"), Some(json!("value1")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let (mut cache, _clock) = cache_with_clock(60);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let (mut cache, _clock) = cache_with_clock(60);

        cache.set("key1", json!(1), None);
        cache.set("key1", json!(2), None);

        assert_eq!(cache.get("key1"), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_ttl() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!(1), Some(10));
        clock.advance(Duration::from_secs(8));
        cache.set("key1", json!(2), Some(10));
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.get("key1"), Some(json!(2)));
    }

    #[test]
    fn test_store_delete() {
        let (mut cache, _clock) = cache_with_clock(60);

        cache.set("key1", json!("value1"), None);

        assert!(cache.delete("key1"));
        assert!(cache.is_empty());
        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let (mut cache, _clock) = cache_with_clock(60);
        cache.set("other", json!(true), None);

        assert!(!cache.delete("nonexistent"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!("value1"), Some(1));
        assert!(cache.get("key1").is_some());

        clock.advance_millis(1_001);

        assert_eq!(cache.get("key1"), None);
        assert!(cache.is_empty(), "Expired entry is removed on read");
    }

    #[test]
    fn test_store_valid_at_exact_expiry() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!("value1"), Some(1));
        clock.advance_millis(1_000);

        assert_eq!(cache.get("key1"), Some(json!("value1")));
    }

    #[test]
    fn test_store_uses_default_ttl() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!(1), None);

        clock.advance(Duration::from_secs(60));
        assert!(cache.get("key1").is_some());

        clock.advance_millis(1);
        assert!(cache.get("key1").is_none());
    }

    #[test]
    fn test_store_clear() {
        let (mut cache, _clock) = cache_with_clock(60);

        cache.set("k1", json!("v1"), None);
        cache.set("k2", json!("v2"), None);

        assert_eq!(cache.clear(), 2);
        assert_eq!(cache.get("k1"), None);
        assert_eq!(cache.get("k2"), None);
        assert_eq!(cache.stats().clears, 1);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!("value1"), Some(1));
        cache.set("key2", json!("value2"), Some(10));

        clock.advance_millis(1_100);

        assert_eq!(cache.cleanup(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_store_cleanup_bounds_memory() {
        let (mut cache, clock) = cache_with_clock(60);

        for i in 0..50 {
            cache.set(format!("products:page:{i}"), json!(i), Some(1));
        }
        clock.advance(Duration::from_secs(2));

        assert_eq!(cache.cleanup(), 50);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().swept, 50);
    }

    #[test]
    fn test_store_returns_copies() {
        let (mut cache, _clock) = cache_with_clock(60);

        cache.set("list", json!({"total": 5}), None);
        let mut copy = cache.get("list").expect("value present");
        copy["total"] = json!(99);

        assert_eq!(cache.get("list"), Some(json!({"total": 5})));
    }

    #[test]
    fn test_store_stats() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("key1", json!(1), None);
        cache.set("short", json!(2), Some(1));
        cache.get("key1"); // hit
        cache.get("nonexistent"); // miss
        clock.advance(Duration::from_secs(2));
        cache.get("short"); // expired miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.expired_on_read, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_end_to_end_listing_scenario() {
        let (mut cache, clock) = cache_with_clock(60);

        cache.set("products:p1", json!({"total": 5}), Some(30));
        assert_eq!(cache.get("products:p1"), Some(json!({"total": 5})));

        clock.advance(Duration::from_secs(31));
        assert_eq!(cache.get("products:p1"), None);
    }
}
