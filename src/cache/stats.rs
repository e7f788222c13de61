//! Cache Statistics Module
//!
//! Tracks cache effectiveness: hits, misses and the ways entries leave.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing cache behaviour since startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed by a lookup because they had expired
    pub expired_on_read: u64,
    /// Entries removed by periodic cleanup
    pub swept: u64,
    /// Number of full invalidations
    pub clears: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Records a miss caused by an expired entry, which was also removed.
    pub fn record_expired_miss(&mut self) {
        self.misses += 1;
        self.expired_on_read += 1;
    }

    pub fn record_swept(&mut self, removed: usize) {
        self.swept += removed as u64;
    }

    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
