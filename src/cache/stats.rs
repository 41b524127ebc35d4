//! Cache Statistics Module
//!
//! Tracks per-instance performance metrics: hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Exact per-instance cache counters.
///
/// Counters are tracked precisely rather than estimated, so the hit and
/// miss rates reported to operators reflect real traffic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key absent or expired)
    pub misses: u64,
    /// Number of entries removed to satisfy the size ceiling
    pub evictions: u64,
    /// Current number of entries in the cache
    pub size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Total Requests ==
    /// Total number of lookups observed (hits + misses).
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have occurred.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Miss Rate ==
    /// Returns misses / (hits + misses), or 0.0 if no lookups have occurred.
    pub fn miss_rate(&self) -> f64 {
        let total = self.total_requests();
        if total == 0 {
            0.0
        } else {
            self.misses as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Evictions ==
    /// Adds to the eviction counter.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    // == Update Entry Count ==
    /// Updates the current entry count.
    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.size, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.miss_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
        assert_eq!(stats.miss_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
        assert_eq!(stats.miss_rate(), 0.5);
        assert_eq!(stats.total_requests(), 2);
    }

    #[test]
    fn test_record_evictions() {
        let mut stats = CacheStats::new();
        stats.record_evictions(3);
        stats.record_evictions(2);
        assert_eq!(stats.evictions, 5);
    }

    #[test]
    fn test_set_size() {
        let mut stats = CacheStats::new();
        stats.set_size(42);
        assert_eq!(stats.size, 42);
    }
}
