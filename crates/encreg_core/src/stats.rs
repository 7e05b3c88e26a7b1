//! Registry lookup counters.
//!
//! # Usage
//!
//! ```rust,ignore
//! let snapshot = registry.stats().snapshot();
//! println!("fast path hits: {}", snapshot.cache_hits);
//! println!("slow path misses: {}", snapshot.cache_misses);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Lookup counters for one registry.
///
/// All counters are atomic and monotonically increasing.
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// `get_encoding` calls answered from the encoding-index cache.
    cache_hits: AtomicU64,
    /// `get_encoding` calls that fell back to name resolution.
    cache_misses: AtomicU64,
    /// Successful `load_encoding` calls.
    loads: AtomicU64,
    /// Name lookups that matched nothing.
    lookup_failures: AtomicU64,
    /// Times the encoding-index cache grew.
    cache_grows: AtomicU64,
    /// Constants published at startup.
    constants_defined: AtomicU64,
}

impl RegistryStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_load(&self, grew: bool) {
        self.loads.fetch_add(1, Ordering::Relaxed);
        if grew {
            self.cache_grows.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_lookup_failure(&self) {
        self.lookup_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_constants(&self, count: usize) {
        self.constants_defined
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            lookup_failures: self.lookup_failures.load(Ordering::Relaxed),
            cache_grows: self.cache_grows.load(Ordering::Relaxed),
            constants_defined: self.constants_defined.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`RegistryStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Fast path hits.
    pub cache_hits: u64,
    /// Slow path fallbacks.
    pub cache_misses: u64,
    /// Successful loads.
    pub loads: u64,
    /// Failed name lookups.
    pub lookup_failures: u64,
    /// Cache growth events.
    pub cache_grows: u64,
    /// Constants published.
    pub constants_defined: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = RegistryStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_load(false);
        stats.record_load(true);
        stats.record_lookup_failure();
        stats.record_constants(5);

        let snap = stats.snapshot();
        assert_eq!(snap.cache_hits, 2);
        assert_eq!(snap.cache_misses, 1);
        assert_eq!(snap.loads, 2);
        assert_eq!(snap.cache_grows, 1);
        assert_eq!(snap.lookup_failures, 1);
        assert_eq!(snap.constants_defined, 5);
    }
}
