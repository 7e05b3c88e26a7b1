//! Stress tests for the encoding registry.
//!
//! These helpers drive a shared registry from many threads and report
//! throughput along with any inconsistency they observe.

use encreg_core::{EncodingName, EncodingRegistry};
use encreg_db::EncodingDatabase;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of operations to perform.
    pub operations: usize,
    /// Number of concurrent threads.
    pub threads: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            threads: 4,
        }
    }
}

/// Loads every entry in turn from one thread.
///
/// An operation fails if the handle returned for a loaded encoding does not
/// carry the entry's name.
pub fn stress_sequential_loads(
    registry: &EncodingRegistry,
    config: &StressConfig,
) -> StressTestResult {
    let entries = registry.database().entries();
    let start = Instant::now();
    let mut successful = 0usize;
    let mut failed = 0usize;

    for i in 0..config.operations {
        let entry = &entries[i % entries.len()];
        let ok = registry
            .load_encoding(entry.name_bytes())
            .and_then(|encoding| registry.get_encoding(&encoding).ok())
            .is_some_and(|handle| handle.name() == entry.name());
        if ok {
            successful += 1;
        } else {
            failed += 1;
        }
    }

    StressTestResult::new(successful, failed, start.elapsed())
}

/// Loads entries from several threads, each starting at a different
/// offset, and checks that every handle matches the one created at open.
pub fn stress_concurrent_loads(
    registry: Arc<EncodingRegistry>,
    config: &StressConfig,
) -> StressTestResult {
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let ops_per_thread = config.operations / config.threads.max(1);

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                let entries = registry.database().entries();
                for i in 0..ops_per_thread {
                    let entry = &entries[(t * 7 + i) % entries.len()];
                    let expected = registry.handle_for_entry(entry);
                    let actual = registry
                        .load_encoding(entry.name_bytes())
                        .and_then(|encoding| registry.get_encoding(&encoding).ok());

                    match (expected, actual) {
                        (Some(expected), Some(actual)) if Arc::ptr_eq(expected, &actual) => {
                            successful.fetch_add(1, Ordering::Relaxed);
                        }
                        _ => {
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Resolves a fixed mix of names, including special and unknown ones, from
/// several threads.
///
/// Unknown names count as successful when they fail with an argument error.
pub fn stress_concurrent_find(
    registry: Arc<EncodingRegistry>,
    config: &StressConfig,
) -> StressTestResult {
    const NAMES: [&str; 8] = [
        "utf-8", "SJIS", "locale", "external", "internal", "filesystem", "binary", "no-such",
    ];

    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let ops_per_thread = config.operations / config.threads.max(1);

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let name = EncodingName::from(NAMES[(t + i) % NAMES.len()]);
                    let ok = match registry.find_encoding(&name) {
                        Ok(_) => true,
                        Err(err) => err.is_argument_error(),
                    };
                    if ok {
                        successful.fetch_add(1, Ordering::Relaxed);
                    } else {
                        failed.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestRegistry;

    fn quick() -> StressConfig {
        StressConfig {
            operations: 2_000,
            threads: 4,
        }
    }

    #[test]
    fn test_sequential_loads() {
        let test_registry = TestRegistry::builtin();
        let result = stress_sequential_loads(&test_registry, &quick());
        assert_eq!(result.failed_ops, 0);
        assert_eq!(result.total_ops, 2_000);
    }

    #[test]
    fn test_concurrent_loads() {
        let registry = Arc::new(TestRegistry::builtin().registry);
        let result = stress_concurrent_loads(Arc::clone(&registry), &quick());
        assert_eq!(result.failed_ops, 0);
        assert_eq!(
            registry.cache_stats().populated,
            registry.database().len()
        );
    }

    #[test]
    fn test_concurrent_find() {
        let registry = Arc::new(TestRegistry::builtin().registry);
        let result = stress_concurrent_find(registry, &quick());
        assert_eq!(result.failed_ops, 0);
    }
}
