//! Lookup arrays from entries and loaded encodings to handles.
//!
//! Two arrays back the registry's fast paths:
//!
//! - [`EntryTable`] maps an entry index to its handle. It is built once
//!   while the registry opens and never changes afterwards, so reads need
//!   no synchronization.
//! - [`EncodingIndexCache`] maps a loaded encoding's numeric index to the
//!   handle of the entry it came from. It starts small and grows as
//!   encodings with higher indices are loaded. Growth and slot writes happen
//!   under one write lock; growth keeps every populated slot.

use crate::error::{RegistryError, RegistryResult};
use crate::handle::EncodingHandle;
use encreg_db::{EncodingDatabase, EncodingIndex, EntryIndex};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{trace, warn};

/// Slots allocated before any encoding is loaded.
pub const INITIAL_CAPACITY: usize = 4;

/// Extra slots allocated past the index that triggered growth.
pub const GROWTH_SLACK: usize = 4;

/// Fixed-size table of handles indexed by entry index.
#[derive(Debug)]
pub(crate) struct EntryTable {
    handles: Box<[Arc<EncodingHandle>]>,
}

impl EntryTable {
    /// Creates one handle per database entry.
    pub(crate) fn build(db: &dyn EncodingDatabase) -> RegistryResult<Self> {
        let mut handles = Vec::with_capacity(db.len());
        for (position, entry) in db.entries().iter().enumerate() {
            if entry.index().as_usize() != position {
                return Err(RegistryError::corrupt_database(format!(
                    "{} found at position {position}, expected {}",
                    entry.name(),
                    entry.index()
                )));
            }
            handles.push(Arc::new(EncodingHandle::new(Arc::clone(entry))));
        }
        Ok(Self {
            handles: handles.into_boxed_slice(),
        })
    }

    pub(crate) fn get(&self, index: EntryIndex) -> Option<&Arc<EncodingHandle>> {
        self.handles.get(index.as_usize())
    }

    pub(crate) fn as_slice(&self) -> &[Arc<EncodingHandle>] {
        &self.handles
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}

/// Occupancy of an [`EncodingIndexCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Allocated slots.
    pub capacity: usize,
    /// Slots holding a handle.
    pub populated: usize,
}

/// Growable cache from encoding index to handle.
///
/// # Thread Safety
///
/// Readers take a shared lock. [`EncodingIndexCache::publish`] grows the
/// array and writes the slot under an exclusive lock, so a concurrent
/// reader sees either the old or the new array, never a partially grown
/// one. Publishing the same handle twice is a no-op; publishing a different
/// handle to a taken slot keeps the first one and logs a warning.
#[derive(Debug)]
pub struct EncodingIndexCache {
    slots: RwLock<Vec<Option<Arc<EncodingHandle>>>>,
}

impl Default for EncodingIndexCache {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

impl EncodingIndexCache {
    /// Creates a cache with [`INITIAL_CAPACITY`] empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with `capacity` empty slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: RwLock::new(vec![None; capacity]),
        }
    }

    /// Returns the handle cached for `index`.
    pub fn get(&self, index: EncodingIndex) -> Option<Arc<EncodingHandle>> {
        self.slots.read().get(index.as_usize()).cloned().flatten()
    }

    /// Stores `handle` at `index`, growing the array if needed.
    ///
    /// Returns `true` if the array had to grow.
    pub fn publish(&self, index: EncodingIndex, handle: &Arc<EncodingHandle>) -> bool {
        let position = index.as_usize();
        let mut slots = self.slots.write();

        let grew = position >= slots.len();
        if grew {
            let capacity = position + GROWTH_SLACK;
            trace!(from = slots.len(), to = capacity, "growing encoding index cache");
            slots.resize(capacity, None);
        }

        if let Some(existing) = &slots[position] {
            if !Arc::ptr_eq(existing, handle) {
                warn!(
                    index = %index,
                    cached = existing.name(),
                    rejected = handle.name(),
                    "encoding index already cached for another entry"
                );
            }
        } else {
            slots[position] = Some(Arc::clone(handle));
        }
        grew
    }

    /// Returns the current occupancy.
    pub fn stats(&self) -> CacheStats {
        let slots = self.slots.read();
        CacheStats {
            capacity: slots.len(),
            populated: slots.iter().filter(|slot| slot.is_some()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encreg_db::InMemoryDatabase;

    fn handles() -> (InMemoryDatabase, EntryTable) {
        let db = InMemoryDatabase::builtin();
        let table = EntryTable::build(&db).unwrap();
        (db, table)
    }

    #[test]
    fn entry_table_has_one_handle_per_entry() {
        let (db, table) = handles();
        assert_eq!(table.len(), db.len());
        for entry in db.entries() {
            assert_eq!(table.get(entry.index()).unwrap().name(), entry.name());
        }
        assert!(table.get(EntryIndex::new(db.len())).is_none());
    }

    #[test]
    fn cache_starts_empty() {
        let cache = EncodingIndexCache::new();
        assert_eq!(
            cache.stats(),
            CacheStats {
                capacity: INITIAL_CAPACITY,
                populated: 0
            }
        );
        assert!(cache.get(EncodingIndex::new(0)).is_none());
        assert!(cache.get(EncodingIndex::new(100)).is_none());
    }

    #[test]
    fn publish_within_capacity() {
        let (_db, table) = handles();
        let cache = EncodingIndexCache::new();
        let handle = table.get(EntryIndex::new(1)).unwrap();

        assert!(!cache.publish(EncodingIndex::new(2), handle));
        assert!(Arc::ptr_eq(&cache.get(EncodingIndex::new(2)).unwrap(), handle));
        assert_eq!(cache.stats().capacity, INITIAL_CAPACITY);
    }

    #[test]
    fn growth_keeps_existing_slots() {
        let (_db, table) = handles();
        let cache = EncodingIndexCache::new();
        let first = table.get(EntryIndex::new(0)).unwrap();
        let second = table.get(EntryIndex::new(5)).unwrap();

        cache.publish(EncodingIndex::new(1), first);
        assert!(cache.publish(EncodingIndex::new(10), second));

        assert_eq!(cache.stats().capacity, 10 + GROWTH_SLACK);
        assert_eq!(cache.stats().populated, 2);
        assert!(Arc::ptr_eq(&cache.get(EncodingIndex::new(1)).unwrap(), first));
        assert!(Arc::ptr_eq(&cache.get(EncodingIndex::new(10)).unwrap(), second));
    }

    #[test]
    fn republish_is_idempotent() {
        let (_db, table) = handles();
        let cache = EncodingIndexCache::new();
        let handle = table.get(EntryIndex::new(3)).unwrap();

        cache.publish(EncodingIndex::new(0), handle);
        cache.publish(EncodingIndex::new(0), handle);

        assert_eq!(cache.stats().populated, 1);
    }

    #[test]
    fn conflicting_publish_keeps_first_handle() {
        let (_db, table) = handles();
        let cache = EncodingIndexCache::new();
        let first = table.get(EntryIndex::new(3)).unwrap();
        let second = table.get(EntryIndex::new(4)).unwrap();

        cache.publish(EncodingIndex::new(1), first);
        assert!(!cache.publish(EncodingIndex::new(1), second));

        assert!(Arc::ptr_eq(&cache.get(EncodingIndex::new(1)).unwrap(), first));
        assert_eq!(cache.stats().populated, 1);
    }

    #[test]
    fn concurrent_publish_keeps_every_slot() {
        let (_db, table) = handles();
        let table = Arc::new(table);
        let cache = Arc::new(EncodingIndexCache::new());

        let threads: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    for i in (t..40).step_by(8) {
                        let handle = table.get(EntryIndex::new(i)).unwrap();
                        cache.publish(EncodingIndex::new(i), handle);
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        for i in 0..40 {
            let cached = cache.get(EncodingIndex::new(i)).unwrap();
            assert_eq!(cached.entry_index(), EntryIndex::new(i));
        }
    }
}
