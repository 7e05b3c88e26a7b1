//! Encoding database trait definition.

use crate::entry::{AliasEntry, Entry};
use crate::types::EntryIndex;
use std::sync::Arc;

/// A read-only source of encoding entries and aliases.
///
/// The database owns entry definitions and their lazily loaded encoding
/// objects. Everything built on top of it (wrappers, caches, constants,
/// runtime defaults) belongs to the registry.
///
/// # Invariants
///
/// - `entries()[i].index()` is `i` for every entry
/// - Name lookups are ASCII case-insensitive
/// - An alias resolves to an encoding entry, never to another alias
/// - No name appears in both the encoding and the alias table
/// - Databases must be `Send + Sync` for concurrent lookup
///
/// # Implementors
///
/// - [`super::InMemoryDatabase`] - Table built in memory
pub trait EncodingDatabase: Send + Sync {
    /// Looks up an encoding entry by canonical name.
    fn find_encoding(&self, name: &[u8]) -> Option<&Arc<Entry>>;

    /// Looks up the entry an alias resolves to.
    fn find_alias(&self, name: &[u8]) -> Option<&Arc<Entry>>;

    /// Returns all entries, ordered by entry index.
    fn entries(&self) -> &[Arc<Entry>];

    /// Returns all aliases in definition order.
    fn aliases(&self) -> &[AliasEntry];

    /// Returns the entry at `index`.
    fn entry(&self, index: EntryIndex) -> Option<&Arc<Entry>> {
        self.entries().get(index.as_usize())
    }

    /// Returns the number of encoding entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true if the database has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
