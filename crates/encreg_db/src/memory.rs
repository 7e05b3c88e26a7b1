//! In-memory encoding database.

use crate::builtin;
use crate::database::EncodingDatabase;
use crate::entry::{AliasEntry, Encoding, EncodingTraits, Entry};
use crate::error::{DbError, DbResult};
use crate::map::CaseInsensitiveBytesMap;
use crate::types::EntryIndex;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

/// An encoding database held entirely in memory.
///
/// Suitable for:
/// - Embedding the built-in table ([`InMemoryDatabase::builtin`])
/// - Unit and integration tests with small custom tables
///
/// Definitions happen through `&mut self` before the database is shared;
/// afterwards it is only read.
///
/// # Example
///
/// ```rust
/// use encreg_db::{EncodingDatabase, EncodingTraits, InMemoryDatabase};
///
/// let mut db = InMemoryDatabase::new();
/// db.define_encoding("Latin-X", EncodingTraits::single_byte()).unwrap();
/// db.define_alias("LX", "Latin-X").unwrap();
///
/// assert_eq!(db.find_alias(b"lx").unwrap().name(), "Latin-X");
/// assert_eq!(db.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    entries: Vec<Arc<Entry>>,
    aliases: Vec<AliasEntry>,
    encoding_table: CaseInsensitiveBytesMap<EntryIndex>,
    alias_table: CaseInsensitiveBytesMap<EntryIndex>,
    next_index: Arc<AtomicUsize>,
}

impl InMemoryDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a database holding the built-in encoding table.
    ///
    /// ASCII-8BIT, UTF-8 and US-ASCII are loaded immediately and hold
    /// encoding indices 0, 1 and 2.
    ///
    /// # Panics
    ///
    /// Panics if the built-in tables define a name twice or alias a name
    /// that is not an encoding.
    #[must_use]
    pub fn builtin() -> Self {
        let db = Self::from_tables(builtin::ENCODINGS, builtin::ALIASES)
            .unwrap_or_else(|err| panic!("invalid built-in encoding table: {err}"));
        for name in builtin::PRELOADED {
            db.preload(name);
        }
        db
    }

    /// Builds a database from encoding and alias tables.
    ///
    /// # Errors
    ///
    /// Returns the first definition error encountered.
    pub fn from_tables(
        encodings: &[(&str, EncodingTraits)],
        aliases: &[(&str, &str)],
    ) -> DbResult<Self> {
        let mut db = Self::new();
        for &(name, traits) in encodings {
            db.define_encoding(name, traits)?;
        }
        for &(alias, target) in aliases {
            db.define_alias(alias, target)?;
        }
        Ok(db)
    }

    /// Defines a new encoding and returns its entry index.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty or not ASCII
    /// - The name, in any case, is already an encoding or an alias
    pub fn define_encoding(&mut self, name: &str, traits: EncodingTraits) -> DbResult<EntryIndex> {
        self.check_new_name(name)?;

        let index = EntryIndex::new(self.entries.len());
        self.encoding_table.insert(name.as_bytes(), index);
        self.entries.push(Arc::new(Entry::new(
            name,
            index,
            traits,
            Arc::clone(&self.next_index),
        )));
        Ok(index)
    }

    /// Defines `alias` as another name for the encoding `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The alias is empty or not ASCII
    /// - The alias, in any case, is already an encoding or an alias
    /// - `target` is not a defined encoding (aliases of aliases are rejected)
    pub fn define_alias(&mut self, alias: &str, target: &str) -> DbResult<()> {
        self.check_new_name(alias)?;

        let index = *self
            .encoding_table
            .get(target.as_bytes())
            .ok_or_else(|| DbError::unknown_alias_target(alias.as_bytes(), target.as_bytes()))?;

        self.alias_table.insert(alias.as_bytes(), index);
        self.aliases.push(AliasEntry::new(alias, index));
        Ok(())
    }

    /// Loads the encoding named `name` ahead of first use.
    pub fn preload(&self, name: &str) -> Option<Arc<Encoding>> {
        self.find_encoding(name.as_bytes()).map(|entry| entry.encoding())
    }

    fn check_new_name(&self, name: &str) -> DbResult<()> {
        let bytes = name.as_bytes();
        if bytes.is_empty() || !bytes.is_ascii() {
            return Err(DbError::invalid_name(bytes));
        }
        if self.encoding_table.contains_key(bytes) || self.alias_table.contains_key(bytes) {
            return Err(DbError::duplicate_name(bytes));
        }
        Ok(())
    }
}

impl EncodingDatabase for InMemoryDatabase {
    fn find_encoding(&self, name: &[u8]) -> Option<&Arc<Entry>> {
        let index = self.encoding_table.get(name)?;
        self.entries.get(index.as_usize())
    }

    fn find_alias(&self, name: &[u8]) -> Option<&Arc<Entry>> {
        let index = self.alias_table.get(name)?;
        self.entries.get(index.as_usize())
    }

    fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }
}
