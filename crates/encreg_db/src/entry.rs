//! Database entries and loaded encoding objects.

use crate::types::{EncodingIndex, EntryIndex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Static properties of an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingTraits {
    /// Placeholder encoding without conversion support.
    pub dummy: bool,
    /// ASCII bytes mean ASCII characters in this encoding.
    pub ascii_compatible: bool,
    /// Minimum bytes per character.
    pub min_length: u8,
    /// Maximum bytes per character.
    pub max_length: u8,
}

impl EncodingTraits {
    /// One byte per character, ASCII compatible.
    #[must_use]
    pub const fn single_byte() -> Self {
        Self {
            dummy: false,
            ascii_compatible: true,
            min_length: 1,
            max_length: 1,
        }
    }

    /// ASCII compatible with characters of up to `max_length` bytes.
    #[must_use]
    pub const fn multi_byte(max_length: u8) -> Self {
        Self {
            dummy: false,
            ascii_compatible: true,
            min_length: 1,
            max_length,
        }
    }

    /// Fixed or variable width encoding whose code units are wider than a
    /// byte, and which therefore cannot spell ASCII.
    #[must_use]
    pub const fn wide(min_length: u8, max_length: u8) -> Self {
        Self {
            dummy: false,
            ascii_compatible: false,
            min_length,
            max_length,
        }
    }

    /// Marks the encoding as a dummy.
    #[must_use]
    pub const fn dummy(mut self) -> Self {
        self.dummy = true;
        self
    }
}

impl Default for EncodingTraits {
    fn default() -> Self {
        Self::single_byte()
    }
}

/// A loaded encoding object.
///
/// Encodings are created the first time their [`Entry`] is loaded and live
/// as long as the database. The numeric index is unique among all encodings
/// loaded from the same database.
#[derive(Debug)]
pub struct Encoding {
    name: Box<str>,
    index: EncodingIndex,
    traits: EncodingTraits,
}

impl Encoding {
    /// Returns the canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical name as bytes.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Returns the numeric index assigned at load time.
    pub fn index(&self) -> EncodingIndex {
        self.index
    }

    /// Returns true for placeholder encodings.
    pub fn is_dummy(&self) -> bool {
        self.traits.dummy
    }

    /// Returns true if ASCII text is valid in this encoding.
    pub fn is_ascii_compatible(&self) -> bool {
        self.traits.ascii_compatible
    }

    /// Minimum bytes per character.
    pub fn min_length(&self) -> u8 {
        self.traits.min_length
    }

    /// Maximum bytes per character.
    pub fn max_length(&self) -> u8 {
        self.traits.max_length
    }
}

/// An encoding entry in the database.
///
/// Each entry owns at most one [`Encoding`], created by the first call to
/// [`Entry::encoding`]. Concurrent first calls agree on a single object.
#[derive(Debug)]
pub struct Entry {
    name: Box<str>,
    index: EntryIndex,
    traits: EncodingTraits,
    loaded: OnceLock<Arc<Encoding>>,
    /// Next encoding index, shared by every entry of one database.
    next_index: Arc<AtomicUsize>,
}

impl Entry {
    pub(crate) fn new(
        name: &str,
        index: EntryIndex,
        traits: EncodingTraits,
        next_index: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            name: name.into(),
            index,
            traits,
            loaded: OnceLock::new(),
            next_index,
        }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical name as bytes.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Returns the stable entry index.
    pub fn index(&self) -> EntryIndex {
        self.index
    }

    /// Returns true for placeholder encodings.
    pub fn is_dummy(&self) -> bool {
        self.traits.dummy
    }

    /// Returns true if ASCII text is valid in this encoding.
    pub fn is_ascii_compatible(&self) -> bool {
        self.traits.ascii_compatible
    }

    /// Returns the static properties of the encoding.
    pub fn traits(&self) -> EncodingTraits {
        self.traits
    }

    /// Returns true once the encoding object has been materialized.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Returns true if `encoding` is the object this entry loaded.
    ///
    /// Encoding indices are only unique within one database, so this is
    /// the check that tells two databases' encodings apart.
    pub fn owns(&self, encoding: &Encoding) -> bool {
        self.loaded
            .get()
            .is_some_and(|own| std::ptr::eq(Arc::as_ptr(own), encoding))
    }

    /// Materializes the encoding object, assigning its numeric index on the
    /// first call.
    pub fn encoding(&self) -> Arc<Encoding> {
        let encoding = self.loaded.get_or_init(|| {
            let index = EncodingIndex::new(self.next_index.fetch_add(1, Ordering::SeqCst));
            Arc::new(Encoding {
                name: self.name.clone(),
                index,
                traits: self.traits,
            })
        });
        Arc::clone(encoding)
    }
}

/// An alternate name for an encoding entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    name: Box<str>,
    target: EntryIndex,
}

impl AliasEntry {
    pub(crate) fn new(name: &str, target: EntryIndex) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Returns the alias spelling.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alias as bytes.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Returns the entry this alias resolves to.
    pub fn target(&self) -> EntryIndex {
        self.target
    }
}
