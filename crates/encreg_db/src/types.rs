//! Index types for database entries and loaded encodings.

use std::fmt;

/// Position of an entry in the database's encoding table.
///
/// Entry indices are dense, start at zero and follow definition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryIndex(pub usize);

impl EntryIndex {
    /// Creates a new entry index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry:{}", self.0)
    }
}

/// Numeric index of a loaded encoding object.
///
/// Assigned when the encoding is first loaded, in load order. It is
/// unrelated to the [`EntryIndex`] of the entry it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodingIndex(pub usize);

impl EncodingIndex {
    /// Creates a new encoding index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for EncodingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enc:{}", self.0)
    }
}
