//! Wrapper handles exposed to user code.

use encreg_db::{Encoding, Entry, EntryIndex};
use std::fmt;
use std::sync::Arc;

/// The host-level handle for one encoding entry.
///
/// The registry creates exactly one handle per entry when it opens and
/// hands out clones of the same `Arc` afterwards; aliases share their
/// target's handle. Identity is pointer identity (`Arc::ptr_eq`).
#[derive(Debug)]
pub struct EncodingHandle {
    entry: Arc<Entry>,
}

impl EncodingHandle {
    pub(crate) fn new(entry: Arc<Entry>) -> Self {
        Self { entry }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    /// Returns the index of the wrapped entry.
    pub fn entry_index(&self) -> EntryIndex {
        self.entry.index()
    }

    /// Returns true for placeholder encodings.
    pub fn is_dummy(&self) -> bool {
        self.entry.is_dummy()
    }

    /// Returns true if ASCII text is valid in this encoding.
    pub fn is_ascii_compatible(&self) -> bool {
        self.entry.is_ascii_compatible()
    }

    /// Returns the wrapped entry.
    pub fn entry(&self) -> &Arc<Entry> {
        &self.entry
    }

    /// Returns the encoding object, loading it if needed.
    pub fn encoding(&self) -> Arc<Encoding> {
        self.entry.encoding()
    }

    /// Returns the runtime's inspect form, e.g. `#<Encoding:UTF-16 (dummy)>`.
    pub fn inspect(&self) -> String {
        if self.is_dummy() {
            format!("#<Encoding:{} (dummy)>", self.name())
        } else {
            format!("#<Encoding:{}>", self.name())
        }
    }
}

impl fmt::Display for EncodingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encreg_db::{EncodingDatabase, InMemoryDatabase};

    #[test]
    fn handle_exposes_entry() {
        let db = InMemoryDatabase::builtin();
        let entry = db.find_encoding(b"utf-16").unwrap();
        let handle = EncodingHandle::new(Arc::clone(entry));

        assert_eq!(handle.name(), "UTF-16");
        assert_eq!(handle.entry_index(), entry.index());
        assert!(handle.is_dummy());
        assert!(!handle.is_ascii_compatible());
        assert_eq!(handle.to_string(), "UTF-16");
        assert_eq!(handle.inspect(), "#<Encoding:UTF-16 (dummy)>");
    }

    #[test]
    fn encoding_is_loaded_from_entry() {
        let db = InMemoryDatabase::builtin();
        let entry = db.find_encoding(b"EUC-KR").unwrap();
        let handle = EncodingHandle::new(Arc::clone(entry));

        assert!(!entry.is_loaded());
        let encoding = handle.encoding();
        assert!(entry.is_loaded());
        assert_eq!(encoding.name(), "EUC-KR");
        assert_eq!(handle.inspect(), "#<Encoding:EUC-KR>");
    }
}
