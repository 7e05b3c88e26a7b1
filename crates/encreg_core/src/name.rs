//! Lookup arguments.

use crate::handle::EncodingHandle;
use encreg_db::Encoding;
use std::fmt;
use std::sync::Arc;

/// An encoding name as passed in from user code.
///
/// Besides its bytes, a name remembers whether its own encoding can spell
/// ASCII. Lookups reject names that cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingName {
    bytes: Vec<u8>,
    ascii_compatible: bool,
}

impl EncodingName {
    /// Creates a name in an ASCII-compatible encoding.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            ascii_compatible: true,
        }
    }

    /// Creates a name whose bytes are in `encoding`.
    pub fn with_encoding(bytes: impl Into<Vec<u8>>, encoding: &Encoding) -> Self {
        Self {
            bytes: bytes.into(),
            ascii_compatible: encoding.is_ascii_compatible(),
        }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns true if the name's encoding can spell ASCII.
    pub fn is_ascii_compatible(&self) -> bool {
        self.ascii_compatible
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

impl From<&str> for EncodingName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EncodingName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&[u8]> for EncodingName {
    fn from(name: &[u8]) -> Self {
        Self::new(name)
    }
}

impl From<Vec<u8>> for EncodingName {
    fn from(name: Vec<u8>) -> Self {
        Self::new(name)
    }
}

/// The argument shapes accepted where user code names an encoding.
#[derive(Debug, Clone)]
pub enum EncodingArg {
    /// An already resolved handle.
    Handle(Arc<EncodingHandle>),
    /// A value coerced to a name.
    Name(EncodingName),
    /// No encoding.
    Nil,
}

impl From<Arc<EncodingHandle>> for EncodingArg {
    fn from(handle: Arc<EncodingHandle>) -> Self {
        Self::Handle(handle)
    }
}

impl From<EncodingName> for EncodingArg {
    fn from(name: EncodingName) -> Self {
        Self::Name(name)
    }
}

impl From<&str> for EncodingArg {
    fn from(name: &str) -> Self {
        Self::Name(EncodingName::from(name))
    }
}

impl From<Option<&str>> for EncodingArg {
    fn from(name: Option<&str>) -> Self {
        name.map_or(Self::Nil, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encreg_db::{EncodingDatabase, InMemoryDatabase};

    #[test]
    fn name_defaults_to_ascii_compatible() {
        let name = EncodingName::from("UTF-8");
        assert!(name.is_ascii_compatible());
        assert_eq!(name.as_bytes(), b"UTF-8");
        assert_eq!(name.to_string(), "UTF-8");
    }

    #[test]
    fn name_takes_compatibility_from_encoding() {
        let db = InMemoryDatabase::builtin();
        let utf16 = db.find_encoding(b"UTF-16LE").unwrap().encoding();
        let name = EncodingName::with_encoding(vec![b'U', 0], &utf16);
        assert!(!name.is_ascii_compatible());
    }

    #[test]
    fn arg_conversions() {
        assert!(matches!(EncodingArg::from("EUC-JP"), EncodingArg::Name(_)));
        assert!(matches!(EncodingArg::from(None::<&str>), EncodingArg::Nil));
        assert!(matches!(EncodingArg::from(Some("ASCII")), EncodingArg::Name(_)));
    }
}
