//! Pseudo-names resolved from runtime state instead of the database.

use crate::error::RegistryResult;
use crate::registry::EncodingRegistry;
use encreg_db::Encoding;
use std::fmt;
use std::sync::Arc;

/// One of the four names that denote a runtime setting.
///
/// Recognized case-insensitively before any database lookup, so a
/// database entry spelled like one of them is never reached by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialName {
    /// The locale's character set.
    Locale,
    /// The default external encoding.
    External,
    /// The default internal encoding, possibly unset.
    Internal,
    /// The encoding of file system paths.
    Filesystem,
}

impl SpecialName {
    /// All special names, in recognition order.
    pub const ALL: [SpecialName; 4] = [
        SpecialName::Locale,
        SpecialName::External,
        SpecialName::Internal,
        SpecialName::Filesystem,
    ];

    /// Returns the lowercase spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locale => "locale",
            Self::External => "external",
            Self::Internal => "internal",
            Self::Filesystem => "filesystem",
        }
    }

    /// Recognizes `name` in any letter case.
    pub fn parse(name: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|special| name.eq_ignore_ascii_case(special.as_str().as_bytes()))
    }

    /// Resolves the name against the registry's current state.
    ///
    /// Only [`SpecialName::Internal`] can resolve to `None`.
    pub fn resolve(self, registry: &EncodingRegistry) -> RegistryResult<Option<Arc<Encoding>>> {
        match self {
            Self::Locale => Ok(Some(registry.locale_encoding())),
            Self::External => registry.default_external_encoding().map(Some),
            Self::Internal => Ok(registry.default_internal_encoding()),
            // Windows uses the ANSI code page here; that case is not modeled.
            Self::Filesystem => registry.default_external_encoding().map(Some),
        }
    }
}

impl fmt::Display for SpecialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_any_case() {
        assert_eq!(SpecialName::parse(b"locale"), Some(SpecialName::Locale));
        assert_eq!(SpecialName::parse(b"EXTERNAL"), Some(SpecialName::External));
        assert_eq!(SpecialName::parse(b"Internal"), Some(SpecialName::Internal));
        assert_eq!(SpecialName::parse(b"fileSystem"), Some(SpecialName::Filesystem));
    }

    #[test]
    fn parse_rejects_other_names() {
        assert_eq!(SpecialName::parse(b"UTF-8"), None);
        assert_eq!(SpecialName::parse(b"locales"), None);
        assert_eq!(SpecialName::parse(b""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for special in SpecialName::ALL {
            assert_eq!(SpecialName::parse(special.to_string().as_bytes()), Some(special));
        }
    }
}
