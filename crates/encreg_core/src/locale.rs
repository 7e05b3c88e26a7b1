//! Locale charmap detection from the process environment.

use std::env;

/// Environment variables consulted, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Returns the charmap of the current locale as set in the environment.
///
/// The first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` decides.
pub fn charmap_from_env() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| charmap_from_locale(&value))
}

/// Extracts the charmap from a locale name.
///
/// `language[_territory][.codeset][@modifier]` yields `codeset`; `C` and
/// `POSIX` yield `US-ASCII`. The glibc spelling `utf8` is reported as
/// `UTF-8`.
pub fn charmap_from_locale(locale: &str) -> Option<String> {
    let name = locale.split('@').next().unwrap_or(locale);
    if name == "C" || name == "POSIX" {
        return Some("US-ASCII".to_string());
    }

    let (_, codeset) = name.split_once('.')?;
    if codeset.is_empty() {
        return None;
    }
    if codeset.eq_ignore_ascii_case("utf8") {
        return Some("UTF-8".to_string());
    }
    Some(codeset.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeset_is_extracted() {
        assert_eq!(charmap_from_locale("en_US.UTF-8").as_deref(), Some("UTF-8"));
        assert_eq!(charmap_from_locale("ja_JP.eucJP").as_deref(), Some("eucJP"));
        assert_eq!(
            charmap_from_locale("de_DE.ISO-8859-15@euro").as_deref(),
            Some("ISO-8859-15")
        );
    }

    #[test]
    fn glibc_utf8_spelling() {
        assert_eq!(charmap_from_locale("en_GB.utf8").as_deref(), Some("UTF-8"));
        assert_eq!(charmap_from_locale("C.UTF8").as_deref(), Some("UTF-8"));
    }

    #[test]
    fn posix_locales_are_ascii() {
        assert_eq!(charmap_from_locale("C").as_deref(), Some("US-ASCII"));
        assert_eq!(charmap_from_locale("POSIX").as_deref(), Some("US-ASCII"));
    }

    #[test]
    fn missing_codeset() {
        assert_eq!(charmap_from_locale("en_US"), None);
        assert_eq!(charmap_from_locale("en_US."), None);
        assert_eq!(charmap_from_locale(""), None);
    }
}
