//! Constant names for encodings and aliases.
//!
//! Every encoding name and alias is exposed to user code as one or two
//! constants. A name that already is a constant identifier (uppercase
//! first letter, then letters, digits and underscores) is published as is.
//! Other names are normalized: a lowercase first letter is uppercased and
//! every byte that is not a letter or digit becomes `_`. Names containing
//! lowercase letters also get an all-uppercase form.
//!
//! | Name         | Constants                  |
//! |--------------|----------------------------|
//! | `UTF-8`      | `UTF_8`                    |
//! | `ascii-8bit` | `ASCII_8BIT`               |
//! | `Shift_JIS`  | `Shift_JIS`, `SHIFT_JIS`   |
//! | `eucJP`      | `EucJP`, `EUCJP`           |
//! | `8BIT`       | (none)                     |

use crate::handle::EncodingHandle;
use crate::host::Host;
use std::sync::Arc;

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Names produced here only ever contain ASCII bytes.
fn ascii_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Returns the constant names to publish for `name`, in publication order.
///
/// The result holds zero, one or two distinct names.
pub fn derive_constant_names(name: &[u8]) -> Vec<String> {
    let mut names = Vec::with_capacity(2);

    let Some(&first) = name.first() else {
        return names;
    };
    if first.is_ascii_digit() {
        return names;
    }

    let end = name.len();
    let mut s = 0;
    let mut has_upper = false;
    let mut has_lower = false;

    if first.is_ascii_uppercase() {
        has_upper = true;
        s += 1;
        while s < end && is_ident_byte(name[s]) {
            if name[s].is_ascii_lowercase() {
                has_lower = true;
            }
            s += 1;
        }
    }

    let valid = s >= end;
    if valid {
        names.push(ascii_to_string(name));
        if !has_lower {
            return names;
        }
    }

    // Case state carries over from the prefix scan.
    while s < end && !(has_upper && has_lower) {
        has_lower |= name[s].is_ascii_lowercase();
        has_upper |= name[s].is_ascii_uppercase();
        s += 1;
    }

    let mut constant = name.to_vec();
    if !valid {
        constant[0] = constant[0].to_ascii_uppercase();
        for byte in &mut constant {
            if !byte.is_ascii_alphanumeric() {
                *byte = b'_';
            }
        }
        if has_upper {
            names.push(ascii_to_string(&constant));
        }
    }
    if has_lower {
        constant.make_ascii_uppercase();
        let upper = ascii_to_string(&constant);
        // "aB" normalizes to "AB" in both passes.
        if names.last() != Some(&upper) {
            names.push(upper);
        }
    }
    names
}

/// Publishes the constants for `name` through `host`, bound to `handle`.
///
/// Returns the number of constants published. Collisions are resolved by
/// the host.
pub fn define_constants(host: &dyn Host, handle: &Arc<EncodingHandle>, name: &[u8]) -> usize {
    let names = derive_constant_names(name);
    for constant in &names {
        host.define_constant(constant, handle);
    }
    names.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn derive(name: &str) -> Vec<String> {
        derive_constant_names(name.as_bytes())
    }

    #[test]
    fn uppercase_with_hyphen_is_normalized() {
        assert_eq!(derive("UTF-8"), vec!["UTF_8"]);
        assert_eq!(derive("ISO-8859-1"), vec!["ISO_8859_1"]);
        assert_eq!(derive("ANSI_X3.4-1968"), vec!["ANSI_X3_4_1968"]);
    }

    #[test]
    fn lowercase_only_gets_uppercase_form() {
        assert_eq!(derive("ascii-8bit"), vec!["ASCII_8BIT"]);
        assert_eq!(derive("binary"), vec!["BINARY"]);
    }

    #[test]
    fn valid_mixed_case_gets_both_forms() {
        assert_eq!(derive("Shift_JIS"), vec!["Shift_JIS", "SHIFT_JIS"]);
        assert_eq!(derive("Big5"), vec!["Big5", "BIG5"]);
    }

    #[test]
    fn invalid_mixed_case_gets_both_forms() {
        assert_eq!(derive("eucJP"), vec!["EucJP", "EUCJP"]);
        assert_eq!(derive("Windows-31J"), vec!["Windows_31J", "WINDOWS_31J"]);
        assert_eq!(derive("csWindows31J"), vec!["CsWindows31J", "CSWINDOWS31J"]);
        assert_eq!(derive("Emacs-Mule"), vec!["Emacs_Mule", "EMACS_MULE"]);
    }

    #[test]
    fn already_valid_uppercase_is_published_once() {
        assert_eq!(derive("ASCII"), vec!["ASCII"]);
        assert_eq!(derive("CP65001"), vec!["CP65001"]);
        assert_eq!(derive("UTF_8"), vec!["UTF_8"]);
    }

    #[test]
    fn leading_digit_publishes_nothing() {
        assert!(derive("8BIT").is_empty());
        assert!(derive("646").is_empty());
    }

    #[test]
    fn empty_name_publishes_nothing() {
        assert!(derive("").is_empty());
    }

    #[test]
    fn leading_symbol_without_letters() {
        // Neither case present: nothing to publish.
        assert!(derive("-").is_empty());
        assert!(derive("_1").is_empty());
    }

    #[test]
    fn leading_symbol_with_letters() {
        assert_eq!(derive("-Abc"), vec!["_Abc", "_ABC"]);
        assert_eq!(derive("_X"), vec!["_X"]);
    }

    #[test]
    fn lowercase_first_letter_only() {
        assert_eq!(derive("aB"), vec!["AB"]);
        assert_eq!(derive("xUTF"), vec!["XUTF"]);
    }

    #[test]
    fn non_ascii_bytes_become_underscores() {
        assert_eq!(
            derive_constant_names(&[b'A', 0xc3, 0xa9, b'b']),
            vec!["A__b", "A__B"]
        );
    }

    proptest! {
        #[test]
        fn at_most_two_distinct_identifiers(name in prop::collection::vec(any::<u8>(), 0..32)) {
            let names = derive_constant_names(&name);
            prop_assert!(names.len() <= 2);
            if names.len() == 2 {
                prop_assert_ne!(&names[0], &names[1]);
            }
            for constant in &names {
                let bytes = constant.as_bytes();
                prop_assert!(bytes[0].is_ascii_uppercase() || bytes[0] == b'_');
                prop_assert!(bytes.iter().all(|&b| is_ident_byte(b)));
                prop_assert_eq!(bytes.len(), name.len());
            }
        }

        #[test]
        fn last_name_has_no_lowercase_when_name_has_lowercase(name in "[A-Za-z][A-Za-z0-9_.-]{0,20}") {
            let names = derive(&name);
            if name.bytes().any(|b| b.is_ascii_lowercase()) {
                let last = names.last().unwrap();
                prop_assert!(!last.bytes().any(|b| b.is_ascii_lowercase()));
            }
        }
    }
}
