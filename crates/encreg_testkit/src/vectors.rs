//! Constant-derivation test vectors.
//!
//! These vectors pin down the constant names published for an encoding or
//! alias name, and can be exported as JSON for hosts written in other
//! languages.

use serde::{Deserialize, Serialize};

/// A test vector that can be shared across languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Input name (hex-encoded, since names are bytes).
    pub name_hex: String,
    /// Expected constants, in publication order.
    pub expected: Vec<String>,
}

impl ConstantVector {
    fn new(id: &str, description: &str, name: &[u8], expected: &[&str]) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            name_hex: hex_encode(name),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Decodes the input name.
    pub fn name(&self) -> Vec<u8> {
        hex_decode(&self.name_hex)
    }
}

/// Constant-derivation vectors.
pub fn constant_vectors() -> Vec<ConstantVector> {
    vec![
        ConstantVector::new("utf_8", "Hyphen becomes underscore", b"UTF-8", &["UTF_8"]),
        ConstantVector::new(
            "ascii_8bit_lower",
            "All-lowercase name gets only the uppercase form",
            b"ascii-8bit",
            &["ASCII_8BIT"],
        ),
        ConstantVector::new(
            "shift_jis",
            "Valid mixed-case name gets itself and the uppercase form",
            b"Shift_JIS",
            &["Shift_JIS", "SHIFT_JIS"],
        ),
        ConstantVector::new(
            "euc_jp_lower_first",
            "Lowercase first letter is capitalized",
            b"eucJP",
            &["EucJP", "EUCJP"],
        ),
        ConstantVector::new("leading_digit", "Leading digit publishes nothing", b"8BIT", &[]),
        ConstantVector::new("numeric_alias", "Numeric alias publishes nothing", b"646", &[]),
        ConstantVector::new("empty", "Empty name publishes nothing", b"", &[]),
        ConstantVector::new("cp65001", "Valid uppercase name is kept once", b"CP65001", &["CP65001"]),
        ConstantVector::new(
            "ansi_x3",
            "Dots and hyphens both become underscores",
            b"ANSI_X3.4-1968",
            &["ANSI_X3_4_1968"],
        ),
        ConstantVector::new(
            "windows_31j",
            "Invalid mixed-case name gets both forms",
            b"Windows-31J",
            &["Windows_31J", "WINDOWS_31J"],
        ),
        ConstantVector::new(
            "leading_hyphen",
            "Leading symbol becomes underscore",
            b"-Abc",
            &["_Abc", "_ABC"],
        ),
        ConstantVector::new(
            "lower_then_upper",
            "Both passes agree, so one name",
            b"aB",
            &["AB"],
        ),
        ConstantVector::new(
            "non_ascii",
            "Non-ASCII bytes become underscores",
            &[b'A', 0xc3, 0xa9, b'b'],
            &["A__b", "A__B"],
        ),
    ]
}

/// Generate all test vectors as JSON for cross-language use.
pub fn all_vectors_json() -> String {
    let vectors = AllTestVectors {
        constants: constant_vectors(),
    };

    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    constants: Vec<ConstantVector>,
}

/// Encodes bytes as lowercase hex.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes lowercase or uppercase hex; panics on malformed input.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("Invalid hex"))
        .collect()
}
