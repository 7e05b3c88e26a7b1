//! Property-based test generators using proptest.
//!
//! Provides strategies for generating encoding names, their case
//! variants and lookup workloads.

use encreg_db::{EncodingDatabase, InMemoryDatabase};
use proptest::prelude::*;

/// Names of every entry and alias in the built-in database.
pub fn builtin_names() -> Vec<String> {
    let db = InMemoryDatabase::builtin();
    db.entries()
        .iter()
        .map(|entry| entry.name().to_string())
        .chain(db.aliases().iter().map(|alias| alias.name().to_string()))
        .collect()
}

/// Strategy for picking a known name from the built-in database.
pub fn known_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(builtin_names())
}

/// Strategy for a known name with the case of each letter randomized.
pub fn case_variant_strategy() -> impl Strategy<Value = (String, String)> {
    known_name_strategy().prop_flat_map(|name| {
        let len = name.len();
        (
            Just(name),
            prop::collection::vec(any::<bool>(), len..=len),
        )
            .prop_map(|(name, mask)| {
                let variant = name
                    .chars()
                    .zip(mask)
                    .map(|(c, upper)| {
                        if upper {
                            c.to_ascii_uppercase()
                        } else {
                            c.to_ascii_lowercase()
                        }
                    })
                    .collect();
                (name, variant)
            })
    })
}

/// Strategy for ASCII names shaped like encoding names.
pub fn encoding_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_.-]{0,23}").expect("Invalid regex")
}

/// Strategy for arbitrary name bytes, including non-ASCII.
pub fn raw_name_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

/// A single lookup against a registry.
#[derive(Debug, Clone)]
pub enum LookupOperation {
    /// Load a name and fetch its handle.
    Load {
        /// Name to load
        name: String,
    },
    /// Resolve a user-facing name.
    Find {
        /// Name to resolve
        name: String,
    },
    /// Read the default external encoding.
    DefaultExternal,
}

/// Strategy for generating lookup operations.
pub fn lookup_operation_strategy() -> impl Strategy<Value = LookupOperation> {
    prop_oneof![
        4 => known_name_strategy().prop_map(|name| LookupOperation::Load { name }),
        2 => prop_oneof![known_name_strategy(), encoding_name_strategy()]
            .prop_map(|name| LookupOperation::Find { name }),
        1 => Just(LookupOperation::DefaultExternal),
    ]
}

/// Strategy for generating a sequence of lookups.
pub fn lookup_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<LookupOperation>> {
    prop::collection::vec(lookup_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
