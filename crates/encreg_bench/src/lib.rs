//! Benchmark utilities.

#![warn(missing_docs)]

use encreg_core::{Config, ConstantTable, EncodingRegistry};
use encreg_db::{EncodingDatabase, InMemoryDatabase};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Opens a registry over the built-in database with no locale.
pub fn builtin_registry() -> EncodingRegistry {
    EncodingRegistry::open(
        Arc::new(InMemoryDatabase::builtin()),
        Arc::new(ConstantTable::with_locale(None)),
        Config::default(),
    )
    .expect("Failed to open registry")
}

/// Returns every encoding and alias name in `db`.
pub fn all_names(db: &dyn EncodingDatabase) -> Vec<String> {
    db.entries()
        .iter()
        .map(|entry| entry.name().to_string())
        .chain(db.aliases().iter().map(|alias| alias.name().to_string()))
        .collect()
}

/// Randomizes the letter case of `name`.
pub fn random_case(name: &str) -> String {
    let mut rng = rand::thread_rng();
    name.chars()
        .map(|c| {
            if rng.gen() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Generates `count` names drawn from `names`, each with random case.
pub fn shuffled_names(names: &[String], count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .filter_map(|_| names.choose(&mut rng))
        .map(|name| random_case(name))
        .collect()
}
