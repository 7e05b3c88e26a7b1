//! Test fixtures and registry helpers.
//!
//! Provides a host that records every constant definition and
//! convenience functions for opening registries in tests.

use encreg_core::{Config, EncodingHandle, EncodingRegistry, Host};
use encreg_db::{EncodingDatabase, EncodingTraits, InMemoryDatabase};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One call to [`Host::define_constant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDefinition {
    /// Constant name.
    pub name: String,
    /// Name of the entry the constant was bound to.
    pub encoding: String,
}

/// A host that keeps every constant definition in call order.
///
/// Unlike [`encreg_core::ConstantTable`] it does not resolve collisions,
/// so tests can see exactly what the registry published.
#[derive(Debug, Default)]
pub struct RecordingHost {
    definitions: Mutex<Vec<(ConstantDefinition, Arc<EncodingHandle>)>>,
    locale: Option<String>,
}

impl RecordingHost {
    /// Creates a host with no locale charmap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host reporting `locale` as its charmap.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            definitions: Mutex::new(Vec::new()),
            locale: Some(locale.into()),
        }
    }

    /// Returns all definitions in call order.
    pub fn definitions(&self) -> Vec<ConstantDefinition> {
        self.definitions
            .lock()
            .iter()
            .map(|(definition, _)| definition.clone())
            .collect()
    }

    /// Returns the handles bound to `name`, in call order.
    pub fn handles_for(&self, name: &str) -> Vec<Arc<EncodingHandle>> {
        self.definitions
            .lock()
            .iter()
            .filter(|(definition, _)| definition.name == name)
            .map(|(_, handle)| Arc::clone(handle))
            .collect()
    }

    /// Returns constants defined more than once, with the entries each was
    /// bound to.
    pub fn collisions(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (definition, _) in self.definitions.lock().iter() {
            grouped
                .entry(definition.name.clone())
                .or_default()
                .push(definition.encoding.clone());
        }
        grouped.retain(|_, encodings| encodings.len() > 1);
        grouped
    }

    /// Returns the number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.lock().len()
    }

    /// Returns true if nothing was defined.
    pub fn is_empty(&self) -> bool {
        self.definitions.lock().is_empty()
    }
}

impl Host for RecordingHost {
    fn define_constant(&self, name: &str, handle: &Arc<EncodingHandle>) {
        let definition = ConstantDefinition {
            name: name.to_string(),
            encoding: handle.name().to_string(),
        };
        self.definitions.lock().push((definition, Arc::clone(handle)));
    }

    fn locale_charmap(&self) -> Option<String> {
        self.locale.clone()
    }
}

/// A registry together with the host it published to.
pub struct TestRegistry {
    /// The registry instance.
    pub registry: EncodingRegistry,
    /// The host that recorded constants.
    pub host: Arc<RecordingHost>,
}

impl TestRegistry {
    /// Opens a registry over the built-in database.
    pub fn builtin() -> Self {
        Self::open(InMemoryDatabase::builtin(), RecordingHost::new(), Config::default())
    }

    /// Opens a registry over the built-in database with a locale charmap.
    pub fn with_locale(locale: &str) -> Self {
        Self::open(
            InMemoryDatabase::builtin(),
            RecordingHost::with_locale(locale),
            Config::default(),
        )
    }

    /// Opens a registry over the built-in database with `config`.
    pub fn with_config(config: Config) -> Self {
        Self::open(InMemoryDatabase::builtin(), RecordingHost::new(), config)
    }

    /// Opens a registry over any database.
    pub fn open(db: impl EncodingDatabase + 'static, host: RecordingHost, config: Config) -> Self {
        let host = Arc::new(host);
        let registry = EncodingRegistry::open(Arc::new(db), host.clone(), config)
            .expect("Failed to open registry");
        Self { registry, host }
    }
}

impl std::ops::Deref for TestRegistry {
    type Target = EncodingRegistry;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

/// Runs a test with a registry over the built-in database.
///
/// # Example
///
/// ```rust
/// use encreg_testkit::with_registry;
///
/// with_registry(|registry| {
///     assert!(registry.find_encoding_entry(b"EUC-JP").is_some());
/// });
/// ```
pub fn with_registry<F, R>(f: F) -> R
where
    F: FnOnce(&EncodingRegistry) -> R,
{
    let test_registry = TestRegistry::builtin();
    f(&test_registry.registry)
}

/// Runs a test with a registry and the host it published to.
pub fn with_recording_registry<F, R>(f: F) -> R
where
    F: FnOnce(&EncodingRegistry, &RecordingHost) -> R,
{
    let test_registry = TestRegistry::builtin();
    f(&test_registry.registry, &test_registry.host)
}

/// Database scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates the smallest database a registry accepts.
    pub fn minimal_database() -> InMemoryDatabase {
        let mut db = InMemoryDatabase::new();
        db.define_encoding("ASCII-8BIT", EncodingTraits::single_byte())
            .expect("Failed to define encoding");
        db.define_encoding("US-ASCII", EncodingTraits::single_byte())
            .expect("Failed to define encoding");
        db
    }

    /// Creates a database with `count` extra single-byte encodings named
    /// `X-ENC-<n>`, each with one alias `x_alias_<n>`.
    pub fn synthetic_database(count: usize) -> InMemoryDatabase {
        let mut db = minimal_database();
        for i in 0..count {
            let name = format!("X-ENC-{i}");
            db.define_encoding(&name, EncodingTraits::single_byte())
                .expect("Failed to define encoding");
            db.define_alias(&format!("x_alias_{i}"), &name)
                .expect("Failed to define alias");
        }
        db
    }
}
