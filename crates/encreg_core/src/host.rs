//! Host runtime interface.

use crate::handle::EncodingHandle;
use crate::locale;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Services the registry consumes from the host runtime.
///
/// # Implementors
///
/// - [`ConstantTable`] - Collects constants in a sorted map
pub trait Host: Send + Sync {
    /// Binds the constant `name` to `handle`.
    ///
    /// Called during registry startup only. Name collisions are the
    /// host's to resolve.
    fn define_constant(&self, name: &str, handle: &Arc<EncodingHandle>);

    /// Returns the character-set name of the current locale, if known.
    fn locale_charmap(&self) -> Option<String>;
}

/// A host that records constants in a sorted map.
///
/// The first definition of a name wins; later ones are ignored.
///
/// # Example
///
/// ```rust
/// use encreg_core::{Config, ConstantTable, EncodingRegistry};
/// use encreg_db::InMemoryDatabase;
/// use std::sync::Arc;
///
/// let table = Arc::new(ConstantTable::with_locale(None));
/// let _registry = EncodingRegistry::open(
///     Arc::new(InMemoryDatabase::builtin()),
///     table.clone(),
///     Config::default(),
/// )
/// .unwrap();
///
/// assert_eq!(table.get("EUCJP").unwrap().name(), "EUC-JP");
/// assert!(table.get("UTF-8").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConstantTable {
    constants: RwLock<BTreeMap<String, Arc<EncodingHandle>>>,
    locale: Option<String>,
}

impl ConstantTable {
    /// Creates a table whose locale comes from the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_locale(locale::charmap_from_env())
    }

    /// Creates a table with an explicit locale charmap.
    #[must_use]
    pub fn with_locale(locale: Option<String>) -> Self {
        Self {
            constants: RwLock::new(BTreeMap::new()),
            locale,
        }
    }

    /// Returns the handle bound to `name`.
    pub fn get(&self, name: &str) -> Option<Arc<EncodingHandle>> {
        self.constants.read().get(name).cloned()
    }

    /// Returns all constant names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.constants.read().keys().cloned().collect()
    }

    /// Returns all constants bound to the entry named `encoding`.
    pub fn names_for(&self, encoding: &str) -> Vec<String> {
        self.constants
            .read()
            .iter()
            .filter(|(_, handle)| handle.name() == encoding)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the number of constants.
    pub fn len(&self) -> usize {
        self.constants.read().len()
    }

    /// Returns true if no constant has been defined.
    pub fn is_empty(&self) -> bool {
        self.constants.read().is_empty()
    }
}

impl Host for ConstantTable {
    fn define_constant(&self, name: &str, handle: &Arc<EncodingHandle>) {
        let mut constants = self.constants.write();
        match constants.get(name) {
            Some(existing) if !Arc::ptr_eq(existing, handle) => {
                debug!(
                    constant = name,
                    kept = existing.name(),
                    ignored = handle.name(),
                    "constant already defined"
                );
            }
            Some(_) => {}
            None => {
                constants.insert(name.to_string(), Arc::clone(handle));
            }
        }
    }

    fn locale_charmap(&self) -> Option<String> {
        self.locale.clone()
    }
}
