//! The encoding registry.

use crate::cache::{CacheStats, EncodingIndexCache, EntryTable};
use crate::config::Config;
use crate::constants::define_constants;
use crate::error::{DefaultRole, RegistryError, RegistryResult};
use crate::handle::EncodingHandle;
use crate::host::Host;
use crate::name::{EncodingArg, EncodingName};
use crate::special::SpecialName;
use crate::stats::RegistryStats;
use encreg_db::{Encoding, EncodingDatabase, Entry, ASCII_8BIT, US_ASCII};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Runtime default encodings.
#[derive(Debug, Default)]
struct Defaults {
    external: Option<Arc<Encoding>>,
    internal: Option<Arc<Encoding>>,
}

/// Resolves encoding names and caches the handles exposed to user code.
///
/// The registry provides:
/// - Case-insensitive lookup of encodings, then aliases
/// - One [`EncodingHandle`] per database entry, created at open
/// - A lazily grown cache from encoding index to handle
/// - Default external and internal encodings
/// - Resolution of the `locale`, `external`, `internal` and `filesystem`
///   pseudo-names
///
/// ## Lifecycle
///
/// [`EncodingRegistry::open`] walks the database once, creates handles,
/// publishes constants through the [`Host`] and installs configured
/// defaults. The registry is not observable before that finishes. Afterwards
/// every method takes `&self` and the registry can be shared across
/// threads.
pub struct EncodingRegistry {
    /// Source of entries and aliases.
    db: Arc<dyn EncodingDatabase>,
    /// Host services.
    host: Arc<dyn Host>,
    /// Entry index to handle; immutable after open.
    entries: EntryTable,
    /// Encoding index to handle; grows on load.
    by_index: EncodingIndexCache,
    /// Default external and internal encodings.
    defaults: RwLock<Defaults>,
    /// Locale charmap that takes precedence over the host's.
    locale_override: Option<String>,
    /// Fallback when the locale does not resolve.
    ascii_8bit: Arc<Entry>,
    /// Lazy default external encoding.
    us_ascii: Arc<Entry>,
    /// Lookup counters.
    stats: RegistryStats,
}

impl EncodingRegistry {
    /// Opens a registry over `db`.
    ///
    /// # Errors
    ///
    /// Returns a fatal error if:
    /// - The database lacks ASCII-8BIT or US-ASCII
    /// - Entry indices are not dense, or an alias points past the table
    /// - A configured default encoding name does not resolve
    pub fn open(
        db: Arc<dyn EncodingDatabase>,
        host: Arc<dyn Host>,
        config: Config,
    ) -> RegistryResult<Self> {
        let ascii_8bit = required_entry(db.as_ref(), ASCII_8BIT)?;
        let us_ascii = required_entry(db.as_ref(), US_ASCII)?;
        let entries = EntryTable::build(db.as_ref())?;

        let registry = Self {
            db,
            host,
            entries,
            by_index: EncodingIndexCache::new(),
            defaults: RwLock::new(Defaults::default()),
            locale_override: config.locale_name().map(str::to_string),
            ascii_8bit,
            us_ascii,
            stats: RegistryStats::new(),
        };

        registry.define_encoding_constants();
        registry.define_alias_constants()?;
        registry.install_defaults(&config)?;
        Ok(registry)
    }

    fn define_encoding_constants(&self) {
        let mut count = 0;
        for entry in self.db.entries() {
            if let Some(handle) = self.entries.get(entry.index()) {
                count += define_constants(self.host.as_ref(), handle, entry.name_bytes());
            }
        }
        self.stats.record_constants(count);
        debug!(
            encodings = self.entries.len(),
            constants = count,
            "defined encoding constants"
        );
    }

    fn define_alias_constants(&self) -> RegistryResult<()> {
        let mut count = 0;
        for alias in self.db.aliases() {
            let handle = self.entries.get(alias.target()).ok_or_else(|| {
                RegistryError::corrupt_database(format!(
                    "alias {} points to missing {}",
                    alias.name(),
                    alias.target()
                ))
            })?;
            count += define_constants(self.host.as_ref(), handle, alias.name_bytes());
        }
        self.stats.record_constants(count);
        debug!(
            aliases = self.db.aliases().len(),
            constants = count,
            "defined alias constants"
        );
        Ok(())
    }

    fn install_defaults(&self, config: &Config) -> RegistryResult<()> {
        if let Some(name) = config.external_name() {
            let encoding = self
                .load_encoding(name.as_bytes())
                .ok_or_else(|| RegistryError::unknown_default(DefaultRole::External, name))?;
            self.set_default_external(encoding);
        } else if config.external_from_locale {
            self.set_default_external(self.locale_encoding());
        }

        if let Some(name) = config.internal_name() {
            let encoding = self
                .load_encoding(name.as_bytes())
                .ok_or_else(|| RegistryError::unknown_default(DefaultRole::Internal, name))?;
            self.set_default_internal(Some(encoding));
        }
        Ok(())
    }

    /// Returns the underlying database.
    pub fn database(&self) -> &dyn EncodingDatabase {
        self.db.as_ref()
    }

    /// Returns every handle in entry-index order.
    pub fn handles(&self) -> &[Arc<EncodingHandle>] {
        self.entries.as_slice()
    }

    /// Returns the lookup counters.
    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// Returns the occupancy of the encoding-index cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.by_index.stats()
    }

    // === Name lookup ===

    /// Looks up an encoding entry by canonical name, ignoring case.
    pub fn find_encoding_entry(&self, name: &[u8]) -> Option<&Arc<Entry>> {
        self.db.find_encoding(name)
    }

    /// Looks up the entry an alias resolves to, ignoring case.
    pub fn find_alias_entry(&self, name: &[u8]) -> Option<&Arc<Entry>> {
        self.db.find_alias(name)
    }

    /// Looks up `name` as an encoding, then as an alias.
    pub fn find_encoding_or_alias_entry(&self, name: &[u8]) -> Option<&Arc<Entry>> {
        self.find_encoding_entry(name)
            .or_else(|| self.find_alias_entry(name))
    }

    // === Loading and the encoding-index cache ===

    /// Resolves `name` and loads its encoding, caching the entry's handle
    /// under the encoding's index.
    ///
    /// Returns `None` if the name is neither an encoding nor an alias.
    pub fn load_encoding(&self, name: &[u8]) -> Option<Arc<Encoding>> {
        match self.find_encoding_or_alias_entry(name) {
            Some(entry) => self.load_entry(entry),
            None => {
                self.stats.record_lookup_failure();
                None
            }
        }
    }

    fn load_entry(&self, entry: &Entry) -> Option<Arc<Encoding>> {
        let handle = self.entries.get(entry.index())?;
        let encoding = entry.encoding();
        let grew = self.by_index.publish(encoding.index(), handle);
        self.stats.record_load(grew);
        Some(encoding)
    }

    /// Returns the handle for a loaded encoding.
    ///
    /// Answers from the encoding-index cache when possible and otherwise
    /// loads the encoding by name, which fills the cache. Either way the
    /// returned handle's entry must have loaded this exact object.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownEncoding`] if the database has no
    /// entry or alias by the encoding's name, or if the encoding was loaded
    /// from another database.
    pub fn get_encoding(&self, encoding: &Encoding) -> RegistryResult<Arc<EncodingHandle>> {
        if let Some(handle) = self.by_index.get(encoding.index()) {
            if handle.entry().owns(encoding) {
                self.stats.record_hit();
                return Ok(handle);
            }
        }

        self.stats.record_miss();
        trace!(
            encoding = encoding.name(),
            index = %encoding.index(),
            "encoding cache miss"
        );
        let Some(entry) = self.find_encoding_or_alias_entry(encoding.name_bytes()) else {
            self.stats.record_lookup_failure();
            return Err(RegistryError::unknown_encoding(encoding.name()));
        };
        self.load_entry(entry)
            .filter(|_| entry.owns(encoding))
            .and_then(|_| self.entries.get(entry.index()).cloned())
            .ok_or_else(|| RegistryError::unknown_encoding(encoding.name()))
    }

    /// Wraps an optional encoding in its handle.
    pub fn convert_to_handle(
        &self,
        encoding: Option<&Encoding>,
    ) -> RegistryResult<Option<Arc<EncodingHandle>>> {
        encoding.map(|e| self.get_encoding(e)).transpose()
    }

    /// Returns the handle created for `entry` when the registry opened.
    pub fn handle_for_entry(&self, entry: &Entry) -> Option<&Arc<EncodingHandle>> {
        self.entries.get(entry.index())
    }

    // === Defaults ===

    /// Returns the host locale's charmap, honoring the configured override.
    pub fn locale_charmap(&self) -> Option<String> {
        self.locale_override
            .clone()
            .or_else(|| self.host.locale_charmap())
    }

    /// Returns the locale's encoding, or ASCII-8BIT if the locale charmap
    /// is unknown.
    pub fn locale_encoding(&self) -> Arc<Encoding> {
        let charmap = self.locale_charmap();
        let entry = charmap
            .as_deref()
            .and_then(|name| self.find_encoding_or_alias_entry(name.as_bytes()));

        match entry {
            Some(entry) => entry.encoding(),
            None => {
                match &charmap {
                    Some(name) => warn!(charmap = %name, fallback = ASCII_8BIT, "unknown locale charmap"),
                    None => debug!(fallback = ASCII_8BIT, "no locale charmap"),
                }
                self.ascii_8bit.encoding()
            }
        }
    }

    /// Returns the default external encoding, installing US-ASCII first if
    /// none is set.
    ///
    /// # Errors
    ///
    /// Never fails for a registry that opened successfully; the error is
    /// kept for hosts with custom databases.
    pub fn default_external_encoding(&self) -> RegistryResult<Arc<Encoding>> {
        let current = self.defaults.read().external.clone();
        if let Some(encoding) = current {
            return Ok(encoding);
        }

        let mut defaults = self.defaults.write();
        if let Some(encoding) = &defaults.external {
            return Ok(Arc::clone(encoding));
        }
        let encoding = self
            .load_entry(&self.us_ascii)
            .ok_or_else(|| RegistryError::missing_builtin(US_ASCII))?;
        debug!(encoding = encoding.name(), "installing default external encoding");
        defaults.external = Some(Arc::clone(&encoding));
        Ok(encoding)
    }

    /// Returns the default internal encoding, if set.
    pub fn default_internal_encoding(&self) -> Option<Arc<Encoding>> {
        self.defaults.read().internal.clone()
    }

    /// Returns the handle of the default external encoding.
    ///
    /// Never absent: if no default is set, US-ASCII is installed and
    /// returned.
    pub fn default_external(&self) -> RegistryResult<Arc<EncodingHandle>> {
        let encoding = self.default_external_encoding()?;
        self.get_encoding(&encoding)
    }

    /// Returns the handle of the default internal encoding, if set.
    pub fn default_internal(&self) -> RegistryResult<Option<Arc<EncodingHandle>>> {
        self.convert_to_handle(self.default_internal_encoding().as_deref())
    }

    /// Sets the default external encoding.
    pub fn set_default_external(&self, encoding: Arc<Encoding>) {
        debug!(encoding = encoding.name(), "default external encoding set");
        self.defaults.write().external = Some(encoding);
    }

    /// Sets or clears the default internal encoding.
    pub fn set_default_internal(&self, encoding: Option<Arc<Encoding>>) {
        debug!(
            encoding = encoding.as_ref().map(|e| e.name()),
            "default internal encoding set"
        );
        self.defaults.write().internal = encoding;
    }

    // === User-facing resolution ===

    /// Resolves a user-supplied name to an encoding.
    ///
    /// Special names are tried first; `internal` resolves to `None` when no
    /// internal default is set.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NonAsciiName`] if the name's encoding cannot
    ///   spell ASCII
    /// - [`RegistryError::UnknownEncoding`] if nothing matches
    pub fn find_encoding(&self, name: &EncodingName) -> RegistryResult<Option<Arc<Encoding>>> {
        check_ascii_name(name)?;

        if let Some(special) = SpecialName::parse(name.as_bytes()) {
            return special.resolve(self);
        }
        self.find_entry_with_error(name.as_bytes())
            .map(|entry| Some(entry.encoding()))
    }

    /// Resolves a user-supplied name to a database entry.
    ///
    /// # Errors
    ///
    /// Same as [`EncodingRegistry::find_encoding`].
    pub fn find_entry(&self, name: &EncodingName) -> RegistryResult<Option<&Arc<Entry>>> {
        check_ascii_name(name)?;

        if let Some(special) = SpecialName::parse(name.as_bytes()) {
            let encoding = special.resolve(self)?;
            return Ok(encoding.and_then(|e| self.find_encoding_entry(e.name_bytes())));
        }
        self.find_entry_with_error(name.as_bytes()).map(Some)
    }

    /// Resolves a user-supplied name to the handle of its entry.
    ///
    /// # Errors
    ///
    /// Same as [`EncodingRegistry::find_encoding`].
    pub fn handle_for_name(
        &self,
        name: &EncodingName,
    ) -> RegistryResult<Option<Arc<EncodingHandle>>> {
        Ok(self
            .find_entry(name)?
            .and_then(|entry| self.handle_for_entry(entry))
            .cloned())
    }

    /// Coerces an argument to an encoding.
    ///
    /// # Errors
    ///
    /// Name arguments fail as in [`EncodingRegistry::find_encoding`].
    pub fn encoding_from_arg(&self, arg: &EncodingArg) -> RegistryResult<Option<Arc<Encoding>>> {
        match arg {
            EncodingArg::Handle(handle) => Ok(Some(handle.encoding())),
            EncodingArg::Name(name) => self.find_encoding(name),
            EncodingArg::Nil => Ok(None),
        }
    }

    fn find_entry_with_error(&self, name: &[u8]) -> RegistryResult<&Arc<Entry>> {
        self.find_encoding_or_alias_entry(name).ok_or_else(|| {
            self.stats.record_lookup_failure();
            RegistryError::unknown_encoding(name)
        })
    }
}

fn required_entry(db: &dyn EncodingDatabase, name: &str) -> RegistryResult<Arc<Entry>> {
    db.find_encoding(name.as_bytes())
        .cloned()
        .ok_or_else(|| RegistryError::missing_builtin(name))
}

fn check_ascii_name(name: &EncodingName) -> RegistryResult<()> {
    if name.is_ascii_compatible() {
        Ok(())
    } else {
        Err(RegistryError::NonAsciiName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ConstantTable;
    use crate::ErrorKind;
    use encreg_db::{EncodingTraits, InMemoryDatabase};

    fn open_with(config: Config, locale: Option<&str>) -> (EncodingRegistry, Arc<ConstantTable>) {
        let host = Arc::new(ConstantTable::with_locale(locale.map(str::to_string)));
        let registry = EncodingRegistry::open(
            Arc::new(InMemoryDatabase::builtin()),
            host.clone(),
            config,
        )
        .unwrap();
        (registry, host)
    }

    fn open() -> EncodingRegistry {
        open_with(Config::default(), Some("UTF-8")).0
    }

    #[test]
    fn find_entry_tables() {
        let registry = open();

        let utf8 = registry.find_encoding_entry(b"utf-8").unwrap();
        assert_eq!(utf8.name(), "UTF-8");
        assert!(registry.find_alias_entry(b"utf-8").is_none());

        let via_alias = registry.find_alias_entry(b"cp65001").unwrap();
        assert!(Arc::ptr_eq(via_alias, utf8));
        assert!(registry.find_encoding_entry(b"CP65001").is_none());

        let either = registry.find_encoding_or_alias_entry(b"Cp65001").unwrap();
        assert!(Arc::ptr_eq(either, utf8));
        assert!(registry.find_encoding_or_alias_entry(b"nope").is_none());
    }

    #[test]
    fn load_populates_cache() {
        let registry = open();
        let before = registry.stats().snapshot();

        let encoding = registry.load_encoding(b"EUC-JP").unwrap();
        let handle = registry.get_encoding(&encoding).unwrap();

        assert_eq!(handle.name(), "EUC-JP");
        let after = registry.stats().snapshot();
        assert_eq!(after.cache_hits, before.cache_hits + 1);
        assert_eq!(after.cache_misses, before.cache_misses);
    }

    #[test]
    fn load_unknown_is_none() {
        let registry = open();
        assert!(registry.load_encoding(b"not-a-real-encoding").is_none());
        assert_eq!(registry.stats().snapshot().lookup_failures, 1);
    }

    #[test]
    fn get_encoding_slow_path_fills_cache() {
        let registry = open();
        let entry = registry.find_encoding_entry(b"KOI8-U").unwrap();
        let encoding = entry.encoding();

        let handle = registry.get_encoding(&encoding).unwrap();
        assert_eq!(handle.name(), "KOI8-U");
        assert_eq!(registry.stats().snapshot().cache_misses, 1);

        let again = registry.get_encoding(&encoding).unwrap();
        assert!(Arc::ptr_eq(&handle, &again));
        assert_eq!(registry.stats().snapshot().cache_misses, 1);
    }

    #[test]
    fn alias_shares_handle() {
        let registry = open();
        let direct = registry.load_encoding(b"Windows-31J").unwrap();
        let aliased = registry.load_encoding(b"sjis").unwrap();

        assert!(Arc::ptr_eq(&direct, &aliased));
        let a = registry.get_encoding(&direct).unwrap();
        let b = registry.get_encoding(&aliased).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn handle_for_entry_matches_cache() {
        let registry = open();
        let encoding = registry.load_encoding(b"big5").unwrap();
        let entry = registry.find_encoding_entry(b"Big5").unwrap();

        let by_entry = registry.handle_for_entry(entry).unwrap();
        let by_encoding = registry.get_encoding(&encoding).unwrap();
        assert!(Arc::ptr_eq(by_entry, &by_encoding));
    }

    #[test]
    fn constants_are_published_at_open() {
        let (registry, host) = open_with(Config::default(), None);

        let shift_jis = host.get("Shift_JIS").unwrap();
        assert!(Arc::ptr_eq(&shift_jis, &host.get("SHIFT_JIS").unwrap()));
        assert_eq!(host.get("ASCII_8BIT").unwrap().name(), "ASCII-8BIT");
        assert_eq!(host.get("BINARY").unwrap().name(), "ASCII-8BIT");
        assert!(host.get("646").is_none());

        let snapshot = registry.stats().snapshot();
        assert!(snapshot.constants_defined as usize >= host.len());
    }

    #[test]
    fn locale_encoding_resolves_alias() {
        let (registry, _) = open_with(Config::default(), Some("eucJP"));
        assert_eq!(registry.locale_encoding().name(), "EUC-JP");
    }

    #[test]
    fn locale_encoding_falls_back_to_bytes() {
        let (registry, _) = open_with(Config::default(), Some("no-such-charset"));
        assert_eq!(registry.locale_encoding().name(), ASCII_8BIT);

        let (registry, _) = open_with(Config::default(), None);
        assert_eq!(registry.locale_encoding().name(), ASCII_8BIT);
    }

    #[test]
    fn locale_override_beats_host() {
        let (registry, _) = open_with(Config::new().locale_charmap("ISO-8859-1"), Some("UTF-8"));
        assert_eq!(registry.locale_encoding().name(), "ISO-8859-1");
    }

    #[test]
    fn default_external_is_lazy_us_ascii() {
        let registry = open();
        assert!(registry.defaults.read().external.is_none());

        let first = registry.default_external().unwrap();
        let second = registry.default_external().unwrap();

        assert_eq!(first.name(), US_ASCII);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.default_external_encoding().unwrap().name(), US_ASCII);
    }

    #[test]
    fn configured_defaults() {
        let (registry, _) = open_with(
            Config::new().external_encoding("utf-8").internal_encoding("eucjp"),
            None,
        );

        assert_eq!(registry.default_external().unwrap().name(), "UTF-8");
        assert_eq!(registry.default_internal().unwrap().unwrap().name(), "EUC-JP");
    }

    #[test]
    fn external_from_locale() {
        let (registry, _) = open_with(Config::new().external_from_locale(true), Some("Big5"));
        assert_eq!(registry.default_external().unwrap().name(), "Big5");
    }

    #[test]
    fn internal_defaults_to_none() {
        let registry = open();
        assert!(registry.default_internal().unwrap().is_none());
        assert!(registry.default_internal_encoding().is_none());
    }

    #[test]
    fn unknown_configured_default_is_fatal() {
        let host = Arc::new(ConstantTable::with_locale(None));
        let result = EncodingRegistry::open(
            Arc::new(InMemoryDatabase::builtin()),
            host,
            Config::new().internal_encoding("bogus"),
        );

        let err = result.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert!(matches!(
            err,
            RegistryError::UnknownDefault {
                role: DefaultRole::Internal,
                ..
            }
        ));
    }

    #[test]
    fn database_without_builtins_is_rejected() {
        let mut db = InMemoryDatabase::new();
        db.define_encoding("UTF-8", EncodingTraits::multi_byte(4)).unwrap();

        let result = EncodingRegistry::open(
            Arc::new(db),
            Arc::new(ConstantTable::with_locale(None)),
            Config::default(),
        );
        assert!(matches!(result, Err(RegistryError::MissingBuiltin { .. })));
    }

    #[test]
    fn find_encoding_special_names() {
        let registry = open();

        let locale = registry.find_encoding(&"LOCALE".into()).unwrap().unwrap();
        assert!(Arc::ptr_eq(&locale, &registry.locale_encoding()));

        let external = registry.find_encoding(&"external".into()).unwrap().unwrap();
        assert!(Arc::ptr_eq(&external, &registry.default_external_encoding().unwrap()));

        let filesystem = registry.find_encoding(&"filesystem".into()).unwrap().unwrap();
        assert!(Arc::ptr_eq(&filesystem, &external));

        assert!(registry.find_encoding(&"internal".into()).unwrap().is_none());
    }

    #[test]
    fn find_encoding_errors() {
        let registry = open();

        let err = registry
            .find_encoding(&"not-a-real-encoding".into())
            .unwrap_err();
        assert!(err.is_argument_error());
        assert_eq!(err.to_string(), "unknown encoding name - not-a-real-encoding");

        let utf16 = registry.find_encoding_entry(b"UTF-16BE").unwrap().encoding();
        let name = EncodingName::with_encoding("UTF-8", &utf16);
        assert!(matches!(
            registry.find_encoding(&name),
            Err(RegistryError::NonAsciiName)
        ));
    }

    #[test]
    fn find_entry_special_and_plain() {
        let registry = open();

        let entry = registry.find_entry(&"ascii".into()).unwrap().unwrap();
        assert_eq!(entry.name(), US_ASCII);

        let locale = registry.find_entry(&"locale".into()).unwrap().unwrap();
        assert_eq!(locale.name(), "UTF-8");

        assert!(registry.find_entry(&"internal".into()).unwrap().is_none());
        assert!(registry.find_entry(&"bogus".into()).is_err());
    }

    #[test]
    fn handle_for_name() {
        let registry = open();
        let handle = registry.handle_for_name(&"binary".into()).unwrap().unwrap();
        assert_eq!(handle.name(), ASCII_8BIT);
    }

    #[test]
    fn encoding_from_arg_shapes() {
        let registry = open();
        let handle = registry.handle_for_name(&"UTF-8".into()).unwrap().unwrap();

        let from_handle = registry
            .encoding_from_arg(&EncodingArg::Handle(handle))
            .unwrap()
            .unwrap();
        assert_eq!(from_handle.name(), "UTF-8");

        let from_name = registry
            .encoding_from_arg(&EncodingArg::from("utf-8"))
            .unwrap()
            .unwrap();
        assert!(Arc::ptr_eq(&from_handle, &from_name));

        assert!(registry.encoding_from_arg(&EncodingArg::Nil).unwrap().is_none());
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncodingRegistry>();
    }
}
