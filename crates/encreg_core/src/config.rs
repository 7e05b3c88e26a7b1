//! Registry configuration.

/// Configuration for opening a registry.
///
/// Default encoding names arrive as opaque strings from the host's own
/// argument parsing. An empty string means "not configured".
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Name of the default external encoding.
    pub external_encoding: Option<String>,

    /// Name of the default internal encoding.
    pub internal_encoding: Option<String>,

    /// Locale charmap to use instead of asking the host.
    pub locale_charmap: Option<String>,

    /// Install the locale encoding as default external when none is
    /// configured. When false the external default is chosen lazily.
    pub external_from_locale: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default external encoding name.
    #[must_use]
    pub fn external_encoding(mut self, name: impl Into<String>) -> Self {
        self.external_encoding = Some(name.into());
        self
    }

    /// Sets the default internal encoding name.
    #[must_use]
    pub fn internal_encoding(mut self, name: impl Into<String>) -> Self {
        self.internal_encoding = Some(name.into());
        self
    }

    /// Overrides the host's locale charmap.
    #[must_use]
    pub fn locale_charmap(mut self, name: impl Into<String>) -> Self {
        self.locale_charmap = Some(name.into());
        self
    }

    /// Sets whether the locale encoding becomes the default external.
    #[must_use]
    pub const fn external_from_locale(mut self, value: bool) -> Self {
        self.external_from_locale = value;
        self
    }

    /// Returns the configured external name, treating `""` as unset.
    pub fn external_name(&self) -> Option<&str> {
        non_empty(self.external_encoding.as_deref())
    }

    /// Returns the configured internal name, treating `""` as unset.
    pub fn internal_name(&self) -> Option<&str> {
        non_empty(self.internal_encoding.as_deref())
    }

    /// Returns the locale override, treating `""` as unset.
    pub fn locale_name(&self) -> Option<&str> {
        non_empty(self.locale_charmap.as_deref())
    }
}

fn non_empty(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.is_empty())
}
