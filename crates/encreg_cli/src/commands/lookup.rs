//! Lookup command implementation.

use super::{open_registry, print_json};
use encreg_core::{Config, EncodingName, EncodingRegistry, RegistryResult, SpecialName};
use serde::Serialize;

/// Resolution of one name.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// The name as given.
    pub query: String,
    /// Special name the query matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
    /// How the name was found.
    pub matched: Match,
    /// Canonical name of the resolved encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Entry index of the resolved encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_index: Option<usize>,
    /// Encoding index assigned on load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_index: Option<usize>,
    /// Inspect form of the handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// Which table answered the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Match {
    /// The encoding table.
    Encoding,
    /// The alias table.
    Alias,
    /// A special name.
    Special,
    /// A special name with no value, i.e. unset `internal`.
    Unset,
}

/// Resolves `name` against `registry`.
///
/// # Errors
///
/// Fails like [`EncodingRegistry::find_encoding`].
pub fn resolve(registry: &EncodingRegistry, name: &str) -> RegistryResult<LookupResult> {
    let query = EncodingName::from(name);
    let special = SpecialName::parse(query.as_bytes());
    let encoding = registry.find_encoding(&query)?;

    let matched = match (special, &encoding) {
        (Some(_), Some(_)) => Match::Special,
        (Some(_), None) => Match::Unset,
        (None, _) if registry.find_encoding_entry(query.as_bytes()).is_some() => Match::Encoding,
        (None, _) => Match::Alias,
    };

    let handle = encoding
        .as_deref()
        .map(|e| registry.get_encoding(e))
        .transpose()?;

    Ok(LookupResult {
        query: name.to_string(),
        special: special.map(|s| s.to_string()),
        matched,
        encoding: encoding.as_ref().map(|e| e.name().to_string()),
        entry_index: handle.as_ref().map(|h| h.entry_index().as_usize()),
        encoding_index: encoding.as_ref().map(|e| e.index().as_usize()),
        handle: handle.as_ref().map(|h| h.inspect()),
    })
}

/// Runs the lookup command.
pub fn run(locale: Option<&str>, name: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (registry, _) = open_registry(locale, Config::default())?;
    let result = resolve(&registry, name)?;

    match format {
        "json" => print_json(&result)?,
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &LookupResult) {
    println!("Query:    {}", result.query);
    if let Some(special) = &result.special {
        println!("Special:  {}", special);
    }
    match (&result.encoding, &result.handle) {
        (Some(encoding), Some(handle)) => {
            println!("Matched:  {:?}", result.matched);
            println!("Encoding: {}", encoding);
            if let Some(index) = result.entry_index {
                println!("Entry:    {}", index);
            }
            if let Some(index) = result.encoding_index {
                println!("Index:    {}", index);
            }
            println!("Handle:   {}", handle);
        }
        _ => println!("Encoding: (unset)"),
    }
}
