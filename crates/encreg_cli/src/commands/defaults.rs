//! Defaults command implementation.

use super::{open_registry, print_json};
use encreg_core::{Config, EncodingRegistry, RegistryResult, SpecialName};
use serde::Serialize;

/// Resolved default encodings.
#[derive(Debug, Serialize)]
pub struct DefaultsResult {
    /// Locale charmap as reported, before resolution.
    pub locale_charmap: Option<String>,
    /// Special name to encoding name; `None` when unset.
    pub resolved: Vec<(String, Option<String>)>,
}

/// Resolves every special name.
///
/// # Errors
///
/// Fails only for a registry whose database lacks US-ASCII.
pub fn collect(registry: &EncodingRegistry) -> RegistryResult<DefaultsResult> {
    let mut resolved = Vec::with_capacity(SpecialName::ALL.len());
    for special in SpecialName::ALL {
        let encoding = special.resolve(registry)?;
        resolved.push((special.to_string(), encoding.map(|e| e.name().to_string())));
    }

    Ok(DefaultsResult {
        locale_charmap: registry.locale_charmap(),
        resolved,
    })
}

/// Runs the defaults command.
pub fn run(
    locale: Option<&str>,
    external: Option<String>,
    internal: Option<String>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::new();
    config.external_encoding = external;
    config.internal_encoding = internal;

    let (registry, _) = open_registry(locale, config)?;
    let result = collect(&registry)?;

    match format {
        "json" => print_json(&result)?,
        _ => {
            println!(
                "Locale charmap: {}",
                result.locale_charmap.as_deref().unwrap_or("(none)")
            );
            println!();
            for (special, encoding) in &result.resolved {
                println!("  {:<10} {}", special, encoding.as_deref().unwrap_or("(unset)"));
            }
        }
    }

    Ok(())
}
