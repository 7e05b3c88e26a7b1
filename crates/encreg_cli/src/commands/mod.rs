//! CLI command implementations.

pub mod constants;
pub mod defaults;
pub mod list;
pub mod lookup;

use encreg_core::{Config, ConstantTable, EncodingRegistry, InMemoryDatabase, RegistryResult};
use std::sync::Arc;
use tracing::debug;

/// Opens a registry over the built-in database.
///
/// `locale` overrides the charmap read from the environment.
pub fn open_registry(
    locale: Option<&str>,
    config: Config,
) -> RegistryResult<(EncodingRegistry, Arc<ConstantTable>)> {
    let host = Arc::new(match locale {
        Some(charmap) => ConstantTable::with_locale(Some(charmap.to_string())),
        None => ConstantTable::new(),
    });
    let registry = EncodingRegistry::open(
        Arc::new(InMemoryDatabase::builtin()),
        host.clone(),
        config,
    )?;
    debug!(constants = host.len(), "registry opened");
    Ok((registry, host))
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
