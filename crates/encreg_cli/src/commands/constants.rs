//! Constants command implementation.

use super::{open_registry, print_json};
use encreg_core::{derive_constant_names, Config, ConstantTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Constants derived for a single name.
#[derive(Debug, Serialize)]
pub struct DerivedConstants {
    /// The input name.
    pub name: String,
    /// Constants in publication order.
    pub constants: Vec<String>,
}

/// Constants published at startup, grouped by encoding.
#[derive(Debug, Serialize)]
pub struct PublishedConstants {
    /// Total number of constants.
    pub count: usize,
    /// Encoding name to its constants, sorted.
    pub encodings: BTreeMap<String, Vec<String>>,
}

/// Groups the constants in `table` by the encoding they are bound to.
pub fn published(table: &ConstantTable) -> PublishedConstants {
    let mut encodings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in table.names() {
        if let Some(handle) = table.get(&name) {
            encodings
                .entry(handle.name().to_string())
                .or_default()
                .push(name);
        }
    }

    PublishedConstants {
        count: table.len(),
        encodings,
    }
}

/// Runs the constants command.
pub fn run(
    locale: Option<&str>,
    name: Option<&str>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = name {
        let result = DerivedConstants {
            name: name.to_string(),
            constants: derive_constant_names(name.as_bytes()),
        };
        match format {
            "json" => print_json(&result)?,
            _ if result.constants.is_empty() => println!("{}: (none)", result.name),
            _ => println!("{}: {}", result.name, result.constants.join(", ")),
        }
        return Ok(());
    }

    let (_registry, table) = open_registry(locale, Config::default())?;
    let result = published(&table);

    match format {
        "json" => print_json(&result)?,
        _ => {
            println!("{} constants", result.count);
            println!();
            for (encoding, constants) in &result.encodings {
                println!("  {}: {}", encoding, constants.join(", "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_groups_by_encoding() {
        let (_registry, table) = open_registry(None, Config::default()).unwrap();
        let result = published(&table);

        assert_eq!(result.count, table.len());
        let utf8 = &result.encodings["UTF-8"];
        assert!(utf8.contains(&"UTF_8".to_string()));
        assert!(utf8.contains(&"CP65001".to_string()));

        let total: usize = result.encodings.values().map(Vec::len).sum();
        assert_eq!(total, result.count);
    }
}
