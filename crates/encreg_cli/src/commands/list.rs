//! List command implementation.

use super::{open_registry, print_json};
use encreg_core::{Config, EncodingDatabase, EncodingRegistry};
use serde::Serialize;

/// Listing result.
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Number of encodings.
    pub encoding_count: usize,
    /// Number of aliases.
    pub alias_count: usize,
    /// One row per encoding, in entry-index order.
    pub encodings: Vec<EncodingRow>,
}

/// One encoding in the listing.
#[derive(Debug, Serialize)]
pub struct EncodingRow {
    /// Entry index.
    pub index: usize,
    /// Canonical name.
    pub name: String,
    /// Dummy encodings cannot transcode.
    pub dummy: bool,
    /// Whether ASCII bytes mean ASCII characters.
    pub ascii_compatible: bool,
    /// Aliases (if requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// Builds the listing.
pub fn collect(registry: &EncodingRegistry, show_aliases: bool) -> ListResult {
    let db = registry.database();
    let encodings = db
        .entries()
        .iter()
        .map(|entry| EncodingRow {
            index: entry.index().as_usize(),
            name: entry.name().to_string(),
            dummy: entry.is_dummy(),
            ascii_compatible: entry.is_ascii_compatible(),
            aliases: show_aliases.then(|| {
                db.aliases()
                    .iter()
                    .filter(|alias| alias.target() == entry.index())
                    .map(|alias| alias.name().to_string())
                    .collect()
            }),
        })
        .collect();

    ListResult {
        encoding_count: db.len(),
        alias_count: db.aliases().len(),
        encodings,
    }
}

/// Runs the list command.
pub fn run(
    locale: Option<&str>,
    show_aliases: bool,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (registry, _) = open_registry(locale, Config::default())?;
    let result = collect(&registry, show_aliases);

    match format {
        "json" => print_json(&result)?,
        _ => print_text_output(&result),
    }

    Ok(())
}

fn print_text_output(result: &ListResult) {
    println!(
        "{} encodings, {} aliases",
        result.encoding_count, result.alias_count
    );
    println!();
    for row in &result.encodings {
        let mut flags = Vec::new();
        if row.dummy {
            flags.push("dummy");
        }
        if !row.ascii_compatible {
            flags.push("non-ascii");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };
        println!("  [{:>3}] {}{}", row.index, row.name, flags);

        if let Some(aliases) = &row.aliases {
            if !aliases.is_empty() {
                println!("        aliases: {}", aliases.join(", "));
            }
        }
    }
}
