//! # encreg core
//!
//! Encoding-name registry for a language runtime.
//!
//! This crate provides:
//! - Case-insensitive name and alias resolution over an [`EncodingDatabase`]
//! - One wrapper ([`EncodingHandle`]) per database entry, shared by aliases
//! - An encoding-index cache filled lazily on first load
//! - Default external and internal encodings, and the `locale`,
//!   `external`, `internal` and `filesystem` pseudo-names
//! - Derivation of constant names for every encoding and alias
//!
//! ## Example
//!
//! ```rust
//! use encreg_core::{Config, ConstantTable, EncodingName, EncodingRegistry};
//! use encreg_db::InMemoryDatabase;
//! use std::sync::Arc;
//!
//! let host = Arc::new(ConstantTable::with_locale(Some("UTF-8".into())));
//! let registry = EncodingRegistry::open(
//!     Arc::new(InMemoryDatabase::builtin()),
//!     host.clone(),
//!     Config::default(),
//! )
//! .unwrap();
//!
//! let encoding = registry.load_encoding(b"shift_jis").unwrap();
//! let handle = registry.get_encoding(&encoding).unwrap();
//! assert_eq!(handle.name(), "Shift_JIS");
//! assert!(Arc::ptr_eq(&handle, &host.get("SHIFT_JIS").unwrap()));
//!
//! let locale = registry.find_encoding(&EncodingName::from("locale")).unwrap();
//! assert_eq!(locale.unwrap().name(), "UTF-8");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
mod config;
pub mod constants;
mod error;
mod handle;
mod host;
pub mod locale;
mod name;
mod registry;
mod special;
mod stats;

pub use cache::{CacheStats, EncodingIndexCache};
pub use config::Config;
pub use constants::{define_constants, derive_constant_names};
pub use error::{DefaultRole, ErrorKind, RegistryError, RegistryResult};
pub use handle::EncodingHandle;
pub use host::{ConstantTable, Host};
pub use name::{EncodingArg, EncodingName};
pub use registry::EncodingRegistry;
pub use special::SpecialName;
pub use stats::{RegistryStats, StatsSnapshot};

pub use encreg_db::{
    AliasEntry, Encoding, EncodingDatabase, EncodingIndex, EncodingTraits, Entry, EntryIndex,
    InMemoryDatabase,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
