//! # encreg database
//!
//! Encoding database trait and implementations for encreg.
//!
//! This crate is the read-only data source the registry is built on. A
//! database knows which encodings exist, which aliases point at them, and
//! how to materialize an encoding object for an entry. It does not know
//! about wrappers, constants or runtime defaults.
//!
//! ## Design Principles
//!
//! - Names are ASCII byte strings, compared case-insensitively
//! - Entry indices are dense and assigned in definition order
//! - Encoding objects are loaded lazily and receive their own numeric
//!   index on first load, independent of the entry index
//! - Aliases resolve to an encoding entry in exactly one hop
//! - Databases must be `Send + Sync` for concurrent lookup
//!
//! ## Example
//!
//! ```rust
//! use encreg_db::{EncodingDatabase, InMemoryDatabase};
//!
//! let db = InMemoryDatabase::builtin();
//! let entry = db.find_encoding(b"utf-8").unwrap();
//! assert_eq!(entry.name(), "UTF-8");
//!
//! let alias = db.find_alias(b"cp65001").unwrap();
//! assert_eq!(alias.index(), entry.index());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod database;
mod entry;
mod error;
mod map;
mod memory;
mod types;

pub use database::EncodingDatabase;
pub use entry::{AliasEntry, Encoding, EncodingTraits, Entry};
pub use error::{DbError, DbResult};
pub use map::CaseInsensitiveBytesMap;
pub use memory::InMemoryDatabase;
pub use types::{EncodingIndex, EntryIndex};

/// Name of the byte encoding (every byte is one character, no validation).
pub const ASCII_8BIT: &str = "ASCII-8BIT";

/// Name of the 7-bit ASCII encoding.
pub const US_ASCII: &str = "US-ASCII";

/// Name of the UTF-8 encoding.
pub const UTF_8: &str = "UTF-8";
