//! Error types for encoding database construction.

use thiserror::Error;

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur while defining encodings and aliases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// The name is empty or contains non-ASCII bytes.
    #[error("invalid encoding name: {name:?}")]
    InvalidName {
        /// The rejected name, lossily decoded.
        name: String,
    },

    /// The name is already taken by an encoding or an alias.
    #[error("encoding name already defined: {name}")]
    DuplicateName {
        /// The duplicate name.
        name: String,
    },

    /// The alias target is not a defined encoding.
    #[error("unknown alias target {target} for alias {alias}")]
    UnknownAliasTarget {
        /// The alias being defined.
        alias: String,
        /// The name it was meant to resolve to.
        target: String,
    },
}

impl DbError {
    /// Creates an invalid name error.
    pub fn invalid_name(name: &[u8]) -> Self {
        Self::InvalidName {
            name: String::from_utf8_lossy(name).into_owned(),
        }
    }

    /// Creates a duplicate name error.
    pub fn duplicate_name(name: &[u8]) -> Self {
        Self::DuplicateName {
            name: String::from_utf8_lossy(name).into_owned(),
        }
    }

    /// Creates an unknown alias target error.
    pub fn unknown_alias_target(alias: &[u8], target: &[u8]) -> Self {
        Self::UnknownAliasTarget {
            alias: String::from_utf8_lossy(alias).into_owned(),
            target: String::from_utf8_lossy(target).into_owned(),
        }
    }
}
