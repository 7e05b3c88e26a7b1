//! Error types for the encoding registry.

use std::fmt;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// How the host should treat a registry error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input from user code; recoverable, surfaced as an argument error.
    Argument,
    /// The registry cannot be built; the runtime must not start.
    Fatal,
}

/// Which runtime default a configured name was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultRole {
    /// Default external encoding.
    External,
    /// Default internal encoding.
    Internal,
}

impl fmt::Display for DefaultRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => f.write_str("external"),
            Self::Internal => f.write_str("internal"),
        }
    }
}

/// Errors that can occur in registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The name is neither an encoding, an alias nor a special name.
    #[error("unknown encoding name - {name}")]
    UnknownEncoding {
        /// The name as given, lossily decoded.
        name: String,
    },

    /// The name's own encoding cannot represent ASCII.
    #[error("invalid name encoding (non ASCII)")]
    NonAsciiName,

    /// A configured default encoding does not resolve.
    #[error("unknown encoding name - {name}")]
    UnknownDefault {
        /// Which default was being configured.
        role: DefaultRole,
        /// The configured name.
        name: String,
    },

    /// The database lacks an encoding the registry depends on.
    #[error("encoding database has no {name} entry")]
    MissingBuiltin {
        /// Name of the missing encoding.
        name: String,
    },

    /// The database violates its own invariants.
    #[error("corrupt encoding database: {message}")]
    CorruptDatabase {
        /// Description of the violation.
        message: String,
    },

    /// Encoding database error.
    #[error("database error: {0}")]
    Database(#[from] encreg_db::DbError),
}

impl RegistryError {
    /// Creates an unknown encoding error.
    pub fn unknown_encoding(name: impl AsRef<[u8]>) -> Self {
        Self::UnknownEncoding {
            name: String::from_utf8_lossy(name.as_ref()).into_owned(),
        }
    }

    /// Creates an unknown default error.
    pub fn unknown_default(role: DefaultRole, name: impl Into<String>) -> Self {
        Self::UnknownDefault {
            role,
            name: name.into(),
        }
    }

    /// Creates a missing builtin error.
    pub fn missing_builtin(name: impl Into<String>) -> Self {
        Self::MissingBuiltin { name: name.into() }
    }

    /// Creates a corrupt database error.
    pub fn corrupt_database(message: impl Into<String>) -> Self {
        Self::CorruptDatabase {
            message: message.into(),
        }
    }

    /// Returns how the host should treat this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownEncoding { .. } | Self::NonAsciiName => ErrorKind::Argument,
            Self::UnknownDefault { .. }
            | Self::MissingBuiltin { .. }
            | Self::CorruptDatabase { .. }
            | Self::Database(_) => ErrorKind::Fatal,
        }
    }

    /// Returns true for errors surfaced to user code as argument errors.
    pub fn is_argument_error(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }
}
