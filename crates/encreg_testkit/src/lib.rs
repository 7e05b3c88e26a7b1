//! # encreg testkit
//!
//! Test utilities for the encreg encoding registry.
//!
//! This crate provides:
//! - Test fixtures: a recording host and registry builders
//! - Property-based test generators using proptest
//! - Constant-derivation vectors shared as JSON
//! - Stress testing utilities for concurrent lookup
//!
//! ## Usage
//!
//! ```rust
//! use encreg_testkit::prelude::*;
//!
//! with_registry(|registry| {
//!     let utf8 = registry.load_encoding(b"utf-8").unwrap();
//!     assert_eq!(registry.get_encoding(&utf8).unwrap().name(), "UTF-8");
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
pub use vectors::*;
