//! # confusables
//!
//! Detection and neutralization of Unicode confusable characters, the
//! codepoints that are visually indistinguishable from others (Cyrillic
//! "а" vs Latin "a"). Confusables are a standard trick for evading text
//! filters and spoofing identifiers.
//!
//! ## Features
//!
//! - Display-safe ASCII folding (`to_ascii`) for filtering and display
//! - [TR39]-style skeletons (`skeleton`, `is_confusable`) for comparing
//!   visually identical strings
//! - Strictly validated dataset loading with an embedded default table
//! - Lock-free concurrent reads; the database is immutable once built
//! - An offline generator (`confusables-gen`) that rebuilds the dataset
//!   from unicode.org
//!
//! ## Quick Start
//!
//! ```rust
//! let db = confusables::default_db();
//!
//! // Fold confusables toward ASCII for display or filtering.
//! assert_eq!(db.to_ascii("h\u{435}ll\u{43E}"), "hello");
//!
//! // Compare strings by their TR39 skeleton.
//! assert!(db.is_confusable("paypal", "p\u{430}yp\u{430}l"));
//! assert!(!db.is_confusable("different", "strings"));
//!
//! // Inspect individual mappings.
//! assert_eq!(db.lookup('\u{430}'), Some(vec!['a']));
//! ```
//!
//! Custom datasets load through [`Db::load`]:
//!
//! ```rust
//! use confusables::Db;
//!
//! let json = std::fs::read("data/confusables.json").unwrap();
//! let db = Db::load(&json).unwrap();
//! assert!(!db.is_empty());
//! ```
//!
//! [TR39]: https://www.unicode.org/reports/tr39/

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod codepoint;
pub mod data;
pub mod db;
pub mod error;
pub mod generator;

pub use crate::data::{DataFile, Mapping};
pub use crate::db::Db;
pub use crate::error::{LoadError, Result};

use std::sync::OnceLock;

/// Dataset produced by `confusables-gen`, validated at build time.
static EMBEDDED_JSON: &[u8] = include_bytes!("../data/confusables.json");

static DEFAULT_DB: OnceLock<Db> = OnceLock::new();

/// The database built from the embedded dataset.
///
/// Constructed on first access and shared read-only for the lifetime of
/// the process; concurrent first access performs exactly one
/// initialization. The embedded dataset is validated when it is generated,
/// so a load failure here is a packaging defect and halts the process.
pub fn default_db() -> &'static Db {
    DEFAULT_DB.get_or_init(|| {
        Db::load(EMBEDDED_JSON)
            .unwrap_or_else(|e| panic!("confusables: failed to load embedded data: {e}"))
    })
}
