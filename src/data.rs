//! Wire types for the serialized confusables dataset.
//!
//! The JSON schema here is a compatibility contract shared between the
//! offline generator (which writes it) and [`Db::load`](crate::Db::load)
//! (which reads it). Field names and types must not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single confusable mapping record.
///
/// Codepoints are carried as raw `i64` integers, not `char`, so that
/// validation can run on the full-width value before any narrowing
/// conversion (see [`codepoint`](crate::codepoint)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// The confusable source codepoint.
    pub source: i64,
    /// The target sequence the source is confusable with (1..N codepoints).
    pub target: Vec<i64>,
    /// Human-readable name of the source character. Cosmetic; may be empty.
    #[serde(default)]
    pub source_name: String,
    /// Human-readable name of the target sequence. Cosmetic; may be empty.
    #[serde(default)]
    pub target_name: String,
}

/// Top-level structure of the serialized dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFile {
    /// Unicode version the mappings were taken from.
    pub unicode_version: String,
    /// When the dataset was generated.
    pub generated_at: DateTime<Utc>,
    /// Where the source data came from (URL or local path).
    pub source_url: String,
    /// The `Date:` header of the upstream confusables.txt.
    pub source_date: String,
    /// Number of mapping records. Informational; absent in older datasets.
    #[serde(default)]
    pub total_mappings: usize,
    /// The mapping records, in source order.
    pub mappings: Vec<Mapping>,
}
