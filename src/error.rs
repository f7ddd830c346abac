//! Error types for dataset loading.
//!
//! Every variant is raised during [`Db::load`](crate::Db::load); queries
//! against a constructed database never fail.

/// Convenience type alias for Results using [`LoadError`].
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Errors produced while loading a serialized confusables dataset.
///
/// All variants are fatal to the `load` call: no partial database is ever
/// returned. Codepoint-carrying variants print the offending value in hex
/// so the bad record can be found in the dataset.
// Implemented by hand rather than via thiserror: the spec fixes these
// fields' name as `source` (an i64 codepoint), which the derive would
// force to be the Error::source() and fail to compile.
#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    /// The input buffer is not structurally valid JSON for the dataset schema.
    Deserialize(serde_json::Error),

    /// A mapping record has an empty target sequence.
    EmptyTarget {
        /// Source codepoint of the offending record.
        source: i64,
    },

    /// The same source codepoint appears in more than one record.
    DuplicateSource {
        /// Source codepoint of the offending record.
        source: i64,
    },

    /// A record's source is not a valid Unicode scalar value.
    InvalidSourceCodepoint {
        /// The raw integer that failed validation.
        value: i64,
    },

    /// An element of a record's target sequence is not a valid Unicode
    /// scalar value.
    InvalidTargetCodepoint {
        /// Source codepoint of the offending record.
        source: i64,
        /// The raw integer that failed validation.
        value: i64,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Deserialize(e) => {
                write!(f, "failed to deserialize confusables data: {e}")
            }
            LoadError::EmptyTarget { source } => {
                write!(f, "invalid mapping for U+{source:04X}: empty target")
            }
            LoadError::DuplicateSource { source } => {
                write!(f, "duplicate mapping for U+{source:04X}")
            }
            LoadError::InvalidSourceCodepoint { value } => {
                write!(f, "invalid unicode source codepoint: {value:#X}")
            }
            LoadError::InvalidTargetCodepoint { source, value } => {
                write!(
                    f,
                    "invalid unicode target codepoint {value:#X} for U+{source:04X}"
                )
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Deserialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Deserialize(e)
    }
}
