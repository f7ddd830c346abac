//! The confusables database: loading, validation, and the query surface.
//!
//! A [`Db`] maps single source codepoints to the sequence of codepoints
//! they are visually confusable with, per [Unicode TR39]. It is built once
//! by [`Db::load`] and never mutated afterwards, so it can be shared across
//! threads without locking.
//!
//! [Unicode TR39]: https://www.unicode.org/reports/tr39/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::codepoint::scalar;
use crate::data::DataFile;
use crate::error::{LoadError, Result};

/// The confusables database. Immutable and thread-safe after construction.
#[derive(Debug, Clone)]
pub struct Db {
    mappings: HashMap<char, Box<[char]>>,
    unicode_version: String,
    source_date: String,
    generated_at: DateTime<Utc>,
    source_url: String,
}

impl Db {
    /// Build a database from a serialized JSON dataset.
    ///
    /// Validation is strict and fails on the first bad record: empty target
    /// sequences, invalid source or target codepoints (including surrogates
    /// and oversized integers that would truncate to a valid-looking value),
    /// and duplicate sources are all load-time errors. A partially built
    /// database is never returned.
    pub fn load(json: &[u8]) -> Result<Db> {
        let df: DataFile = serde_json::from_slice(json)?;

        let mut mappings: HashMap<char, Box<[char]>> =
            HashMap::with_capacity(df.mappings.len());

        for m in &df.mappings {
            if m.target.is_empty() {
                return Err(LoadError::EmptyTarget { source: m.source });
            }
            // Validation runs on the raw i64 before conversion to char.
            let source = scalar(m.source)
                .ok_or(LoadError::InvalidSourceCodepoint { value: m.source })?;

            let mut targets = Vec::with_capacity(m.target.len());
            for &t in &m.target {
                let c = scalar(t).ok_or(LoadError::InvalidTargetCodepoint {
                    source: m.source,
                    value: t,
                })?;
                targets.push(c);
            }

            if mappings.contains_key(&source) {
                return Err(LoadError::DuplicateSource { source: m.source });
            }
            mappings.insert(source, targets.into_boxed_slice());
        }

        debug!(
            mappings = mappings.len(),
            unicode_version = %df.unicode_version,
            "loaded confusables database"
        );

        Ok(Db {
            mappings,
            unicode_version: df.unicode_version,
            source_date: df.source_date,
            generated_at: df.generated_at,
            source_url: df.source_url,
        })
    }

    /// Replace confusable characters with their ASCII equivalents.
    ///
    /// Only characters whose mapping is a single printable ASCII character
    /// (`0x20..=0x7E`) are replaced; everything else, including already-ASCII
    /// input, passes through unchanged. The result is display-safe.
    ///
    /// # Examples
    ///
    /// ```
    /// let db = confusables::default_db();
    /// assert_eq!(db.to_ascii("hеllо"), "hello"); // Cyrillic е and о
    /// assert_eq!(db.to_ascii("ß"), "ß");         // multi-char target, kept
    /// ```
    pub fn to_ascii(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match self.lookup_ascii(c) {
                Some(replacement) => out.push(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Compute the TR39 skeleton of a string.
    ///
    /// The skeleton is NFD, followed by substituting every mapped character
    /// with its entire target sequence, followed by NFD again (substitution
    /// can create new composable sequences). Unlike [`Db::to_ascii`] no
    /// filtering is applied, so the result is not suitable for display; use
    /// it only for equality comparison.
    pub fn skeleton(&self, s: &str) -> String {
        let mut mapped = String::with_capacity(s.len());
        for c in s.nfd() {
            match self.mappings.get(&c) {
                Some(targets) => mapped.extend(targets.iter()),
                None => mapped.push(c),
            }
        }
        mapped.nfd().collect()
    }

    /// Check whether two strings produce the same skeleton.
    ///
    /// # Examples
    ///
    /// ```
    /// let db = confusables::default_db();
    /// assert!(db.is_confusable("apple", "аррle")); // Cyrillic а and р
    /// assert!(!db.is_confusable("different", "strings"));
    /// ```
    pub fn is_confusable(&self, a: &str, b: &str) -> bool {
        self.skeleton(a) == self.skeleton(b)
    }

    /// Look up the ASCII equivalent of a character, if one exists.
    ///
    /// Returns `Some` only when `c` is non-ASCII (`>= 0x80`) and maps to
    /// exactly one printable ASCII character. Already-ASCII input is never
    /// remapped: it is definitionally not confusable with itself.
    pub fn lookup_ascii(&self, c: char) -> Option<char> {
        if (c as u32) < 0x80 {
            return None;
        }
        match self.mappings.get(&c)?.as_ref() {
            [t] if (' '..='~').contains(t) => Some(*t),
            _ => None,
        }
    }

    /// Look up the full target sequence for a confusable character.
    ///
    /// Returns an independently owned copy, so callers can mutate the result
    /// without affecting the database. Returns `None` for unmapped
    /// characters.
    ///
    /// # Examples
    ///
    /// ```
    /// let db = confusables::default_db();
    /// assert_eq!(db.lookup('а'), Some(vec!['a'])); // U+0430
    /// assert_eq!(db.lookup('z'), None);
    /// ```
    pub fn lookup(&self, c: char) -> Option<Vec<char>> {
        self.mappings.get(&c).map(|targets| targets.to_vec())
    }

    /// The Unicode version of the dataset.
    pub fn unicode_version(&self) -> &str {
        &self.unicode_version
    }

    /// The `Date:` header of the upstream source data.
    pub fn source_date(&self) -> &str {
        &self.source_date
    }

    /// When the dataset was generated.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Where the source data came from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Number of mappings in the database.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// True when the database contains no mappings.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
