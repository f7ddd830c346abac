//! Parser for the upstream `confusables.txt` format.
//!
//! This is the pure core of the offline generator (`confusables-gen`).
//! Each non-comment, non-blank line of the source has the shape
//!
//! ```text
//! <source-hex> ; <target-hex...> ; <class> # <comment>
//! ```
//!
//! Leading comment lines carry `Version:` and `Date:` headers. The parser
//! applies the same codepoint validity rules as the loader, rejects
//! duplicate sources and empty target lists, and emits a [`DataFile`]
//! conforming to the dataset schema.

use std::collections::HashSet;

use chrono::Utc;

use crate::codepoint::is_valid_scalar;
use crate::data::{DataFile, Mapping};

/// Errors produced while parsing a confusables.txt source.
// Implemented by hand rather than via thiserror: `BadTargetHex` carries a
// spec-mandated `source: i64` field, which the derive would force to be the
// Error::source() and fail to compile.
#[derive(Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// A data line has no `#` comment delimiter.
    MissingComment(String),

    /// A data line is missing the semicolon-delimited source/target fields.
    MissingFields(String),

    /// The source field is not valid hex.
    BadSourceHex(String),

    /// A target field is not valid hex.
    BadTargetHex {
        /// Source codepoint of the offending line.
        source: i64,
        /// The field that failed to parse.
        hex: String,
    },

    /// The source codepoint is not a valid Unicode scalar value.
    InvalidSource(i64),

    /// A target codepoint is not a valid Unicode scalar value.
    InvalidTarget(i64),

    /// The same source codepoint appears on more than one line.
    DuplicateSource(i64),

    /// A line has a source but no target codepoints.
    EmptyTarget(i64),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingComment(line) => {
                write!(f, "malformed line (missing comment): {line:?}")
            }
            ParseError::MissingFields(line) => {
                write!(f, "malformed line (missing fields): {line:?}")
            }
            ParseError::BadSourceHex(hex) => {
                write!(f, "failed to parse source hex {hex:?}")
            }
            ParseError::BadTargetHex { source, hex } => {
                write!(f, "invalid target hex {hex:?} for source U+{source:04X}")
            }
            ParseError::InvalidSource(v) => {
                write!(f, "invalid unicode source codepoint: {v:#X}")
            }
            ParseError::InvalidTarget(v) => {
                write!(f, "invalid unicode target codepoint: {v:#X}")
            }
            ParseError::DuplicateSource(v) => {
                write!(f, "duplicate source: U+{v:04X}")
            }
            ParseError::EmptyTarget(v) => {
                write!(f, "empty target for source U+{v:04X}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a confusables.txt document into a [`DataFile`].
///
/// `version` is the requested Unicode version; when it is `"latest"` the
/// `Version:` header from the source takes precedence. `generated_at` is
/// set to the current time; callers may override it afterwards.
pub fn parse_confusables(
    text: &str,
    source_url: &str,
    version: &str,
) -> Result<DataFile, ParseError> {
    let mut df = DataFile {
        unicode_version: version.to_string(),
        generated_at: Utc::now(),
        source_url: source_url.to_string(),
        source_date: String::new(),
        total_mappings: 0,
        mappings: Vec::new(),
    };

    let mut seen: HashSet<i64> = HashSet::new();

    for line in text.lines() {
        if line.starts_with('#') {
            if line.contains("Version:") && df.unicode_version == "latest" {
                if let Some((_, v)) = line.split_once(':') {
                    df.unicode_version = v.trim().to_string();
                }
            }
            if line.contains("Date:") && df.source_date.is_empty() {
                if let Some((_, d)) = line.split_once(':') {
                    df.source_date = d.trim().to_string();
                }
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        // Keep only the text between the first and second '#'; the names
        // heuristic below must not see any trailing commentary.
        let mut parts = line.splitn(3, '#');
        let data_part = parts.next().unwrap_or("");
        let comment_part = parts
            .next()
            .ok_or_else(|| ParseError::MissingComment(line.to_string()))?;

        let mut fields = data_part.split(';');
        let source_hex = fields
            .next()
            .ok_or_else(|| ParseError::MissingFields(line.to_string()))?
            .trim();
        let target_field = fields
            .next()
            .ok_or_else(|| ParseError::MissingFields(line.to_string()))?;

        let source = i64::from_str_radix(source_hex, 16)
            .map_err(|_| ParseError::BadSourceHex(source_hex.to_string()))?;
        if !is_valid_scalar(source) {
            return Err(ParseError::InvalidSource(source));
        }
        if !seen.insert(source) {
            return Err(ParseError::DuplicateSource(source));
        }

        let mut target = Vec::new();
        for hex in target_field.split_whitespace() {
            let t = i64::from_str_radix(hex, 16).map_err(|_| ParseError::BadTargetHex {
                source,
                hex: hex.to_string(),
            })?;
            if !is_valid_scalar(t) {
                return Err(ParseError::InvalidTarget(t));
            }
            target.push(t);
        }
        if target.is_empty() {
            return Err(ParseError::EmptyTarget(source));
        }

        let (source_name, target_name) = parse_names(comment_part);

        df.mappings.push(Mapping {
            source,
            target,
            source_name,
            target_name,
        });
    }

    df.total_mappings = df.mappings.len();
    Ok(df)
}

/// Best-effort extraction of character names from a trailing comment.
///
/// Comments look like `( а → a ) CYRILLIC SMALL LETTER A → LATIN SMALL
/// LETTER A`; the names follow the last `)` and are separated by an arrow.
/// Absent or malformed names yield empty strings, never an error.
fn parse_names(comment: &str) -> (String, String) {
    let names_part = match comment.rfind(')') {
        Some(idx) => &comment[idx + ')'.len_utf8()..],
        None => comment,
    };

    let fields: Vec<&str> = names_part.split('→').collect();
    match fields.as_slice() {
        [source, target] => (source.trim().to_string(), target.trim().to_string()),
        _ => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# confusables.txt
# Date: 2024-08-13, 10:39:00 GMT
# Version: 16.0.0

0430 ;\t0061 ;\tMA\t# ( \u{430} \u{2192} a ) CYRILLIC SMALL LETTER A \u{2192} LATIN SMALL LETTER A\t# extra
00DF ;\t0073 0073 ;\tMA\t# ( \u{df} \u{2192} ss ) LATIN SMALL LETTER SHARP S \u{2192} LATIN SMALL LETTER S, LATIN SMALL LETTER S
";

    #[test]
    fn test_parse_sample() {
        let df = parse_confusables(SAMPLE, "test://source", "latest").unwrap();
        assert_eq!(df.unicode_version, "16.0.0");
        assert_eq!(df.source_date, "2024-08-13, 10:39:00 GMT");
        assert_eq!(df.source_url, "test://source");
        assert_eq!(df.total_mappings, 2);

        assert_eq!(df.mappings[0].source, 0x430);
        assert_eq!(df.mappings[0].target, vec![0x61]);
        assert_eq!(df.mappings[0].source_name, "CYRILLIC SMALL LETTER A");
        assert_eq!(df.mappings[0].target_name, "LATIN SMALL LETTER A");

        assert_eq!(df.mappings[1].target, vec![0x73, 0x73]);
        assert_eq!(
            df.mappings[1].target_name,
            "LATIN SMALL LETTER S, LATIN SMALL LETTER S"
        );
    }

    #[test]
    fn test_explicit_version_wins_over_header() {
        let df = parse_confusables(SAMPLE, "test://source", "15.1.0").unwrap();
        assert_eq!(df.unicode_version, "15.1.0");
    }

    #[test]
    fn test_rejects_missing_comment() {
        let err = parse_confusables("0430 ;\t0061 ;\tMA", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::MissingComment(_)));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let err = parse_confusables("0430 # no semicolons", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::MissingFields(_)));
    }

    #[test]
    fn test_rejects_bad_hex() {
        let err = parse_confusables("XYZ ; 0061 ; MA # c", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::BadSourceHex(_)));

        let err = parse_confusables("0430 ; QQQQ ; MA # c", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::BadTargetHex { source: 0x430, .. }));
    }

    #[test]
    fn test_rejects_invalid_codepoints() {
        let err = parse_confusables("D800 ; 0061 ; MA # c", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::InvalidSource(0xD800)));

        let err = parse_confusables("0430 ; 110000 ; MA # c", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTarget(0x110000)));
    }

    #[test]
    fn test_rejects_duplicate_source() {
        let text = "0430 ; 0061 ; MA # c\n0430 ; 0062 ; MA # c\n";
        let err = parse_confusables(text, "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateSource(0x430)));
    }

    #[test]
    fn test_rejects_empty_target() {
        let err = parse_confusables("0430 ;  ; MA # c", "u", "latest").unwrap_err();
        assert!(matches!(err, ParseError::EmptyTarget(0x430)));
    }

    #[test]
    fn test_names_heuristic_tolerates_malformed_comments() {
        // No arrow, no parenthesis: names stay empty, parsing still succeeds.
        let df = parse_confusables("0430 ; 0061 ; MA # just a note", "u", "latest").unwrap();
        assert!(df.mappings[0].source_name.is_empty());
        assert!(df.mappings[0].target_name.is_empty());

        // Too many arrows: heuristic gives up rather than guessing.
        let df = parse_confusables(
            "0430 ; 0061 ; MA # A \u{2192} B \u{2192} C",
            "u",
            "latest",
        )
        .unwrap();
        assert!(df.mappings[0].source_name.is_empty());
    }

    #[test]
    fn test_parsed_output_loads() {
        let df = parse_confusables(SAMPLE, "test://source", "latest").unwrap();
        let json = serde_json::to_vec(&df).unwrap();
        let db = crate::Db::load(&json).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.lookup('\u{430}'), Some(vec!['a']));
    }
}
