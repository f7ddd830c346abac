//! Unicode scalar value validation.
//!
//! Dataset records carry codepoints as raw integers. Validation runs on the
//! full-width `i64` value so an oversized integer (e.g. `0x1_0000_0041`)
//! can never wrap into a valid-looking codepoint (`0x41`) through a
//! narrowing cast performed before the check.

/// Largest valid Unicode codepoint.
pub const MAX_CODEPOINT: i64 = 0x10FFFF;

/// First codepoint of the UTF-16 surrogate range.
pub const SURROGATE_START: i64 = 0xD800;

/// Last codepoint of the UTF-16 surrogate range.
pub const SURROGATE_END: i64 = 0xDFFF;

/// Check whether `cp` is a valid Unicode scalar value.
///
/// True iff `0 <= cp <= 0x10FFFF` and `cp` is not a UTF-16 surrogate.
///
/// # Examples
///
/// ```
/// use confusables::codepoint::is_valid_scalar;
///
/// assert!(is_valid_scalar(0x41));
/// assert!(is_valid_scalar(0x10FFFF));
/// assert!(!is_valid_scalar(-1));
/// assert!(!is_valid_scalar(0xD800));
/// assert!(!is_valid_scalar(0x110000));
/// assert!(!is_valid_scalar(0x1_0000_0041)); // would truncate to 'A'
/// ```
#[inline]
pub const fn is_valid_scalar(cp: i64) -> bool {
    matches!(cp, 0..=MAX_CODEPOINT) && !matches!(cp, SURROGATE_START..=SURROGATE_END)
}

/// Convert a raw integer codepoint to a `char`, validating first.
///
/// Returns `None` for anything [`is_valid_scalar`] rejects. The cast to
/// `u32` happens only after validation has passed on the full `i64`.
#[inline]
pub fn scalar(cp: i64) -> Option<char> {
    if !is_valid_scalar(cp) {
        return None;
    }
    char::from_u32(cp as u32)
}
