/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! Fixed-width field formatting primitives.
//!
//! Fedwire records are fixed-width: every field occupies a registered number of
//! characters, padded on the right with spaces. Widths are counted in characters,
//! not bytes, so a multibyte character occupies exactly one position. These
//! helpers implement the two halves of the round-trip contract:
//! - [`parse_string_field`] strips padding when reading
//! - [`alpha_field`] truncates and re-pads when writing
//!
//! plus the charset predicates used by validation.

/// Strips the surrounding padding from a raw fixed-width field value.
///
/// # Arguments
/// * `raw` - The raw field slice cut out of a record
#[must_use]
pub fn parse_string_field(raw: &str) -> String {
    raw.trim().to_string()
}

/// Formats a value into a fixed-width alphanumeric field.
///
/// Values longer than `width` characters are truncated, shorter values are
/// padded on the right with spaces. The result is always exactly `width`
/// characters long.
///
/// # Arguments
/// * `value` - The field value to format
/// * `width` - The registered field width in characters
#[must_use]
pub fn alpha_field(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// Returns true if every character is printable ASCII (space through tilde).
///
/// The Fedwire character set is plain printable ASCII. Anything outside it,
/// latin-1 symbols like `®` included, fails validation. The empty string is
/// valid; presence is checked separately.
#[must_use]
pub fn is_alphanumeric(value: &str) -> bool {
    value.chars().all(|c| matches!(c, ' '..='~'))
}

/// Returns true if every character is an ASCII digit.
///
/// The empty string is valid; presence is checked separately.
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}
