//! String length validators
//!
//! Lengths are measured in UTF-16 code units, the unit mobile text inputs
//! report. Accented letters count once (`"joão"` is four units) while
//! characters outside the Basic Multilingual Plane, such as emoji, count
//! twice.
//!
//! Blankness follows the same convention: Unicode white space and the byte
//! order mark (U+FEFF) are both treated as blank.

use crate::foundation::ValidationError;

/// Returns true for characters a text field treats as blank.
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Strips leading and trailing blank characters, see [`is_blank_char`].
pub fn trim_blank(input: &str) -> &str {
    input.trim_matches(is_blank_char)
}

/// Length of `input` in UTF-16 code units.
pub fn utf16_len(input: &str) -> usize {
    input.chars().map(char::len_utf16).sum()
}

// ============================================================================
// NOT BLANK
// ============================================================================

crate::validator! {
    /// Validates that a string has something other than blank characters.
    pub NotBlank for str;
    rule(input) { !trim_blank(input).is_empty() }
    error(input) { ValidationError::new("not_blank", "Must not be empty") }
    fn not_blank();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string is at least `min` UTF-16 code units long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { utf16_len(input) >= self.min }
    error(self, input) {
        ValidationError::new("min_length", format!("Must be at least {} characters", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", utf16_len(input).to_string())
    }
    fn min_length(min: usize);
}
