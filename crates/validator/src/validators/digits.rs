//! Digit extraction and digit-count validation
//!
//! Every document in this crate is validated on its digits only, so
//! punctuation typed by the user (`.`, `-`, `/`, parentheses, spaces) never
//! matters.

use regex::Regex;

use crate::foundation::ValidationError;

/// Keeps the ASCII digits of `input`, in order.
///
/// Never fails: empty or digit-free input yields an empty string.
///
/// ```
/// use pixdoc_validator::validators::extract_digits;
///
/// assert_eq!(extract_digits("123.456.789-09"), "12345678909");
/// assert_eq!(extract_digits("(11) 98888-8888"), "11988888888");
/// assert_eq!(extract_digits("sem números"), "");
/// ```
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Number of ASCII digits in `input`.
pub fn count_digits(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

/// Collects exactly `N` digit values out of `input`.
///
/// On a length mismatch returns the number of digits actually found.
pub(crate) fn digit_array<const N: usize>(input: &str) -> Result<[u8; N], usize> {
    let mut digits = [0u8; N];
    let mut found = 0;
    for b in input.bytes().filter(u8::is_ascii_digit) {
        if found < N {
            digits[found] = b - b'0';
        }
        found += 1;
    }
    if found == N { Ok(digits) } else { Err(found) }
}

/// True when every digit equals the first one (`00000000000`, `1111…`).
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Applies a fixed-width mask to the digits of `input`.
///
/// The mask is the first match of `pattern` in the digit string, rewritten
/// with `replacement`. When the pattern does not match (too few digits yet),
/// the digit string comes back unchanged; surplus digits after the match are
/// kept as they are.
pub(crate) fn apply_mask(pattern: &Regex, replacement: &str, input: &str) -> String {
    let digits = extract_digits(input);
    pattern.replace(&digits, replacement).into_owned()
}

// ============================================================================
// DIGIT COUNT
// ============================================================================

crate::validator! {
    /// Validates that the number of digits in a string is within `min..=max`,
    /// ignoring every non-digit character.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DigitCount { min: usize, max: usize } for str;
    rule(self, input) { (self.min..=self.max).contains(&count_digits(input)) }
    error(self, input) {
        ValidationError::new(
            "digit_count",
            format!("Must have between {} and {} digits", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", count_digits(input).to_string())
    }
    fn digit_count(min: usize, max: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("abc", "")]
    #[case("123.456.789-09", "12345678909")]
    #[case("11.222.333/0001-81", "11222333000181")]
    #[case("(11) 98888-7777", "11988887777")]
    #[case("١٢٣ 45", "45")] // non-ASCII digits are dropped
    fn test_extract_digits(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_digits(input), expected);
        assert_eq!(count_digits(input), expected.len());
    }

    #[test]
    fn test_digit_array_exact() {
        assert_eq!(digit_array::<3>("1-2-3"), Ok([1, 2, 3]));
    }

    #[test]
    fn test_digit_array_reports_actual_count() {
        assert_eq!(digit_array::<3>("12"), Err(2));
        assert_eq!(digit_array::<3>("12345"), Err(5));
        assert_eq!(digit_array::<3>(""), Err(0));
    }

    #[test]
    fn test_is_repeated() {
        assert!(is_repeated(&[7; 11]));
        assert!(is_repeated(&[]));
        assert!(!is_repeated(&[1, 1, 2]));
    }

    #[test]
    fn test_apply_mask_passthrough() {
        let pattern = Regex::new(r"(\d{2})(\d{2})").unwrap();
        assert_eq!(apply_mask(&pattern, "$1/$2", "12.34"), "12/34");
        assert_eq!(apply_mask(&pattern, "$1/$2", "1.2.3"), "123");
        assert_eq!(apply_mask(&pattern, "$1/$2", "12345"), "12/345");
    }

    #[test]
    fn test_digit_count_validator() {
        let v = digit_count(10, 11);
        assert!(v.validate("(11) 3333-4444").is_ok());
        assert!(v.validate("(11) 98888-7777").is_ok());

        let err = v.validate("123").unwrap_err();
        assert_eq!(err.code, "digit_count");
        assert_eq!(err.param("actual"), Some("3"));
    }
}
