//! Numeric text fields
//!
//! Charge values and installment counts are typed as free text. A value is
//! numeric when, after trimming blank characters, it is a finite decimal
//! literal (`"150"`, `"-2.5"`, `".5"`, `"1e3"`) or an unsigned `0x`/`0o`/`0b`
//! integer. Thousands separators and decimal commas are not numbers.

use crate::foundation::{Validate, ValidationError};
use crate::validators::trim_blank;

/// Parses a numeric text field, see the module docs for the accepted forms.
///
/// ```
/// use pixdoc_validator::validators::parse_number;
///
/// assert_eq!(parse_number(" 150.90 "), Some(150.9));
/// assert_eq!(parse_number("0x10"), Some(16.0));
/// assert_eq!(parse_number("1,5"), None);
/// assert_eq!(parse_number(""), None);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn parse_number(input: &str) -> Option<f64> {
    let text = trim_blank(input);
    if text.is_empty() {
        return None;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
    }

    // f64::from_str also knows "inf" and "NaN"; neither is a usable amount.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ============================================================================
// NUMERIC
// ============================================================================

crate::validator! {
    /// Validates that a text field holds a number.
    pub Numeric for str;
    rule(input) { parse_number(input).is_some() }
    error(input) {
        ValidationError::new("invalid_number", "Must be a valid number")
    }
    fn numeric();
}

// ============================================================================
// NUMBER RANGE
// ============================================================================

/// Validates that a text field holds a number within `min..=max`.
///
/// Non-numeric input fails with `invalid_number`, numbers outside the
/// bounds with `out_of_range`.
///
/// ```
/// use pixdoc_validator::validators::number_range;
/// use pixdoc_validator::foundation::Validate;
///
/// let installments = number_range(1.0, 60.0);
/// assert!(installments.validate("12").is_ok());
/// assert_eq!(installments.validate("61").unwrap_err().code, "out_of_range");
/// assert_eq!(installments.validate("doze").unwrap_err().code, "invalid_number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Validate for NumberRange {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let n = parse_number(input)
            .ok_or_else(|| ValidationError::new("invalid_number", "Must be a valid number"))?;

        if (self.min..=self.max).contains(&n) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "out_of_range",
                format!("Must be a number between {} and {}", self.min, self.max),
            )
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", n.to_string()))
        }
    }
}

#[must_use]
pub fn number_range(min: f64, max: f64) -> NumberRange {
    NumberRange::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("150", Some(150.0))]
    #[case(" 99.90\t", Some(99.9))]
    #[case("-2.5", Some(-2.5))]
    #[case("+3", Some(3.0))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("1e3", Some(1000.0))]
    #[case("0x1F", Some(31.0))]
    #[case("0o17", Some(15.0))]
    #[case("0b101", Some(5.0))]
    #[case("\u{feff}7", Some(7.0))]
    fn test_numbers(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("1,5")]
    #[case("1.000,00")]
    #[case("R$ 10")]
    #[case("NaN")]
    #[case("inf")]
    #[case("Infinity")]
    #[case("1e400")]
    #[case("0x")]
    #[case("0xg1")]
    #[case("-0x10")]
    #[case("0x+1")]
    #[case("1 2")]
    #[case("--1")]
    fn test_not_numbers(#[case] input: &str) {
        assert_eq!(parse_number(input), None, "{input:?}");
    }

    #[test]
    fn test_numeric_validator() {
        assert!(numeric().validate("10.5").is_ok());
        assert_eq!(numeric().validate("dez").unwrap_err().code, "invalid_number");
    }

    #[rstest]
    #[case("0", false)]
    #[case("1", true)]
    #[case("60", true)]
    #[case("61", false)]
    #[case("0.5", false)]
    #[case("59.5", true)]
    fn test_range_bounds_are_inclusive(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(number_range(1.0, 60.0).is_valid(input), ok);
    }

    #[test]
    fn test_range_error_params() {
        let err = number_range(1.0, 60.0).validate("61").unwrap_err();
        assert_eq!(err.code, "out_of_range");
        assert_eq!(err.param("max"), Some("60"));
        assert_eq!(err.param("actual"), Some("61"));
    }
}
