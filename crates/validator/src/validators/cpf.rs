//! CPF (Cadastro de Pessoas Físicas) validator and formatter.
//!
//! A CPF has 11 digits: a 9-digit base followed by two check digits, each a
//! mod-11 weighted sum over every digit before it.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::digits::{apply_mask, digit_array, is_repeated};

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

static CPF_MASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{3})(\d{3})(\d{3})(\d{2})").expect("CPF mask is a valid regex")
});

/// Check digit for a CPF prefix.
///
/// Weights run from `prefix.len() + 1` down to 2; a remainder that would
/// give 10 or 11 maps to 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();
    match 11 - sum % 11 {
        10 | 11 => 0,
        digit => digit as u8,
    }
}

/// Computes both check digits for a 9-digit CPF base.
///
/// ```
/// use pixdoc_validator::validators::cpf::check_digits;
///
/// assert_eq!(check_digits([1, 2, 3, 4, 5, 6, 7, 8, 9]), [0, 9]);
/// ```
pub fn check_digits(base: [u8; 9]) -> [u8; 2] {
    let first = check_digit(&base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(&base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

// ============================================================================
// CPF VALIDATOR
// ============================================================================

/// Validates CPF numbers, with or without punctuation.
///
/// Rejection reasons have their own error codes:
///
/// | Code | Meaning |
/// |---|---|
/// | `cpf_length` | not exactly 11 digits |
/// | `cpf_repeated_digits` | all digits equal, e.g. `111.111.111-11` |
/// | `cpf_check_digit` | first or second check digit does not match |
///
/// ```
/// use pixdoc_validator::validators::cpf;
/// use pixdoc_validator::foundation::Validate;
///
/// assert!(cpf().validate("123.456.789-09").is_ok());
/// assert_eq!(cpf().validate("123.456.789-00").unwrap_err().code, "cpf_check_digit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cpf;

impl Validate for Cpf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = digit_array::<CPF_DIGITS>(input).map_err(|actual| {
            ValidationError::digit_count("cpf_length", "CPF", CPF_DIGITS, actual)
        })?;

        if is_repeated(&digits) {
            return Err(ValidationError::new(
                "cpf_repeated_digits",
                "CPF cannot have all digits equal",
            ));
        }

        for position in [9, 10] {
            let expected = check_digit(&digits[..position]);
            if digits[position] != expected {
                return Err(ValidationError::new("cpf_check_digit", "Invalid CPF check digit")
                    .with_param("position", (position + 1).to_string()));
            }
        }

        Ok(())
    }
}

/// Creates a [`Cpf`] validator.
#[must_use]
pub const fn cpf() -> Cpf {
    Cpf
}

/// Returns true if `input` holds a CPF with valid check digits.
pub fn is_valid_cpf(input: &str) -> bool {
    Cpf.is_valid(input)
}

/// Formats a CPF as `NNN.NNN.NNN-NN`.
///
/// Fewer than 11 digits are returned as bare digits.
///
/// ```
/// use pixdoc_validator::validators::format_cpf;
///
/// assert_eq!(format_cpf("12345678909"), "123.456.789-09");
/// assert_eq!(format_cpf("1234567"), "1234567");
/// ```
pub fn format_cpf(input: &str) -> String {
    apply_mask(&CPF_MASK, "${1}.${2}.${3}-${4}", input)
}

// ============================================================================
// TESTS
// ============================================================================
