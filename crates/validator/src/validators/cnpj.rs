//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validator and formatter.
//!
//! A CNPJ has 14 digits: an 8-digit company root, a 4-digit branch number
//! and two mod-11 check digits.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::digits::{apply_mask, digit_array, is_repeated};

/// Number of digits in a CNPJ.
pub const CNPJ_DIGITS: usize = 14;

static CNPJ_MASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})").expect("CNPJ mask is a valid regex")
});

/// Check digit for a 12- or 13-digit CNPJ prefix.
///
/// The weight starts at `len - 7` and counts down, wrapping from 2 back to 9
/// (`5 4 3 2 9 8 7 6 5 4 3 2` for the first digit). Remainders 0 and 1 give
/// a check digit of 0.
fn check_digit(prefix: &[u8]) -> u8 {
    let mut weight = prefix.len() as u32 - 7;
    let mut sum = 0u32;
    for &digit in prefix {
        sum += u32::from(digit) * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }
    match sum % 11 {
        0 | 1 => 0,
        rest => (11 - rest) as u8,
    }
}

/// Computes both check digits for a 12-digit CNPJ base.
///
/// ```
/// use pixdoc_validator::validators::cnpj::check_digits;
///
/// assert_eq!(check_digits([1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
/// ```
pub fn check_digits(base: [u8; 12]) -> [u8; 2] {
    let first = check_digit(&base);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(&base);
    extended[12] = first;
    [first, check_digit(&extended)]
}

// ============================================================================
// CNPJ VALIDATOR
// ============================================================================

/// Validates CNPJ numbers, with or without punctuation.
///
/// Error codes mirror [`Cpf`](crate::validators::Cpf): `cnpj_length`,
/// `cnpj_repeated_digits` and `cnpj_check_digit`.
///
/// ```
/// use pixdoc_validator::validators::cnpj;
/// use pixdoc_validator::foundation::Validate;
///
/// assert!(cnpj().validate("11.222.333/0001-81").is_ok());
/// assert!(cnpj().validate("11.222.333/0001-82").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cnpj;

impl Validate for Cnpj {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = digit_array::<CNPJ_DIGITS>(input).map_err(|actual| {
            ValidationError::digit_count("cnpj_length", "CNPJ", CNPJ_DIGITS, actual)
        })?;

        if is_repeated(&digits) {
            return Err(ValidationError::new(
                "cnpj_repeated_digits",
                "CNPJ cannot have all digits equal",
            ));
        }

        for position in [12, 13] {
            let expected = check_digit(&digits[..position]);
            if digits[position] != expected {
                return Err(
                    ValidationError::new("cnpj_check_digit", "Invalid CNPJ check digit")
                        .with_param("position", (position + 1).to_string()),
                );
            }
        }

        Ok(())
    }
}

/// Creates a [`Cnpj`] validator.
#[must_use]
pub const fn cnpj() -> Cnpj {
    Cnpj
}

/// Returns true if `input` holds a CNPJ with valid check digits.
pub fn is_valid_cnpj(input: &str) -> bool {
    Cnpj.is_valid(input)
}

/// Formats a CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Fewer than 14 digits are returned as bare digits.
///
/// ```
/// use pixdoc_validator::validators::format_cnpj;
///
/// assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
/// ```
pub fn format_cnpj(input: &str) -> String {
    apply_mask(&CNPJ_MASK, "${1}.${2}.${3}/${4}-${5}", input)
}

// ============================================================================
// TESTS
// ============================================================================
