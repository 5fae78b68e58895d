//! Brazilian phone number validator and formatter.
//!
//! Numbers carry a two-digit area code (DDD) followed by an 8-digit landline
//! or a 9-digit mobile number. Only the digit count is checked; area codes
//! are not range-checked and there is no check digit.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::digits::{apply_mask, count_digits};

/// Digits in a landline number with area code: `DD NNNN-NNNN`.
pub const LANDLINE_DIGITS: usize = 10;

/// Digits in a mobile number with area code: `DD 9NNNN-NNNN`.
pub const MOBILE_DIGITS: usize = 11;

static LANDLINE_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{4})(\d{4})").expect("landline mask is a valid regex"));

static MOBILE_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{5})(\d{4})").expect("mobile mask is a valid regex"));

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates Brazilian phone numbers with area code.
///
/// Formatting characters are ignored; the number is valid when it has 10
/// (landline) or 11 (mobile) digits.
///
/// # Examples
///
/// ```
/// use pixdoc_validator::validators::BrPhone;
/// use pixdoc_validator::foundation::Validate;
///
/// let phone = BrPhone;
/// assert!(phone.validate("(11) 98888-7777").is_ok());
/// assert!(phone.validate("11 3333 4444").is_ok());
/// assert!(phone.validate("3333-4444").is_err()); // missing area code
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrPhone;

impl Validate for BrPhone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_phone",
                "Phone number cannot be empty",
            ));
        }

        let count = count_digits(input);
        if (LANDLINE_DIGITS..=MOBILE_DIGITS).contains(&count) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone_digit_count",
                format!(
                    "Phone number must have {LANDLINE_DIGITS} or {MOBILE_DIGITS} digits (found {count})"
                ),
            )
            .with_param("actual", count.to_string()))
        }
    }
}

/// Creates a [`BrPhone`] validator.
#[must_use]
pub const fn br_phone() -> BrPhone {
    BrPhone
}

/// Returns true if `input` has 10 or 11 digits.
pub fn is_valid_phone(input: &str) -> bool {
    BrPhone.is_valid(input)
}

// ============================================================================
// FORMATTER
// ============================================================================

/// Formats a phone number as `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`.
///
/// Up to 10 digits use the landline mask, more use the mobile mask. Partial
/// input that the mask cannot cover yet is returned as bare digits so the
/// value keeps up with the user while typing.
///
/// ```
/// use pixdoc_validator::validators::format_phone;
///
/// assert_eq!(format_phone("11988887777"), "(11) 98888-7777");
/// assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
/// assert_eq!(format_phone("11988"), "11988");
/// ```
pub fn format_phone(input: &str) -> String {
    if count_digits(input) <= LANDLINE_DIGITS {
        apply_mask(&LANDLINE_MASK, "(${1}) ${2}-${3}", input)
    } else {
        apply_mask(&MOBILE_MASK, "(${1}) ${2}-${3}", input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
