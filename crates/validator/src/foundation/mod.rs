//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! Validators are generic over their input type and compose with logical
//! combinators:
//!
//! ```
//! use pixdoc_validator::prelude::*;
//!
//! let tax_id = cpf().or(cnpj()).optional();
//! assert!(tax_id.validate("").is_ok());
//! assert!(tax_id.validate("11222333000181").is_ok());
//! assert!(tax_id.validate("11222333000182").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// # Examples
///
/// ```
/// use pixdoc_validator::foundation::{Validate, validate_with_all};
/// use pixdoc_validator::validators::{br_phone, cpf};
///
/// let validators: [&dyn Validate<Input = str>; 2] = [&br_phone(), &cpf()];
/// let errors = validate_with_all("1133334444", &validators).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}
