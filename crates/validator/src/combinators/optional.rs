//! OPTIONAL combinator - lets blank form fields through

use crate::foundation::{Validate, ValidationError};
use crate::validators::trim_blank;

/// Treats empty or blank input (see [`trim_blank`]) as "not provided" and
/// accepts it; anything else goes through the inner validator.
///
/// ```
/// use pixdoc_validator::prelude::*;
///
/// let optional_cpf = cpf().optional();
/// assert!(optional_cpf.validate("").is_ok());
/// assert!(optional_cpf.validate("   ").is_ok());
/// assert!(optional_cpf.validate("123.456.789-09").is_ok());
/// assert!(optional_cpf.validate("123.456.789-00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate<Input = str>,
{
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if trim_blank(input).is_empty() {
            Ok(())
        } else {
            self.inner.validate(input)
        }
    }
}

/// Creates an `Optional` combinator from a validator.
pub fn optional<V>(validator: V) -> Optional<V>
where
    V: Validate<Input = str>,
{
    Optional::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::cnpj;

    #[test]
    fn test_optional_blank() {
        let validator = optional(cnpj());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate(" \t").is_ok());
        assert!(validator.validate("\u{feff}").is_ok());
    }

    #[test]
    fn test_optional_present_valid() {
        let validator = optional(cnpj());
        assert!(validator.validate("11.222.333/0001-81").is_ok());
    }

    #[test]
    fn test_optional_present_invalid() {
        let validator = optional(cnpj());
        let err = validator.validate("11.222.333/0001-80").unwrap_err();
        assert_eq!(err.code, "cnpj_check_digit");
    }
}
