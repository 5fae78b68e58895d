//! NOT combinator - logical negation of validators

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// Succeeds when the inner validator fails and vice versa.
///
/// ```
/// use pixdoc_validator::prelude::*;
///
/// // A generic PIX alias that must not look like a phone number.
/// let alias = min_length(5).and(br_phone().not());
/// assert!(alias.validate("minha-loja").is_ok());
/// assert!(alias.validate("11988887777").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::cpf;

    #[test]
    fn test_not_inverts() {
        let validator = not(cpf());
        assert!(validator.validate("11111111111").is_ok());
        let err = validator.validate("12345678909").unwrap_err();
        assert_eq!(err.code, "not_failed");
    }

    #[test]
    fn test_double_negation() {
        let validator = not(not(cpf()));
        assert!(validator.validate("12345678909").is_ok());
        assert!(validator.validate("12345678900").is_err());
        assert!(validator.into_inner().into_inner().is_valid("123.456.789-09"));
    }
}
