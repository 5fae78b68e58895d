//! OR combinator - logical disjunction of validators
//!
//! This module provides the [`Or`] combinator which combines two validators
//! with logical OR semantics - at least one validator must pass for the combined
//! validator to succeed.
//!
//! # Examples
//!
//! ```
//! use pixdoc_validator::combinators::Or;
//! use pixdoc_validator::foundation::Validate;
//! use pixdoc_validator::validators::{cnpj, cpf};
//!
//! let tax_id = Or::new(cpf(), cnpj());
//! assert!(tax_id.validate("123.456.789-09").is_ok());
//! assert!(tax_id.validate("11.222.333/0001-81").is_ok());
//! assert!(tax_id.validate("000.000.000-00").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// If the first validator passes, the second is not evaluated (short-circuits).
/// If both fail, the combined error contains both errors as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    // Chained `or`s report one flat list of alternatives.
                    let mut nested = if left_error.code == OR_FAILED {
                        left_error.nested
                    } else {
                        vec![left_error]
                    };
                    nested.push(right_error);
                    Err(ValidationError::new(OR_FAILED, "All alternatives failed")
                        .with_nested(nested))
                }
            },
        }
    }
}

const OR_FAILED: &str = "or_failed";

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
