//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::combinators::{And, Not, Optional, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type; every document validator in this crate
/// validates `str`.
///
/// # Examples
///
/// ```
/// use pixdoc_validator::foundation::{Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().all(|c| !c.is_lowercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("uppercase", "Must be uppercase"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("PIX").is_ok());
/// assert!(!Uppercase.is_valid("pix"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first failed rule
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean verdict of [`validate`](Self::validate).
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement `Validate`.
///
/// # Examples
///
/// ```
/// use pixdoc_validator::prelude::*;
///
/// let document = cpf().or(cnpj());
/// assert!(document.validate("123.456.789-09").is_ok());
/// assert!(document.validate("11.222.333/0001-81").is_ok());
/// assert!(document.validate("123").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Lets blank input through and validates everything else.
    fn optional(self) -> Optional<Self>
    where
        Self: Validate<Input = str>,
    {
        Optional::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
