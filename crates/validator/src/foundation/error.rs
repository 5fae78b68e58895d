//! Validation failures.
//!
//! A rejected value is reported as a [`ValidationError`]: a stable code for
//! programs, an English message for people, the form field it belongs to and
//! a few parameters (`expected`, `actual`, `position`...). A whole form
//! reports its failures as [`ValidationErrors`], in field order.
//!
//! Codes and messages are `Cow<'static, str>`, so errors built from literals
//! do not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

type Text = Cow<'static, str>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why one value was rejected.
///
/// Renders as `field: message [code]`, with parameters and the failures of
/// tried alternatives appended:
///
/// ```
/// use pixdoc_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("cpf_length", "CPF must have 11 digits")
///     .with_field("cpf")
///     .with_param("actual", "9");
///
/// assert_eq!(error.param("actual"), Some("9"));
/// assert_eq!(error.to_string(), "cpf: CPF must have 11 digits [cpf_length] (actual=9)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable identifier, e.g. `cpf_check_digit` or `required`.
    pub code: Text,

    /// English description of the failure.
    pub message: Text,

    /// Form field the value came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Text>,

    /// Details such as the expected and actual digit counts, in insertion
    /// order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Text, Text)>,

    /// Why each alternative of a composite rule (PIX keys, `or`) failed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Attributes the error to a form field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<Text>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<Text>, value: impl Into<Text>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches the failures of the alternatives that were tried.
    #[must_use]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Value of the parameter `key`, if set.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_ref()))
    }

    /// Codes of this error and every nested one, depth-first.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes = vec![self.code.as_ref()];
        for alternative in &self.nested {
            codes.extend(alternative.codes());
        }
        codes
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{field}: ")?;
        }
        write!(f, "{} [{}]", self.message, self.code)?;

        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, " ({})", params.join(", "))?;
        }

        for alternative in &self.nested {
            write!(f, "\n{:width$}- ", "", width = (depth + 1) * 2)?;
            alternative.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl std::error::Error for ValidationError {}

// ----------------------------------------------------------------------------
// Common failures
// ----------------------------------------------------------------------------

impl ValidationError {
    /// A required form field was left blank.
    pub fn required(field: impl Into<Text>) -> Self {
        Self::new("required", "This field is required").with_field(field)
    }

    /// The value does not have the shape of `expected` (`email`,
    /// `random_key`...).
    pub fn invalid_format(expected: impl Into<Text>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// A fixed-length document has the wrong number of digits.
    pub fn digit_count(code: impl Into<Text>, document: &str, expected: usize, actual: usize) -> Self {
        Self::new(code, format!("{document} must have {expected} digits"))
            .with_param("expected", expected.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every failure found in a form, in the order the fields were checked.
///
/// Displays one error per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// First error reported for `field`.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field.as_deref() == Some(field))
    }

    /// `Ok(value)` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
