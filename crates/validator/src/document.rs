//! Document kinds and as-you-type input masking.
//!
//! Input fields for phones, CPFs and CNPJs keep their value formatted while
//! the user types. [`mask_input`] implements that behaviour: a keystroke that
//! would push the field past the document's digit capacity is dropped, and
//! anything else is re-formatted with the document's mask.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::Validate;
use crate::validators::{
    BrPhone, Cnpj, Cpf, count_digits, digits::digit_array, extract_digits, format_cnpj,
    format_cpf, format_phone,
};
use crate::validators::{cnpj::CNPJ_DIGITS, cpf::CPF_DIGITS, phone::MOBILE_DIGITS};

/// A document type with a canonical digit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Individual taxpayer number, `NNN.NNN.NNN-NN`.
    Cpf,
    /// Corporate taxpayer number, `NN.NNN.NNN/NNNN-NN`.
    Cnpj,
    /// Phone number with area code, `(DD) NNNNN-NNNN`.
    Phone,
}

impl DocumentKind {
    /// Maximum number of digits the input field accepts.
    pub const fn max_digits(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_DIGITS,
            DocumentKind::Cnpj => CNPJ_DIGITS,
            DocumentKind::Phone => MOBILE_DIGITS,
        }
    }

    /// Formats `input` with this document's mask.
    pub fn format(self, input: &str) -> String {
        match self {
            DocumentKind::Cpf => format_cpf(input),
            DocumentKind::Cnpj => format_cnpj(input),
            DocumentKind::Phone => format_phone(input),
        }
    }

    /// Checks `input` with this document's validator.
    pub fn is_valid(self, input: &str) -> bool {
        match self {
            DocumentKind::Cpf => Cpf.is_valid(input),
            DocumentKind::Cnpj => Cnpj.is_valid(input),
            DocumentKind::Phone => BrPhone.is_valid(input),
        }
    }

    /// Recognises a taxpayer number from its digits.
    ///
    /// Eleven digits with valid check digits are a CPF, fourteen a CNPJ.
    /// Phones are never detected: every CPF would also pass as one.
    ///
    /// ```
    /// use pixdoc_validator::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::detect("123.456.789-09"), Some(DocumentKind::Cpf));
    /// assert_eq!(DocumentKind::detect("11222333000181"), Some(DocumentKind::Cnpj));
    /// assert_eq!(DocumentKind::detect("11988887777"), None);
    /// ```
    pub fn detect(input: &str) -> Option<Self> {
        if digit_array::<CPF_DIGITS>(input).is_ok() {
            Cpf.is_valid(input).then_some(DocumentKind::Cpf)
        } else if digit_array::<CNPJ_DIGITS>(input).is_ok() {
            Cnpj.is_valid(input).then_some(DocumentKind::Cnpj)
        } else {
            None
        }
    }

    /// Stable identifier, as used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
            DocumentKind::Phone => "phone",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`DocumentKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document kind `{0}` (expected one of: cpf, cnpj, phone)")]
pub struct ParseDocumentKindError(String);

impl FromStr for DocumentKind {
    type Err = ParseDocumentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(DocumentKind::Cpf),
            "cnpj" => Ok(DocumentKind::Cnpj),
            "phone" => Ok(DocumentKind::Phone),
            _ => Err(ParseDocumentKindError(s.to_owned())),
        }
    }
}

/// Applies one edit to a masked input field.
///
/// `previous` is the value currently displayed and `typed` the raw text after
/// the edit. When `typed` holds more digits than the document allows, the
/// edit is rejected and `previous` is kept; otherwise the new value is
/// `typed` reformatted.
///
/// ```
/// use pixdoc_validator::{DocumentKind, mask_input};
///
/// let shown = mask_input(DocumentKind::Cpf, "", "1234567890");
/// assert_eq!(shown, "1234567890");
/// let shown = mask_input(DocumentKind::Cpf, &shown, "12345678909");
/// assert_eq!(shown, "123.456.789-09");
/// let shown = mask_input(DocumentKind::Cpf, &shown, "123.456.789-091");
/// assert_eq!(shown, "123.456.789-09");
/// ```
pub fn mask_input(kind: DocumentKind, previous: &str, typed: &str) -> String {
    if count_digits(typed) > kind.max_digits() {
        tracing::trace!(kind = kind.as_str(), "rejected keystroke past digit capacity");
        return previous.to_owned();
    }
    kind.format(typed)
}

/// Storage form of a document: its digits only.
pub fn normalize(input: &str) -> String {
    extract_digits(input)
}
