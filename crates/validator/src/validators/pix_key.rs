//! PIX key validation and classification.
//!
//! A PIX key addresses an account in Brazil's instant payment system. It is
//! one of: an e-mail address, a phone number, a CPF, a CNPJ, a UUID-shaped
//! random key, or any other alias of at least five characters.
//!
//! Validation is the OR of those rules, tried in that order on the trimmed
//! key. Because the phone rule only counts digits, any 10- or 11-digit
//! string is accepted (and classified) as a phone key, including numbers
//! that are also valid CPFs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::validators::{BrPhone, Cnpj, Cpf, Email, MinLength, RandomKey, trim_blank};

/// Minimum length, in UTF-16 code units, of a generic (untyped) PIX key.
pub const MIN_GENERIC_KEY_CHARS: usize = 5;

// ============================================================================
// KEY KIND
// ============================================================================

/// The rule a PIX key was accepted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixKeyKind {
    /// E-mail address.
    Email,
    /// Phone number with area code.
    Phone,
    /// Individual taxpayer number.
    Cpf,
    /// Corporate taxpayer number.
    Cnpj,
    /// UUID-shaped random key.
    Random,
    /// Any other alias long enough to be accepted.
    Generic,
}

impl PixKeyKind {
    /// Every kind, in classification order.
    pub const ALL: [PixKeyKind; 6] = [
        PixKeyKind::Email,
        PixKeyKind::Phone,
        PixKeyKind::Cpf,
        PixKeyKind::Cnpj,
        PixKeyKind::Random,
        PixKeyKind::Generic,
    ];

    /// Stable identifier, as used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            PixKeyKind::Email => "email",
            PixKeyKind::Phone => "phone",
            PixKeyKind::Cpf => "cpf",
            PixKeyKind::Cnpj => "cnpj",
            PixKeyKind::Random => "random",
            PixKeyKind::Generic => "generic",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            PixKeyKind::Email => "e-mail",
            PixKeyKind::Phone => "phone number",
            PixKeyKind::Cpf => "CPF",
            PixKeyKind::Cnpj => "CNPJ",
            PixKeyKind::Random => "random key",
            PixKeyKind::Generic => "generic key",
        }
    }
}

impl fmt::Display for PixKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown [`PixKeyKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown PIX key kind `{0}` (expected one of: email, phone, cpf, cnpj, random, generic)")]
pub struct ParsePixKeyKindError(String);

impl FromStr for PixKeyKind {
    type Err = ParsePixKeyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PixKeyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePixKeyKindError(s.to_owned()))
    }
}

// ============================================================================
// PIX KEY VALIDATOR
// ============================================================================

/// Typed key rules, in the order they are tried.
const TYPED_RULES: [(PixKeyKind, &dyn Validate<Input = str>); 5] = [
    (PixKeyKind::Email, &Email),
    (PixKeyKind::Phone, &BrPhone),
    (PixKeyKind::Cpf, &Cpf),
    (PixKeyKind::Cnpj, &Cnpj),
    (PixKeyKind::Random, &RandomKey),
];

/// Validates and classifies PIX keys.
///
/// ```
/// use pixdoc_validator::validators::{PixKey, PixKeyKind};
/// use pixdoc_validator::foundation::Validate;
///
/// let pix = PixKey::new();
/// assert!(pix.validate("financeiro@loja.com.br").is_ok());
/// assert_eq!(pix.classify("11.222.333/0001-81"), Some(PixKeyKind::Cnpj));
/// assert_eq!(pix.classify("minha-loja"), Some(PixKeyKind::Generic));
/// assert_eq!(pix.classify("ab"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixKey {
    generic: MinLength,
}

impl PixKey {
    /// Creates a PIX key validator with the default generic-key length.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generic: MinLength::new(MIN_GENERIC_KEY_CHARS),
        }
    }

    /// Returns the kind of the first rule that accepts `input`, or `None`
    /// when the key is invalid.
    pub fn classify(&self, input: &str) -> Option<PixKeyKind> {
        let kind = self.match_kind(input).ok();
        tracing::trace!(kind = kind.map(PixKeyKind::as_str), "classified PIX key");
        kind
    }

    fn match_kind(&self, input: &str) -> Result<PixKeyKind, ValidationError> {
        let key = trim_blank(input);
        if key.is_empty() {
            return Err(ValidationError::new(
                "pix_key_empty",
                "PIX key cannot be empty",
            ));
        }

        let mut rejected = Vec::with_capacity(TYPED_RULES.len());
        for (kind, rule) in TYPED_RULES {
            match rule.validate(key) {
                Ok(()) => return Ok(kind),
                Err(e) => rejected.push(e),
            }
        }

        self.generic
            .validate(key)
            .map(|()| PixKeyKind::Generic)
            .map_err(|_| {
                ValidationError::new(
                    "pix_key_too_short",
                    format!(
                        "PIX key must be an e-mail, phone, CPF, CNPJ, random key or have at least {} characters",
                        self.generic.min
                    ),
                )
                .with_param("min", self.generic.min.to_string())
                .with_nested(rejected)
            })
    }
}

impl Default for PixKey {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PixKey {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.match_kind(input).map(|_| ())
    }
}

/// Creates a [`PixKey`] validator.
#[must_use]
pub fn pix_key() -> PixKey {
    PixKey::new()
}

/// Returns true if `input` is an acceptable PIX key.
pub fn is_valid_pix_key(input: &str) -> bool {
    PixKey::new().is_valid(input)
}

/// Classifies `input` as a PIX key; `None` when it is not a valid key.
pub fn classify_pix_key(input: &str) -> Option<PixKeyKind> {
    PixKey::new().classify(input)
}

// ============================================================================
// TESTS
// ============================================================================
