//! # pixdoc-validator
//!
//! Validation and formatting of Brazilian payment identifiers: CPF and CNPJ
//! taxpayer numbers, phone numbers, e-mail addresses and PIX keys.
//!
//! ## Quick Start
//!
//! ```
//! use pixdoc_validator::prelude::*;
//!
//! assert!(cpf().validate("123.456.789-09").is_ok());
//! assert_eq!(format_phone("11988887777"), "(11) 98888-7777");
//! assert_eq!(classify_pix_key("financeiro@loja.com.br"), Some(PixKeyKind::Email));
//!
//! // Validators compose with .and() / .or() / .not() / .optional()
//! let tax_id = cpf().or(cnpj());
//! assert!(tax_id.validate("11.222.333/0001-81").is_ok());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Documents**: [`Cpf`](validators::Cpf), [`Cnpj`](validators::Cnpj)
//! - **Contact**: [`Email`](validators::Email), [`BrPhone`](validators::BrPhone)
//! - **PIX**: [`PixKey`](validators::PixKey), [`RandomKey`](validators::RandomKey)
//! - **Text**: [`NotBlank`](validators::NotBlank), [`MinLength`](validators::MinLength),
//!   [`DigitCount`](validators::DigitCount)
//!
//! Whole forms are checked by [`ProfileForm`], [`ClientForm`] and
//! [`ChargeForm`]; masked input fields are driven by [`mask_input`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `trace` and `debug` level and never
//! installs a subscriber.

// ValidationError is returned by value from every validator; boxing it would
// add an allocation to each call.
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod document;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use document::{DocumentKind, ParseDocumentKindError, mask_input, normalize};
pub use form::{
    ChargeForm, ClientForm, NormalizedCharge, NormalizedClient, NormalizedProfile, ProfileForm,
};
pub use validators::{
    PixKeyKind, classify_pix_key, extract_digits, format_cnpj, format_cpf, format_phone,
    is_valid_cnpj, is_valid_cpf, is_valid_email, is_valid_phone, is_valid_pix_key,
    parse_number,
};
