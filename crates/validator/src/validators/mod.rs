//! Built-in validators
//!
//! # Categories
//!
//! - **Digits**: [`extract_digits`], [`DigitCount`]
//! - **Length**: [`NotBlank`], [`MinLength`], [`trim_blank`]
//! - **Numbers**: [`parse_number`], [`Numeric`]
//! - **Contact**: [`Email`], [`BrPhone`]
//! - **Taxpayer IDs**: [`Cpf`], [`Cnpj`]
//! - **PIX**: [`RandomKey`], [`PixKey`]
//!
//! Every document type also has a boolean shortcut (`is_valid_cpf`, …) and,
//! where a canonical layout exists, a formatter (`format_cpf`, …).
//!
//! # Examples
//!
//! ```
//! use pixdoc_validator::validators::*;
//!
//! assert!(is_valid_cpf("123.456.789-09"));
//! assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
//! assert_eq!(classify_pix_key("a@b.co"), Some(PixKeyKind::Email));
//! ```

pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod email;
pub mod length;
pub mod number;
pub mod phone;
pub mod pix_key;
pub mod random_key;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use digits::{DigitCount, count_digits, digit_count, extract_digits};
pub use length::{
    MinLength, NotBlank, is_blank_char, min_length, not_blank, trim_blank, utf16_len,
};
pub use number::{NumberRange, Numeric, number_range, numeric, parse_number};

pub use email::{Email, email, is_valid_email};
pub use phone::{BrPhone, br_phone, format_phone, is_valid_phone};

pub use cnpj::{Cnpj, cnpj, format_cnpj, is_valid_cnpj};
pub use cpf::{Cpf, cpf, format_cpf, is_valid_cpf};

pub use pix_key::{
    MIN_GENERIC_KEY_CHARS, ParsePixKeyKindError, PixKey, PixKeyKind, classify_pix_key,
    is_valid_pix_key, pix_key,
};
pub use random_key::{RandomKey, random_key};
