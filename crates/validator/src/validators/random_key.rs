//! Random PIX key (chave aleatória) validator.
//!
//! Random keys are issued by the payment system as UUID-shaped tokens:
//! `8-4-4-4-12` hexadecimal groups separated by hyphens. Only the textual
//! shape is checked; version and variant bits are not.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static RANDOM_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("random key pattern is a valid regex")
});

crate::validator! {
    /// Validates UUID-shaped random PIX keys, case-insensitively.
    pub RandomKey for str;
    rule(input) { RANDOM_KEY_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("random_key") }
    fn random_key();
}
