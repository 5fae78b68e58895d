//! E-mail address validator
//!
//! Deliberately permissive: one `@`, a dot somewhere after it, no whitespace,
//! and nothing empty around those separators. The byte order mark counts as
//! whitespace. Full RFC 5322 parsing is not attempted.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("e-mail pattern is a valid regex")
});

crate::validator! {
    /// Validates e-mail addresses of the form `local@domain.tld`.
    ///
    /// ```
    /// use pixdoc_validator::validators::email;
    /// use pixdoc_validator::foundation::Validate;
    ///
    /// assert!(email().validate("financeiro@loja.com.br").is_ok());
    /// assert!(email().validate("financeiro@loja").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

/// Returns true if `input` looks like an e-mail address.
pub fn is_valid_email(input: &str) -> bool {
    Email.is_valid(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co")]
    #[case("user@example.com")]
    #[case("nome.sobrenome+pix@empresa.com.br")]
    #[case("a@b.c.d")]
    #[case("josé@correio.br")]
    fn test_valid_emails(#[case] input: &str) {
        assert!(is_valid_email(input), "{input} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("a@b")]
    #[case("a b@c.com")]
    #[case("ab@c .com")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@.com")]
    #[case("user@example.")]
    #[case("a@@b.com")]
    #[case("a@b@c.com")]
    #[case(" a@b.co")]
    #[case("\u{feff}a@b.co")]
    #[case("a@b.co\u{feff}")]
    fn test_invalid_emails(#[case] input: &str) {
        assert!(!is_valid_email(input), "{input:?} should be invalid");
    }

    #[test]
    fn test_error_code() {
        let err = email().validate("invalid").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected"), Some("email"));
    }
}
