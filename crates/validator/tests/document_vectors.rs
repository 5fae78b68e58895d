//! Known document vectors and cross-module behaviour through the public API.

use pixdoc_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn mutations(valid: &str) -> impl Iterator<Item = String> + '_ {
    (0..valid.len()).flat_map(move |i| {
        (b'0'..=b'9')
            .filter(move |&d| d != valid.as_bytes()[i])
            .map(move |d| {
                let mut bytes = valid.as_bytes().to_vec();
                bytes[i] = d;
                String::from_utf8(bytes).unwrap()
            })
    })
}

// ============================================================================
// CPF / CNPJ
// ============================================================================

#[rstest]
#[case("52998224725")]
#[case("11144477735")]
#[case("93541134780")]
fn every_single_digit_change_breaks_cpf(#[case] valid: &str) {
    assert!(is_valid_cpf(valid));
    for mutated in mutations(valid) {
        assert!(!is_valid_cpf(&mutated), "{mutated} should be rejected");
    }
}

#[rstest]
#[case("11222333000181")]
#[case("11444777000161")]
#[case("00000000000191")]
fn every_single_digit_change_breaks_cnpj(#[case] valid: &str) {
    assert!(is_valid_cnpj(valid));
    for mutated in mutations(valid) {
        assert!(!is_valid_cnpj(&mutated), "{mutated} should be rejected");
    }
}

#[test]
fn mod_eleven_collisions_exist() {
    // A remainder of 0 or 1 both give check digit 0, so some substitutions
    // are not caught.
    assert!(is_valid_cpf("12345678909"));
    assert!(is_valid_cpf("22345678909"));
}

#[test]
fn repeated_digits_are_rejected() {
    for d in '0'..='9' {
        assert!(!is_valid_cpf(&d.to_string().repeat(11)));
        assert!(!is_valid_cnpj(&d.to_string().repeat(14)));
    }
}

#[test]
fn known_vectors_format_and_validate() {
    assert_eq!(format_cpf("12345678909"), "123.456.789-09");
    assert!(is_valid_cpf("123.456.789-09"));

    let cnpj = format_cnpj("11222333000181");
    assert_eq!(cnpj, "11.222.333/0001-81");
    assert!(is_valid_cnpj(&cnpj));
}

// ============================================================================
// PHONE / EMAIL
// ============================================================================

#[rstest]
#[case("11988887777", "(11) 98888-7777")]
#[case("1133334444", "(11) 3333-4444")]
#[case("(11) 3333-4444", "(11) 3333-4444")]
#[case("113333", "113333")]
fn phone_formatting(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_phone(input), expected);
}

#[rstest]
#[case("a@b.co", true)]
#[case("a@b", false)]
#[case("a b@c.com", false)]
fn email_vectors(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_email(input), expected);
}

// ============================================================================
// PIX KEYS
// ============================================================================

#[rstest]
#[case("", None)]
#[case("ab", None)]
#[case("abcde", Some(PixKeyKind::Generic))]
#[case("a@b.co", Some(PixKeyKind::Email))]
#[case("123.456.789-09", Some(PixKeyKind::Phone))]
#[case("11.222.333/0001-81", Some(PixKeyKind::Cnpj))]
#[case("123e4567-e89b-12d3-a456-426614174000", Some(PixKeyKind::Random))]
fn pix_key_vectors(#[case] key: &str, #[case] expected: Option<PixKeyKind>) {
    assert_eq!(classify_pix_key(key), expected);
    assert_eq!(is_valid_pix_key(key), expected.is_some());
}

#[test]
fn pix_key_error_explains_every_rule() {
    let err = pix_key().validate("abc").unwrap_err();
    let codes: Vec<_> = err.nested.iter().map(|e| e.code.to_string()).collect();
    assert_eq!(
        codes,
        [
            "invalid_format",
            "phone_digit_count",
            "cpf_length",
            "cnpj_length",
            "invalid_format"
        ]
    );
}

// ============================================================================
// DOCUMENT KINDS
// ============================================================================

#[test]
fn detect_then_format() {
    for input in ["52998224725", "11444777000161"] {
        let kind = DocumentKind::detect(input).unwrap();
        assert!(kind.is_valid(&kind.format(input)));
        assert_eq!(normalize(&kind.format(input)), input);
    }
}
