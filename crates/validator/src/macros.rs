//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`] - struct + `Validate` impl + factory fn
//! - [`compose!`] - AND-chain multiple validators
//! - [`any_of!`] - OR-chain multiple validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// **Unit validator** (zero-sized, no fields):
/// ```
/// use pixdoc_validator::validator;
/// use pixdoc_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     pub OnlyDigits for str;
///     rule(input) { input.chars().all(|c| c.is_ascii_digit()) }
///     error(input) { ValidationError::new("only_digits", "must contain digits only") }
///     fn only_digits();
/// }
///
/// assert!(only_digits().validate("12345678909").is_ok());
/// assert!(only_digits().validate("123.456.789-09").is_err());
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```
/// use pixdoc_validator::validator;
/// use pixdoc_validator::foundation::{Validate, ValidationError};
///
/// validator! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub AreaCode { code: &'static str } for str;
///     rule(self, input) { input.starts_with(self.code) }
///     error(self, input) { ValidationError::new("area_code", "wrong area code") }
///     fn area_code(code: &'static str);
/// }
///
/// assert!(area_code("11").validate("11988887777").is_ok());
/// assert!(area_code("21").validate("11988887777").is_err());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new, no factory ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// AND-chains validators: `compose!(a, b, c)` is `a.and(b).and(c)`.
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// OR-chains validators: `any_of!(a, b, c)` is `a.or(b).or(c)`.
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidateExt, ValidationError};
    use crate::validators::{br_phone, cnpj, cpf, digit_count};

    validator! {
        TestNoLetters for str;
        rule(input) { !input.chars().any(char::is_alphabetic) }
        error(input) { ValidationError::new("no_letters", "must not contain letters") }
        fn test_no_letters();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNoLetters;
        assert!(v.validate("(11) 3333-4444").is_ok());
        assert!(v.validate("11 ramal 2").is_err());
    }

    #[test]
    fn test_unit_factory() {
        assert!(test_no_letters().validate("123").is_ok());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq)]
        TestPrefix { prefix: char } for str;
        rule(self, input) { input.starts_with(self.prefix) }
        error(self, input) {
            ValidationError::new("prefix", format!("must start with {}", self.prefix))
        }
        fn test_prefix(prefix: char);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestPrefix { prefix: '+' };
        assert!(v.validate("+5511988887777").is_ok());
        assert!(v.validate("11988887777").is_err());
        assert_eq!(TestPrefix::new('+'), test_prefix('+'));
    }

    #[test]
    fn test_compose_macro() {
        let mobile = compose!(br_phone(), digit_count(11, 11), test_no_letters());
        assert!(mobile.validate("11988887777").is_ok());
        assert!(mobile.validate("1133334444").is_err());
    }

    #[test]
    fn test_any_of_macro() {
        let document = any_of!(cpf(), cnpj());
        assert!(document.validate("12345678909").is_ok());
        assert!(document.validate("11222333000181").is_ok());
        assert!(document.validate("1133334444").is_err());
    }
}
