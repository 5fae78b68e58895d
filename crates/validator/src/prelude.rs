//! Prelude module for convenient imports.
//!
//! Provides a single `use pixdoc_validator::prelude::*;` import that brings
//! in the traits, error types, validators, combinators and form types.
//!
//! # Examples
//!
//! ```
//! use pixdoc_validator::prelude::*;
//!
//! let whatsapp = not_blank().and(br_phone());
//! assert!(whatsapp.validate("(11) 3333-4444").is_ok());
//! assert!(mask_input(DocumentKind::Cnpj, "", "112223330001").starts_with("11"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Optional, Or, and, not, optional, or};

// ============================================================================
// DOCUMENTS AND FORMS
// ============================================================================

pub use crate::document::{DocumentKind, mask_input, normalize};
pub use crate::form::{
    ChargeForm, ClientForm, NormalizedCharge, NormalizedClient, NormalizedProfile, ProfileForm,
};
