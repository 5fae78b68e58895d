//! Validator combinators
//!
//! Combinators build new validators out of existing ones:
//!
//! - [`And`] - both must pass
//! - [`Or`] - at least one must pass
//! - [`Not`] - inverts the verdict
//! - [`Optional`] - blank input passes untouched
//!
//! The same combinators are available as methods through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
