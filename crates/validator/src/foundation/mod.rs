//! Core validation types and traits
//!
//! This module contains the building blocks every validator uses:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ConfigError`]
//!
//! Validators own an immutable copy of their rules. Nothing in this crate
//! reads process-wide state, so a validator built once can be shared freely.
//!
//! # Examples
//!
//! ```
//! use identity_validator::foundation::Validate;
//! use identity_validator::validators::mobile_phone;
//!
//! assert!(mobile_phone().validate("13800138000").is_ok());
//! assert!(mobile_phone().validate("10000").is_err());
//! ```

mod error;
mod traits;

pub use error::{ConfigError, ErrorParams, ValidationError};
pub(crate) use error::check_length_bounds;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a value with a validator.
///
/// Convenience for one-off validations where naming the trait is noise.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate,
{
    validator.validate(value)
}
