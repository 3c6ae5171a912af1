//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are generic over their input type and return
/// `Result<(), ValidationError>` for a consistent API. Every validator in
/// this crate is a pure function of its configuration and the input, so a
/// shared reference can be used from any number of threads.
///
/// # Examples
///
/// ```
/// use identity_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.is_valid("mio-cat"));
/// assert!(!NoSpaces.is_valid("mio cat"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first failed rule otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes validation.
    ///
    /// Shorthand for callers that only need the verdict.
    #[inline]
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
