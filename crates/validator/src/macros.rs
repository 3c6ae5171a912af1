//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a fixed-rule validator (unit struct + `Validate` impl + factory fn)
//!
//! # Examples
//!
//! ```
//! use identity_validator::validator;
//! use identity_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     /// Validates that a string has no surrounding whitespace.
//!     pub Trimmed for str;
//!     rule(input) { input.trim() == input }
//!     error(input) { ValidationError::new("trimmed", "must not start or end with whitespace") }
//!     fn trimmed();
//! }
//!
//! assert!(trimmed().validate("mio-cat").is_ok());
//! assert!(trimmed().validate(" Space Space ").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a fixed-rule validator: a zero-sized struct, its `Validate`
/// implementation and, optionally, a `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied. The `rule` block returns `bool`; the `error` block builds the
/// `ValidationError` and only runs on failure.
///
/// **With factory**:
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Without factory**:
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("not_empty", "empty") }
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
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

    // ── Unit validator, no factory ───────────────────────────────────────
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
}
