//! # identity-validator
//!
//! Pure, stateless validators for identity-style strings: resident ID card
//! numbers, mobile phone numbers, usernames and passwords.
//!
//! ## Quick Start
//!
//! ```
//! use identity_validator::prelude::*;
//!
//! assert!(is_id_card_no("31010419810101400X"));
//! assert!(is_mobile_phone("13800138000"));
//! assert!(is_username("mio-cat"));
//!
//! let password = Password::new(PasswordConfig::strict().min_length(9)).unwrap();
//! assert_eq!(password.check("Password12"), Err(PasswordError::MissingSpecial));
//! ```
//!
//! ## Configuration
//!
//! Username and password rules are plain structs with documented defaults
//! ([`UsernameConfig`](validators::UsernameConfig),
//! [`PasswordConfig`](validators::PasswordConfig)). A validator copies its
//! rules when it is built and rejects bounds where `min_length > max_length`.
//! [`ValidationPolicy`](config::ValidationPolicy) loads both from JSON.
//!
//! ## Built-in Validators
//!
//! - **Fixed pattern**: [`MobilePhone`](validators::MobilePhone),
//!   [`IdCardNo`](validators::IdCardNo)
//! - **Configurable**: [`Username`](validators::Username),
//!   [`Password`](validators::Password)
//! - **Length**: [`LengthRange`](validators::LengthRange) with
//!   [`LengthMode`](validators::LengthMode)

// ValidationError is returned by value from every validator.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
