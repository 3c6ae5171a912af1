//! Prelude module for convenient imports.
//!
//! ```
//! use identity_validator::prelude::*;
//!
//! let password = Password::new(PasswordConfig::strict()).unwrap();
//! assert!(password.validate("Password2@").is_ok());
//! assert!(mobile_phone().validate("13800138000").is_ok());
//! ```

pub use crate::config::{Registration, ValidationPolicy, Validators};
pub use crate::foundation::{ConfigError, Validate, ValidationError, ValidationResult};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
