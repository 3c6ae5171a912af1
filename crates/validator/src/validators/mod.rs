//! Built-in validators
//!
//! # Categories
//!
//! - **Fixed pattern**: mobile phone number, ID card number
//! - **Configurable**: username, password
//! - **Length**: length measurement modes and inclusive ranges
//!
//! # Examples
//!
//! ```
//! use identity_validator::validators::*;
//!
//! assert!(is_mobile_phone("13800138000"));
//! assert!(is_id_card_no("31010419810101400X"));
//! assert!(is_username("mio-cat"));
//! assert_eq!(check_password("Password1"), Ok(()));
//! ```

pub mod id_card;
pub mod length;
pub mod password;
pub mod phone;
pub mod username;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use id_card::{IdCardForm, IdCardNo, id_card_no, is_id_card_no};
pub use length::{LengthMode, LengthRange, length_range};
pub use password::{CharClasses, Password, PasswordConfig, PasswordError, check_password};
pub use phone::{MOBILE_PHONE_DIGITS, MobilePhone, is_mobile_phone, mobile_phone};
pub use username::{Username, UsernameConfig, is_username};
