//! Mobile phone number validator (China mainland).
//!
//! A mobile number is exactly 11 ASCII digits: no country code, no
//! separators, no leading `+`.

use crate::foundation::{Validate, ValidationError};

/// Number of digits in a mainland mobile number.
pub const MOBILE_PHONE_DIGITS: usize = 11;

crate::validator! {
    /// Validates a mobile phone number: exactly 11 ASCII decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use identity_validator::validators::mobile_phone;
    /// use identity_validator::foundation::Validate;
    ///
    /// assert!(mobile_phone().validate("13800138000").is_ok());
    /// assert!(mobile_phone().validate("+8613800138000").is_err());
    /// assert!(mobile_phone().validate("138-0013-8000").is_err());
    /// ```
    pub MobilePhone for str;
    rule(input) {
        input.len() == MOBILE_PHONE_DIGITS && input.bytes().all(|b| b.is_ascii_digit())
    }
    error(input) {
        ValidationError::invalid_format("mobile_phone")
            .with_param("digits", MOBILE_PHONE_DIGITS.to_string())
    }
    fn mobile_phone();
}

/// Returns `true` if `input` is a valid mobile phone number.
#[must_use]
pub fn is_mobile_phone(input: &str) -> bool {
    MobilePhone.is_valid(input)
}
