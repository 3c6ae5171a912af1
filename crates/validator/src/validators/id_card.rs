//! Resident ID card number validator (China mainland).
//!
//! Two shapes are accepted, tried in order:
//!
//! - **Legacy, 15 digits**: region(6) + `YYMMDD` + sequence(3)
//! - **Current, 18 chars**: region(6) + `YYYYMMDD` + sequence(3) + check char
//!   (`0-9`, `X` or `x`)
//!
//! Month and day are range-checked by the pattern only. There is no calendar
//! arithmetic and the check character is not verified against the ISO 7064
//! checksum, so `19810231` passes.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static LEGACY_15: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[1-9][0-9]{5}[0-9]{2}(?:0[1-9]|10|11|12)(?:[0-2][1-9]|10|20|30|31)[0-9]{3}$")
        .expect("legacy ID pattern is valid")
});

static CURRENT_18: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[1-9][0-9]{5}(?:18|19|20|21)[0-9]{2}(?:0[1-9]|10|11|12)(?:[0-2][1-9]|10|20|30|31)[0-9]{3}[0-9Xx]$",
    )
    .expect("current ID pattern is valid")
});

// ============================================================================
// ID CARD FORM
// ============================================================================

/// Which ID card shape an input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdCardForm {
    /// 15-digit form with a two-digit year.
    Legacy15,
    /// 18-character form with a four-digit year and a check character.
    Current18,
}

impl IdCardForm {
    /// Detects the form of `input`, trying the legacy shape first.
    ///
    /// ```
    /// use identity_validator::validators::IdCardForm;
    ///
    /// assert_eq!(IdCardForm::detect("310104600101001"), Some(IdCardForm::Legacy15));
    /// assert_eq!(IdCardForm::detect("31010419810101400X"), Some(IdCardForm::Current18));
    /// assert_eq!(IdCardForm::detect("3101041981010140"), None);
    /// ```
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        if LEGACY_15.is_match(input) {
            Some(Self::Legacy15)
        } else if CURRENT_18.is_match(input) {
            Some(Self::Current18)
        } else {
            None
        }
    }

    /// Total length of this form in ASCII characters.
    #[must_use]
    pub const fn char_count(self) -> usize {
        match self {
            Self::Legacy15 => 15,
            Self::Current18 => 18,
        }
    }
}

// ============================================================================
// ID CARD VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a resident ID card number in either the 15- or 18-character form.
    ///
    /// # Examples
    ///
    /// ```
    /// use identity_validator::validators::id_card_no;
    /// use identity_validator::foundation::Validate;
    ///
    /// assert!(id_card_no().validate("31010419810101400X").is_ok());
    /// assert!(id_card_no().validate("310104199001013001").is_ok());
    /// assert!(id_card_no().validate("310104600101001").is_ok());
    /// assert!(id_card_no().validate("31010419810101400Y").is_err());
    /// ```
    pub IdCardNo for str;
    rule(input) { IdCardForm::detect(input).is_some() }
    error(input) {
        ValidationError::invalid_format("id_card_no")
            .with_param("actual_len", input.len().to_string())
    }
    fn id_card_no();
}

/// Returns `true` if `input` is a valid ID card number.
#[must_use]
pub fn is_id_card_no(input: &str) -> bool {
    IdCardNo.is_valid(input)
}
