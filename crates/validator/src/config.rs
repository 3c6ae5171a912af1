//! Loadable validation policy.
//!
//! A [`ValidationPolicy`] bundles the username and password rules so an
//! application can keep them in a configuration document instead of code.
//! Omitted options fall back to their defaults; unknown options are
//! rejected.
//!
//! ```
//! use identity_validator::config::ValidationPolicy;
//! use identity_validator::validators::PasswordError;
//!
//! let validators = ValidationPolicy::from_json(
//!     r#"{
//!         "username": { "min_length": 4, "allow_dot": false },
//!         "password": { "min_length": 9, "require_digit": true }
//!     }"#,
//! )?
//! .build()?;
//!
//! assert!(validators.username.is_valid("mio-cat"));
//! assert_eq!(validators.password.check("password"), Err(PasswordError::InvalidLength));
//! # Ok::<(), identity_validator::foundation::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Validate, ValidationError};
use crate::validators::{IdCardNo, MobilePhone, Password, PasswordConfig, Username, UsernameConfig};

// ============================================================================
// POLICY
// ============================================================================

/// Username and password rules as one serializable document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Username rules.
    pub username: UsernameConfig,
    /// Password rules.
    pub password: PasswordConfig,
}

impl ValidationPolicy {
    /// Parses a policy from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let policy = serde_json::from_str(json)?;
        tracing::debug!(?policy, "loaded validation policy");
        Ok(policy)
    }

    /// Serializes the policy to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the validators, rejecting impossible rule sets.
    pub fn build(&self) -> Result<Validators, ConfigError> {
        Ok(Validators {
            username: Username::new(self.username)?,
            password: Password::new(self.password)?,
            mobile_phone: MobilePhone,
            id_card_no: IdCardNo,
        })
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Ready-to-use validators built from a [`ValidationPolicy`].
///
/// Immutable and `Send + Sync`; build once and share.
#[derive(Debug, Clone)]
pub struct Validators {
    /// Username validator.
    pub username: Username,
    /// Password validator.
    pub password: Password,
    /// Mobile phone validator.
    pub mobile_phone: MobilePhone,
    /// ID card validator.
    pub id_card_no: IdCardNo,
}

/// A sign-up style form, checked field by field.
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    /// Requested username.
    pub username: &'a str,
    /// Chosen password.
    pub password: &'a str,
    /// Mobile phone number.
    pub mobile_phone: &'a str,
    /// Resident ID card number, if collected.
    pub id_card_no: Option<&'a str>,
}

impl Validators {
    /// Validates every field of a registration, returning the first failure
    /// per field tagged with the field name.
    pub fn check_registration(&self, form: &Registration<'_>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.username.validate(form.username) {
            errors.push(e);
        }
        if let Err(e) = self.password.validate(form.password) {
            errors.push(e);
        }
        if let Err(e) = self.mobile_phone.validate(form.mobile_phone) {
            errors.push(e.with_field("mobile_phone"));
        }
        if let Some(id) = form.id_card_no
            && let Err(e) = self.id_card_no.validate(id)
        {
            errors.push(e.with_field("id_card_no"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(failed = errors.len(), "registration rejected");
            Err(errors)
        }
    }
}

impl Default for Validators {
    fn default() -> Self {
        Self {
            username: Username::default(),
            password: Password::default(),
            mobile_phone: MobilePhone,
            id_card_no: IdCardNo,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::LengthMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let policy = ValidationPolicy::from_json("{}").unwrap();
        assert_eq!(policy, ValidationPolicy::default());
    }

    #[test]
    fn test_partial_document() {
        let policy = ValidationPolicy::from_json(
            r#"{ "username": { "length_mode": "display_width" }, "password": { "require_special": true } }"#,
        )
        .unwrap();
        assert_eq!(policy.username.length_mode, LengthMode::DisplayWidth);
        assert_eq!(policy.username.min_length, 6);
        assert!(policy.password.require_special);
        assert!(!policy.password.require_digit);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = ValidationPolicy::from_json(r#"{ "password": { "one_num": true } }"#).unwrap_err();
        assert_eq!(err.code(), "CONFIG_PARSE");
    }

    #[test]
    fn test_inverted_bounds_rejected_on_build() {
        let policy = ValidationPolicy::from_json(r#"{ "password": { "min_length": 10, "max_length": 4 } }"#)
            .unwrap();
        let err = policy.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedLength { field: "password", min: 10, max: 4 }
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_policy() {
        let policy = ValidationPolicy {
            username: UsernameConfig::default().allow_dot(false),
            password: PasswordConfig::strict(),
        };
        let parsed = ValidationPolicy::from_json(&policy.to_json().unwrap()).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test]
    fn test_check_registration() {
        let validators = ValidationPolicy {
            password: PasswordConfig::strict(),
            ..Default::default()
        }
        .build()
        .unwrap();

        let ok = Registration {
            username: "mio-cat",
            password: "Password2@",
            mobile_phone: "13800138000",
            id_card_no: Some("31010419810101400X"),
        };
        assert!(validators.check_registration(&ok).is_ok());

        let bad = Registration {
            username: "mio cat",
            password: "Password12",
            mobile_phone: "10000",
            id_card_no: Some("31010419810101400Y"),
        };
        let errors = validators.check_registration(&bad).unwrap_err();
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, ["username", "password", "mobile_phone", "id_card_no"]);
        assert_eq!(errors[1].code, "missing_special");
    }

    #[test]
    fn test_id_card_optional() {
        let form = Registration {
            username: "mio-cat",
            password: "password",
            mobile_phone: "13800138000",
            id_card_no: None,
        };
        assert!(Validators::default().check_registration(&form).is_ok());
    }
}
