//! Policy documents driving the validators end to end.

use identity_validator::prelude::*;
use pretty_assertions::assert_eq;

const SIGNUP_POLICY: &str = r#"{
    "username": {
        "min_length": 8,
        "allow_dot": false,
        "allow_hyphen": false,
        "allow_underscore": false
    },
    "password": {
        "min_length": 6,
        "require_digit": true,
        "require_lower": true
    }
}"#;

#[test]
fn policy_document_drives_validators() {
    let validators = ValidationPolicy::from_json(SIGNUP_POLICY)
        .and_then(|policy| policy.build())
        .unwrap();

    assert!(validators.username.is_valid("Beyond喜欢你"));
    assert!(!validators.username.is_valid("mio--cat"));
    assert_eq!(validators.password.check("aaa123"), Ok(()));
    assert_eq!(
        validators.password.check("#ABCD1234"),
        Err(PasswordError::MissingLower)
    );
}

#[test]
fn policy_survives_serialization() {
    let policy = ValidationPolicy::from_json(SIGNUP_POLICY).unwrap();
    let reloaded = ValidationPolicy::from_json(&policy.to_json().unwrap()).unwrap();
    assert_eq!(reloaded, policy);
    assert_eq!(reloaded.username.max_length, 64);
    assert!(!reloaded.password.require_special);
}

#[test]
fn malformed_policy_reports_parse_error() {
    let err = ValidationPolicy::from_json(r#"{ "username": { "min_length": "six" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.code(), "CONFIG_PARSE");
}

#[test]
fn inverted_username_bounds_fail_to_build() {
    let err = ValidationPolicy::from_json(r#"{ "username": { "min_length": 20, "max_length": 10 } }"#)
        .unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err.code(), "CONFIG_INVERTED_LENGTH");
    assert_eq!(
        err.to_string(),
        "invalid length bounds for `username`: min 20 > max 10"
    );
}

#[test]
fn registration_errors_carry_params() {
    let validators = ValidationPolicy::default().build().unwrap();
    let form = Registration {
        username: "aaaa",
        password: "aaa123",
        mobile_phone: "13800138000",
        id_card_no: None,
    };

    let errors = validators.check_registration(&form).unwrap_err();
    let summary: Vec<_> = errors
        .iter()
        .map(|e| (e.field.as_deref(), &*e.code, e.param("actual")))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Some("username"), "length_range", Some("4")),
            (Some("password"), "invalid_length", Some("6")),
        ]
    );
}
