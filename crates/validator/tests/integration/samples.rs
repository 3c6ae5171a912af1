//! Sample inputs run against default and customized rules.

use identity_validator::prelude::*;
use pretty_assertions::assert_eq;

const USERNAMES: [&str; 11] = [
    "aaaa",
    "世界",
    "13800138000",
    "a__zzzz",
    "mio--cat",
    "Beyond喜欢你",
    "色褪せぬ蒼青の欠片",
    "#small!!!!!",
    "Michael.Learns.To.Rock",
    " Space Space ",
    "admin@mydomain.com",
];

const PASSWORDS: [&str; 7] = [
    "aaa123",
    "Password1",
    "aaaabbbb",
    "#ABCD1234",
    "@5431efgh",
    "Copy&Paste中文密码123",
    "Copy&Paste日本のパスワード123",
];

fn verdicts(validator: &Username) -> Vec<(&'static str, bool)> {
    USERNAMES.iter().map(|&u| (u, validator.is_valid(u))).collect()
}

fn reasons(validator: &Password) -> Vec<(&'static str, Result<(), PasswordError>)> {
    PASSWORDS.iter().map(|&p| (p, validator.check(p))).collect()
}

#[test]
fn usernames_with_default_rules() {
    assert_eq!(
        verdicts(&Username::default()),
        vec![
            ("aaaa", false),
            ("世界", false),
            ("13800138000", true),
            ("a__zzzz", true),
            ("mio--cat", true),
            ("Beyond喜欢你", true),
            ("色褪せぬ蒼青の欠片", true),
            ("#small!!!!!", false),
            ("Michael.Learns.To.Rock", true),
            (" Space Space ", false),
            ("admin@mydomain.com", false),
        ]
    );
}

#[test]
fn usernames_with_customized_rules() {
    let validator = Username::new(
        UsernameConfig::default()
            .min_length(8)
            .allow_dot(false)
            .allow_hyphen(false)
            .allow_underscore(false),
    )
    .unwrap();

    assert_eq!(
        verdicts(&validator),
        vec![
            ("aaaa", false),
            ("世界", false),
            ("13800138000", true),
            ("a__zzzz", false),
            ("mio--cat", false),
            ("Beyond喜欢你", true),
            ("色褪せぬ蒼青の欠片", true),
            ("#small!!!!!", false),
            ("Michael.Learns.To.Rock", false),
            (" Space Space ", false),
            ("admin@mydomain.com", false),
        ]
    );
}

#[test]
fn usernames_with_display_width() {
    let validator =
        Username::new(UsernameConfig::default().length_mode(LengthMode::DisplayWidth)).unwrap();
    // "世界" is 4 wide, still below 6; "Beyond喜欢你" grows to 12.
    assert!(!validator.is_valid("世界"));
    assert!(validator.is_valid("Beyond喜欢你"));
    assert!(validator.is_valid("世界你好"));
}

#[test]
fn passwords_with_default_rules() {
    assert_eq!(
        reasons(&Password::default()),
        vec![
            ("aaa123", Err(PasswordError::InvalidLength)),
            ("Password1", Ok(())),
            ("aaaabbbb", Ok(())),
            ("#ABCD1234", Ok(())),
            ("@5431efgh", Ok(())),
            ("Copy&Paste中文密码123", Ok(())),
            ("Copy&Paste日本のパスワード123", Ok(())),
        ]
    );
}

#[test]
fn passwords_with_all_classes_required() {
    assert_eq!(
        reasons(&Password::new(PasswordConfig::strict()).unwrap()),
        vec![
            ("aaa123", Err(PasswordError::InvalidLength)),
            ("Password1", Err(PasswordError::MissingSpecial)),
            ("aaaabbbb", Err(PasswordError::MissingDigit)),
            ("#ABCD1234", Err(PasswordError::MissingLower)),
            ("@5431efgh", Err(PasswordError::MissingUpper)),
            ("Copy&Paste中文密码123", Ok(())),
            ("Copy&Paste日本のパスワード123", Ok(())),
        ]
    );
}

#[test]
fn passwords_with_customized_rules() {
    let validator = Password::new(
        PasswordConfig::strict()
            .min_length(6)
            .require_upper(false)
            .require_special(false),
    )
    .unwrap();

    assert_eq!(
        reasons(&validator),
        vec![
            ("aaa123", Ok(())),
            ("Password1", Ok(())),
            ("aaaabbbb", Err(PasswordError::MissingDigit)),
            ("#ABCD1234", Err(PasswordError::MissingLower)),
            ("@5431efgh", Ok(())),
            ("Copy&Paste中文密码123", Ok(())),
            ("Copy&Paste日本のパスワード123", Ok(())),
        ]
    );
}

#[test]
fn phone_numbers() {
    let verdicts: Vec<_> = ["aaabc89232", "10000", "13800138000"]
        .into_iter()
        .map(is_mobile_phone)
        .collect();
    assert_eq!(verdicts, [false, false, true]);
}

#[test]
fn id_card_numbers() {
    let forms: Vec<_> = ["31010419810101400X", "310104199001013001", "310104600101001"]
        .into_iter()
        .map(IdCardForm::detect)
        .collect();
    assert_eq!(
        forms,
        [
            Some(IdCardForm::Current18),
            Some(IdCardForm::Current18),
            Some(IdCardForm::Legacy15),
        ]
    );
}
