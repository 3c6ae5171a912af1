//! Verifies that `use identity_validator::prelude::*` brings in everything
//! a consumer needs.

use identity_validator::prelude::*;

#[test]
fn prelude_import_provides_validate_trait() {
    assert!(mobile_phone().validate("13800138000").is_ok());
    assert!(id_card_no().validate("310104600101001").is_ok());
    assert!(Username::default().validate("mio-cat").is_ok());
    assert!(Password::default().validate("Password1").is_ok());
}

#[test]
fn validators_usable_as_trait_objects() {
    let username = Username::default();
    let password = Password::default();
    let checks: [(&str, &dyn Validate<Input = str>); 4] = [
        ("13800138000", &MobilePhone),
        ("31010419810101400X", &IdCardNo),
        ("a_zzzz", &username),
        ("aaaabbbb", &password),
    ];

    for (input, validator) in checks {
        assert!(validator.is_valid(input), "{input}");
    }
}

#[test]
fn validators_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Username>();
    assert_send_sync::<Password>();
    assert_send_sync::<Validators>();
}

#[test]
fn shared_validator_across_threads() {
    let validator = std::sync::Arc::new(Username::default());
    let handles: Vec<_> = ["mio-cat", "a_zzzz", "#small!!!!!", "世界"]
        .into_iter()
        .map(|name| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || validator.is_valid(name))
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("validation thread panicked"))
        .collect();
    assert_eq!(results, [true, true, false, false]);
}
