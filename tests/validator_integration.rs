//! Integration tests composing validators across modules

use tidemark::validator::{
    array, custom, keep_first, many, not, number, string, Validated, Validator,
};
use tidemark::{assert_failure, assert_success, assert_validation_errors};

#[derive(Debug, Clone, PartialEq)]
struct Signup {
    username: String,
    password: String,
    age: u32,
    tags: Vec<String>,
}

fn username() -> Validator<String> {
    many(vec![
        string::min("username too short", 3),
        string::max("username too long", 12),
        string::only_lowercase("username must be lowercase"),
        not("username is reserved", custom(|s: &String| s == "admin", "")),
    ])
}

fn password() -> Validator<String> {
    many(vec![
        string::has_lowercase("no lowercase letters", 1).expect("valid pattern"),
        string::has_uppercase("no uppercase letters", 1).expect("valid pattern"),
        string::has_digit("no numbers", 2).expect("valid pattern"),
        string::min("less than 8 chars", 8),
    ])
}

fn tags() -> Validator<Vec<String>> {
    array::every(string::max("tag too long", 10))
}

fn validate_signup(signup: Signup) -> Validated<Signup> {
    let age = number::min("must be 13 or older", 13).validate(signup.age);
    let checked = keep_first(
        username().validate(signup.username.clone()),
        password().validate(signup.password.clone()),
    );
    let checked = keep_first(checked, age);
    let checked = keep_first(checked, tags().validate(signup.tags.clone()));
    checked.map(|_| signup)
}

fn signup(username: &str, password: &str, age: u32, tags: &[&str]) -> Signup {
    Signup {
        username: username.to_string(),
        password: password.to_string(),
        age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn valid_signup_passes_through() {
    let form = signup("grace", "Hopper1906", 30, &["navy", "cobol"]);
    assert_eq!(validate_signup(form.clone()), Ok(form));
}

#[test]
fn every_failure_is_reported_in_field_order() {
    let form = signup("Admin", "short", 9, &["averyverylongtag"]);
    assert_validation_errors!(
        validate_signup(form),
        vec![
            "username must be lowercase",
            "no uppercase letters",
            "no numbers",
            "less than 8 chars",
            "must be 13 or older",
            "tag too long",
        ]
    );
}

#[test]
fn reserved_name_is_rejected() {
    assert_validation_errors!(username().validate("admin".to_string()), vec!["username is reserved"]);
    assert_success!(username().validate("ada".to_string()));
}

#[test]
fn duplicate_messages_are_kept() {
    let twice = many(vec![string::min("too short", 4), string::min("too short", 4)]);
    assert_validation_errors!(twice.validate("abc".to_string()), vec!["too short", "too short"]);
}

#[test]
fn separated_rejoins_segments() {
    let octet = || {
        many(vec![
            string::only_digits("not a number"),
            string::max("octet too long", 3),
        ])
    };
    let ipv4 = string::separated("expected four octets", ".", (0..4).map(|_| octet()).collect());

    assert_eq!(ipv4.validate("10.0.0.1".to_string()), Ok("10.0.0.1".to_string()));
    assert_validation_errors!(ipv4.validate("10.0.1".to_string()), vec!["expected four octets"]);
    assert_validation_errors!(
        ipv4.validate("10.0.x.1000".to_string()),
        vec!["not a number", "octet too long"]
    );
}

#[test]
fn validators_are_shareable_across_threads() {
    let shared = password();
    let handles: Vec<_> = ["abCD12xyz", "nope"]
        .into_iter()
        .map(|candidate| {
            let validator = shared.clone();
            std::thread::spawn(move || validator.validate(candidate.to_string()))
        })
        .collect();
    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("validator thread panicked"))
        .collect();
    assert_success!(outcomes[0].clone());
    assert_failure!(outcomes[1].clone());
}

#[cfg(feature = "json")]
mod json_payloads {
    use serde_json::json;
    use tidemark::validator::json::{self, Presence, Schema};
    use tidemark::validator::{array, number, string, Validator};

    fn text(validator: Validator<String>) -> Validator<serde_json::Value, String> {
        json::is_string("not a string").and_then(validator)
    }

    #[test]
    fn schema_with_typed_fields() {
        let order = Schema::new("invalid order")
            .field("email", text(string::is_email("invalid email")))
            .field(
                "quantity",
                json::is_number("not a number").and_then(number::max("too many", 10.0)),
            )
            .field(
                "lines",
                tidemark::validator::custom_guarded(
                    |v: serde_json::Value| v.as_array().cloned(),
                    "not an array",
                )
                .and_then(array::length("exactly two lines", 2)),
            )
            .into_validator();

        assert!(order
            .validate(json!({"email": "a@b.io", "quantity": 2, "lines": [1, 2]}))
            .is_ok());
        assert_eq!(
            order.validate(json!({"email": "a@b", "quantity": 20, "lines": [1]})),
            Err(vec![
                "invalid email".to_string(),
                "too many".to_string(),
                "exactly two lines".to_string(),
            ])
        );
    }

    #[test]
    fn explicit_presence_admits_zero_quantity() {
        let truthy = Schema::new("missing").field("quantity", json::is_number("not a number"));
        let explicit = truthy.clone().presence(Presence::Explicit);
        let payload = json!({"quantity": 0});

        assert_eq!(truthy.validate(payload.clone()), Err(vec!["missing".to_string()]));
        assert_eq!(explicit.validate(payload.clone()), Ok(payload));
    }
}
