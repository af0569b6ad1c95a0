//! Signup Form Example
//!
//! Validates a JSON signup payload with a schema, reporting every problem at
//! once instead of stopping at the first.
//!
//! Run with: cargo run --example signup_form

use serde_json::{json, Value};
use tidemark::validator::json::{self, Schema};
use tidemark::validator::{many, number, string, Validator};

// ============================================================================
// Field validators
// ============================================================================

fn text(validator: Validator<String>) -> Validator<Value, String> {
    json::is_string("must be a string").and_then(validator)
}

fn password() -> Result<Validator<String>, tidemark::Error> {
    Ok(many(vec![
        string::has_lowercase("password needs a lowercase letter", 1)?,
        string::has_uppercase("password needs an uppercase letter", 1)?,
        string::has_digit("password needs two digits", 2)?,
        string::min("password needs at least 8 characters", 8),
    ]))
}

fn phone() -> Validator<String> {
    let block = |digits| {
        many(vec![
            string::only_digits("phone blocks are digits only"),
            string::length("phone block has the wrong length", digits),
        ])
    };
    string::separated(
        "phone is three blocks separated by '-'",
        "-",
        vec![block(3), block(3), block(4)],
    )
}

fn signup() -> Result<Validator<Value>, tidemark::Error> {
    Ok(Schema::new("missing required field")
        .field("email", text(string::is_email("email is invalid")))
        .field("password", text(password()?))
        .field("phone", text(phone()))
        .field(
            "age",
            json::is_number("age must be a number").and_then(number::min("must be 13 or older", 13.0)),
        )
        .into_validator())
}

// ============================================================================
// Main
// ============================================================================

fn report(label: &str, validator: &Validator<Value>, payload: Value) {
    match validator.validate(payload) {
        Ok(_) => println!("{label}: accepted"),
        Err(errors) => {
            println!("{label}: rejected");
            for error in errors {
                println!("  - {error}");
            }
        }
    }
}

fn main() -> Result<(), tidemark::Error> {
    let validator = signup()?;

    report(
        "complete",
        &validator,
        json!({
            "email": "grace@navy.mil",
            "password": "Cobol1959",
            "phone": "555-010-1906",
            "age": 37
        }),
    );

    report(
        "sloppy",
        &validator,
        json!({
            "email": "grace@navy",
            "password": "cobol",
            "phone": "555-01a-1906",
            "age": 12
        }),
    );

    report(
        "incomplete",
        &validator,
        json!({ "email": "grace@navy.mil", "password": "Cobol1959" }),
    );

    Ok(())
}
