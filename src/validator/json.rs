//! Validators for dynamic `serde_json::Value` input (feature `json`)
//!
//! [`is_string`] and [`is_number`] narrow a `Value` to a concrete type so the
//! typed validators in [`string`](super::string) and [`number`](super::number)
//! can follow with [`Validator::and_then`]. [`Schema`] checks object shapes.

use serde_json::Value;

use super::{custom_guarded, keep_first, Validated, Validator};

/// Narrow to the contents of a JSON string.
pub fn is_string(message: impl Into<String>) -> Validator<Value, String> {
    custom_guarded(
        |value: Value| match value {
            Value::String(s) => Some(s),
            _ => None,
        },
        message,
    )
}

/// Narrow to a JSON number, as `f64`.
pub fn is_number(message: impl Into<String>) -> Validator<Value, f64> {
    custom_guarded(|value: Value| value.as_f64(), message)
}

/// How a [`Schema`] decides whether a field is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Absent when missing or falsy: `null`, `false`, `0`, `""`.
    ///
    /// Arrays and objects are present even when empty.
    #[default]
    Truthy,
    /// Absent only when the key is missing.
    Explicit,
}

impl Presence {
    fn admits(self, field: &Value) -> bool {
        match self {
            Presence::Explicit => true,
            Presence::Truthy => match field {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }
}

/// Field-by-field validator for JSON objects.
///
/// Fields are checked in the order they were added. A present field is
/// validated and its messages accumulate. An absent field replaces everything
/// gathered so far with the schema's own message; fields after it are still
/// checked and their messages follow. Input that is not an object has every
/// field absent.
///
/// On success the input object is returned unchanged; field validators may
/// narrow their field but the result is not written back.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tidemark::validator::{json::{self, Schema}, string};
///
/// let user = Schema::new("invalid object")
///     .field("name", json::is_string("not a string").and_then(string::max("too long", 4)))
///     .field("code", json::is_string("not a string").and_then(string::only_digits("not a number")))
///     .into_validator();
///
/// assert!(user.validate(json!({"name": "ada", "code": "42"})).is_ok());
/// assert_eq!(
///     user.validate(json!({"name": "grace", "code": "4a"})),
///     Err(vec!["too long".to_string(), "not a number".to_string()])
/// );
/// assert_eq!(
///     user.validate(json!({"name": "grace"})),
///     Err(vec!["invalid object".to_string()])
/// );
/// ```
#[derive(Clone)]
pub struct Schema {
    message: String,
    presence: Presence,
    fields: Vec<(String, Validator<Value, ()>)>,
}

impl Schema {
    /// Start an empty schema that reports `message` when a field is absent.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            presence: Presence::default(),
            fields: Vec::new(),
        }
    }

    /// Use `presence` to decide which fields count as absent.
    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    /// Add a field checked by `validator`.
    pub fn field<B: 'static>(mut self, name: impl Into<String>, validator: Validator<Value, B>) -> Self {
        self.fields.push((name.into(), validator.map(|_| ())));
        self
    }

    /// Check `value` against every field.
    pub fn validate(&self, value: Value) -> Validated<Value> {
        let mut validated: Validated<()> = Ok(());
        for (name, validator) in &self.fields {
            match value.get(name.as_str()) {
                Some(field) if self.presence.admits(field) => {
                    validated = keep_first(validated, validator.validate(field.clone()));
                }
                _ => validated = Err(vec![self.message.clone()]),
            }
        }
        validated.map(|()| value)
    }

    /// Freeze into a [`Validator`], e.g. to nest it in another schema.
    pub fn into_validator(self) -> Validator<Value> {
        Validator::new(move |value| self.validate(value))
    }
}

impl From<Schema> for Validator<Value> {
    fn from(schema: Schema) -> Self {
        schema.into_validator()
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("message", &self.message)
            .field("presence", &self.presence)
            .field("fields", &self.fields.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

/// Shorthand for [`Schema::new`].
pub fn schema(message: impl Into<String>) -> Schema {
    Schema::new(message)
}
