//! Validators for `String` values
//!
//! Lengths are counted in `char`s, not bytes. Pattern validators match
//! anywhere in the value unless the pattern itself is anchored.

use std::sync::LazyLock;

use regex::Regex;

use super::{array, custom, Validator};
use crate::error::{Error, Result};

static ONLY_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]*$").expect("Invalid lowercase pattern"));

static ONLY_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]*$").expect("Invalid uppercase pattern"));

static ONLY_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("Invalid digits pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("Invalid email pattern")
});

fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// At least `min_chars` characters long.
pub fn min(message: impl Into<String>, min_chars: usize) -> Validator<String> {
    custom(move |value: &String| char_count(value) >= min_chars, message)
}

/// At most `max_chars` characters long.
pub fn max(message: impl Into<String>, max_chars: usize) -> Validator<String> {
    custom(move |value: &String| char_count(value) <= max_chars, message)
}

/// Exactly `chars` characters long.
pub fn length(message: impl Into<String>, chars: usize) -> Validator<String> {
    custom(move |value: &String| char_count(value) == chars, message)
}

/// Matches a compiled regular expression.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use tidemark::validator::string;
///
/// let has_lower = string::regex("no lowercase letters", Regex::new("[a-z]").unwrap());
/// assert!(has_lower.validate("abcABC123".into()).is_ok());
/// assert_eq!(
///     has_lower.validate("ABC123".into()),
///     Err(vec!["no lowercase letters".to_string()])
/// );
/// ```
pub fn regex(message: impl Into<String>, pattern: Regex) -> Validator<String> {
    custom(move |value: &String| pattern.is_match(value), message)
}

/// Matches a regular expression given as source text.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if `source` does not compile.
pub fn pattern(message: impl Into<String>, source: &str) -> Result<Validator<String>> {
    let compiled = Regex::new(source).map_err(|source_err| Error::InvalidPattern {
        pattern: source.to_string(),
        source: source_err,
    })?;
    Ok(regex(message, compiled))
}

fn at_least(message: impl Into<String>, class: &str, count: usize) -> Result<Validator<String>> {
    pattern(message, &format!("({class}.*){{{count}}}"))
}

/// Contains at least `count` lowercase ASCII letters.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if `count` is too large for the regex
/// engine's size limit.
pub fn has_lowercase(message: impl Into<String>, count: usize) -> Result<Validator<String>> {
    at_least(message, "[a-z]", count)
}

/// Contains at least `count` uppercase ASCII letters.
///
/// # Errors
///
/// See [`has_lowercase`].
pub fn has_uppercase(message: impl Into<String>, count: usize) -> Result<Validator<String>> {
    at_least(message, "[A-Z]", count)
}

/// Contains at least `count` ASCII digits.
///
/// # Errors
///
/// See [`has_lowercase`].
pub fn has_digit(message: impl Into<String>, count: usize) -> Result<Validator<String>> {
    at_least(message, "[0-9]", count)
}

/// Only lowercase ASCII letters. The empty string passes.
pub fn only_lowercase(message: impl Into<String>) -> Validator<String> {
    regex(message, ONLY_LOWERCASE.clone())
}

/// Only uppercase ASCII letters. The empty string passes.
pub fn only_uppercase(message: impl Into<String>) -> Validator<String> {
    regex(message, ONLY_UPPERCASE.clone())
}

/// Only ASCII digits. The empty string passes.
pub fn only_digits(message: impl Into<String>) -> Validator<String> {
    regex(message, ONLY_DIGITS.clone())
}

/// Looks like an e-mail address.
pub fn is_email(message: impl Into<String>) -> Validator<String> {
    regex(message, EMAIL.clone())
}

/// Split on `separator` and check the segments positionally.
///
/// The segment count must equal `validators.len()`, otherwise `message` is
/// reported. Segment failures accumulate after it. On success the segments
/// are joined back with `separator`.
///
/// An empty `separator` splits into single characters; the empty string then
/// has no segments at all.
///
/// # Examples
///
/// ```
/// use tidemark::validator::{many, string};
///
/// let block = || many(vec![
///     string::only_digits("not a number"),
///     string::length("invalid amount of digits", 3),
/// ]);
/// let phone = string::separated("invalid amount of number blocks", "-", vec![block(), block()]);
///
/// assert_eq!(phone.validate("123-123".into()), Ok("123-123".to_string()));
/// assert_eq!(phone.validate("123-a23".into()), Err(vec!["not a number".to_string()]));
/// ```
pub fn separated(
    message: impl Into<String>,
    separator: impl Into<String>,
    validators: Vec<Validator<String>>,
) -> Validator<String> {
    let separator = separator.into();
    let segments = array::each(message, validators);
    Validator::new(move |value: String| {
        let blocks: Vec<String> = if separator.is_empty() {
            value.chars().map(String::from).collect()
        } else {
            value.split(separator.as_str()).map(str::to_string).collect()
        };
        segments
            .validate(blocks)
            .map(|blocks| blocks.join(separator.as_str()))
    })
}
