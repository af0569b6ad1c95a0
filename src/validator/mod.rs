//! Composable validators that accumulate error messages
//!
//! A validator is a function from an input to a [`Validated`] value: a `Result`
//! whose error payload is always an ordered list of human-readable messages.
//! Validators are built from predicates with [`custom`] and [`custom_guarded`],
//! and combined with [`compose`], [`many`] and [`not`].
//!
//! Unlike [`result::sequence`](crate::result::sequence), which stops at the first
//! failure, every combinator here *accumulates*: when several checks fail, all
//! of their messages are reported, in evaluation order, without deduplication.
//!
//! # Examples
//!
//! ```
//! use tidemark::validator::{many, string};
//!
//! let password = many(vec![
//!     string::has_lowercase("no lowercase letters", 1).unwrap(),
//!     string::has_uppercase("no uppercase letters", 1).unwrap(),
//!     string::has_digit("no numbers", 1).unwrap(),
//!     string::min("less than 5 chars", 5),
//! ]);
//!
//! assert_eq!(password.validate("abCD1".to_string()), Ok("abCD1".to_string()));
//! assert_eq!(
//!     password.validate("1234".to_string()),
//!     Err(vec![
//!         "no lowercase letters".to_string(),
//!         "no uppercase letters".to_string(),
//!         "less than 5 chars".to_string(),
//!     ])
//! );
//! ```

pub mod array;
#[cfg(feature = "json")]
pub mod json;
pub mod number;
pub mod string;

use std::fmt;
use std::sync::Arc;

/// The outcome of a validator: the (possibly narrowed) value, or every message
/// produced by the failing checks.
pub type Validated<T> = Result<T, Vec<String>>;

/// A reusable check from `A` to [`Validated<B>`].
///
/// Most validators return their input unchanged (`B = A`). Guard validators
/// narrow it (`serde_json::Value` to `String`, say) and a few transform it
/// ([`string::separated`] rejoins the segments it validated).
///
/// Cloning is cheap: the check itself is shared.
///
/// # Examples
///
/// ```
/// use tidemark::validator::Validator;
///
/// let even = Validator::new(|n: i32| {
///     if n % 2 == 0 { Ok(n) } else { Err(vec![format!("{n} is odd")]) }
/// });
/// assert_eq!(even.validate(4), Ok(4));
/// assert_eq!(even.validate(3), Err(vec!["3 is odd".to_string()]));
/// ```
pub struct Validator<A, B = A> {
    check: Arc<dyn Fn(A) -> Validated<B> + Send + Sync>,
}

impl<A, B> Validator<A, B> {
    /// Wrap a validation function.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(A) -> Validated<B> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Run the check.
    #[inline]
    pub fn validate(&self, value: A) -> Validated<B> {
        (self.check)(value)
    }
}

impl<A: 'static, B: 'static> Validator<A, B> {
    /// Feed the output of this validator into `next`.
    ///
    /// `next` only runs when `self` succeeded; this is a pipeline, not an
    /// accumulating combination. Use it to narrow first and check after:
    ///
    /// ```
    /// use tidemark::validator::{custom_guarded, number};
    ///
    /// let parsed = custom_guarded(|s: String| s.parse::<u16>().ok(), "not a port")
    ///     .and_then(number::min("port too low", 1024));
    ///
    /// assert_eq!(parsed.validate("8080".into()), Ok(8080));
    /// assert_eq!(parsed.validate("80".into()), Err(vec!["port too low".to_string()]));
    /// assert_eq!(parsed.validate("http".into()), Err(vec!["not a port".to_string()]));
    /// ```
    pub fn and_then<C: 'static>(self, next: Validator<B, C>) -> Validator<A, C> {
        Validator::new(move |value| self.validate(value).and_then(|narrowed| next.validate(narrowed)))
    }

    /// Transform the success payload.
    pub fn map<C, F>(self, f: F) -> Validator<A, C>
    where
        F: Fn(B) -> C + Send + Sync + 'static,
    {
        Validator::new(move |value| self.validate(value).map(&f))
    }
}

impl<A, B> Clone for Validator<A, B> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<A, B> fmt::Debug for Validator<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

fn errors_of<T>(validated: Validated<T>) -> Vec<String> {
    validated.err().unwrap_or_default()
}

fn merge_errors<T, U, R>(first: Validated<T>, second: Validated<U>) -> Validated<R> {
    let mut errors = errors_of(first);
    errors.extend(errors_of(second));
    Err(errors)
}

/// Merge two validated values, keeping the first payload when both succeed.
///
/// If either fails, the result is `Err` holding the first's messages followed by
/// the second's. A side that succeeded contributes no messages.
///
/// # Examples
///
/// ```
/// use tidemark::validator::keep_first;
///
/// assert_eq!(keep_first(Ok::<_, Vec<String>>(1), Ok::<_, Vec<String>>("x")), Ok(1));
/// assert_eq!(
///     keep_first(Err::<i32, _>(vec!["a".to_string()]), Err::<(), _>(vec!["b".to_string()])),
///     Err(vec!["a".to_string(), "b".to_string()])
/// );
/// ```
pub fn keep_first<T, U>(first: Validated<T>, second: Validated<U>) -> Validated<T> {
    match (first, second) {
        (Ok(value), Ok(_)) => Ok(value),
        (first, second) => merge_errors(first, second),
    }
}

/// Merge two validated values, keeping the second payload when both succeed.
///
/// Error accumulation is the same as [`keep_first`].
pub fn keep_second<T, U>(first: Validated<T>, second: Validated<U>) -> Validated<U> {
    match (first, second) {
        (Ok(_), Ok(value)) => Ok(value),
        (first, second) => merge_errors(first, second),
    }
}

/// Lift a predicate into a validator failing with `message`.
///
/// # Examples
///
/// ```
/// use tidemark::validator::custom;
///
/// let is_one = custom(|n: &i32| *n == 1, "validation error");
/// assert_eq!(is_one.validate(1), Ok(1));
/// assert_eq!(is_one.validate(2), Err(vec!["validation error".to_string()]));
/// ```
pub fn custom<A, P>(predicate: P, message: impl Into<String>) -> Validator<A>
where
    P: Fn(&A) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Validator::new(move |value| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(vec![message.clone()])
        }
    })
}

/// Lift a narrowing guard into a validator failing with `message`.
///
/// The guard returns the narrowed value when it accepts the input, so the
/// check and the success type are a single contract.
pub fn custom_guarded<A, B, G>(guard: G, message: impl Into<String>) -> Validator<A, B>
where
    G: Fn(A) -> Option<B> + Send + Sync + 'static,
{
    let message = message.into();
    Validator::new(move |value| guard(value).ok_or_else(|| vec![message.clone()]))
}

/// Run two independent checks against the same input.
///
/// Both always run. On success the original input is returned, not either
/// validator's output; on failure the messages of both are concatenated, first
/// validator first.
pub fn compose<A>(first: Validator<A>, second: Validator<A>) -> Validator<A>
where
    A: Clone + 'static,
{
    Validator::new(move |value: A| {
        let validated_first = first.validate(value.clone());
        let validated_second = second.validate(value.clone());
        match (validated_first, validated_second) {
            (Ok(_), Ok(_)) => Ok(value),
            (first, second) => merge_errors(first, second),
        }
    })
}

/// Compose a list of validators left to right.
///
/// Every validator runs; all messages from failing ones are reported in list
/// order. An empty list accepts every input.
pub fn many<A>(validators: Vec<Validator<A>>) -> Validator<A>
where
    A: Clone + 'static,
{
    validators
        .into_iter()
        .reduce(compose)
        .unwrap_or_else(|| Validator::new(Ok))
}

/// Invert a validator.
///
/// When `validator` accepts, fail with `message`; when it rejects, succeed
/// with the original input. The inner messages are discarded.
pub fn not<A>(message: impl Into<String>, validator: Validator<A>) -> Validator<A>
where
    A: Clone + 'static,
{
    let message = message.into();
    Validator::new(move |value: A| match validator.validate(value.clone()) {
        Ok(_) => Err(vec![message.clone()]),
        Err(_) => Ok(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail<A: 'static>(message: &'static str) -> Validator<A> {
        Validator::new(move |_| Err(vec![message.to_string()]))
    }

    fn succeed<A: 'static>() -> Validator<A> {
        Validator::new(Ok)
    }

    fn errs(messages: &[&str]) -> Vec<String> {
        messages.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_custom() {
        let is_two = custom(|n: &i32| *n == 2, "validation error");
        assert_eq!(is_two.validate(1), Err(errs(&["validation error"])));
        assert_eq!(is_two.validate(2), Ok(2));
    }

    #[test]
    fn test_keep_second() {
        assert_eq!(keep_second(Ok::<_, Vec<String>>(1), Ok::<_, Vec<String>>("x")), Ok("x"));
        assert_eq!(
            keep_second(Ok::<u8, Vec<String>>(1), Err::<u8, _>(errs(&["b"]))),
            Err(errs(&["b"]))
        );
    }

    #[test]
    fn test_keep_first_error_from_either_side() {
        assert_eq!(keep_first(Err::<u8, _>(errs(&["a"])), Ok::<_, Vec<String>>(2)), Err(errs(&["a"])));
        assert_eq!(keep_first(Ok::<u8, Vec<String>>(1), Err::<u8, _>(errs(&["b"]))), Err(errs(&["b"])));
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(succeed(), succeed()).validate(1), Ok(1));
        assert_eq!(
            compose(fail("validation error on 1st"), fail("validation error on 2nd")).validate(1),
            Err(errs(&["validation error on 1st", "validation error on 2nd"]))
        );
        assert_eq!(
            compose(succeed(), fail("validation error")).validate(1),
            Err(errs(&["validation error"]))
        );
    }

    #[test]
    fn test_compose_returns_original_input() {
        let trimmed = Validator::new(|s: String| Ok(s.trim().to_string()));
        let out = compose(trimmed.clone(), trimmed).validate("  padded ".to_string());
        assert_eq!(out, Ok("  padded ".to_string()));
    }

    #[test]
    fn test_many() {
        assert_eq!(many(vec![succeed(), succeed(), succeed()]).validate(1), Ok(1));
        assert_eq!(
            many(vec![fail("1st"), fail("2nd"), fail("3rd")]).validate(1),
            Err(errs(&["1st", "2nd", "3rd"]))
        );
        assert_eq!(
            many(vec![succeed(), fail("2nd"), succeed()]).validate(1),
            Err(errs(&["2nd"]))
        );
    }

    #[test]
    fn test_many_empty_accepts() {
        assert_eq!(many::<i32>(Vec::new()).validate(5), Ok(5));
    }

    #[test]
    fn test_not() {
        assert_eq!(not("validation error", fail("inner")).validate(1), Ok(1));
        assert_eq!(
            not("validation error", succeed()).validate(1),
            Err(errs(&["validation error"]))
        );
    }

    #[test]
    fn test_custom_guarded_narrows() {
        let parse = custom_guarded(|s: &str| s.parse::<i64>().ok(), "not an integer");
        assert_eq!(parse.validate("-12"), Ok(-12));
        assert_eq!(parse.validate("x"), Err(errs(&["not an integer"])));
    }

    #[test]
    fn test_and_then_skips_next_on_failure() {
        let narrowed = custom_guarded(|n: i32| u8::try_from(n).ok(), "out of range")
            .and_then(custom(|b: &u8| *b > 10, "too small"));
        assert_eq!(narrowed.validate(300), Err(errs(&["out of range"])));
        assert_eq!(narrowed.validate(5), Err(errs(&["too small"])));
        assert_eq!(narrowed.validate(50), Ok(50));
    }

    #[test]
    fn test_map() {
        let len = succeed::<String>().map(|s| s.len());
        assert_eq!(len.validate("four".into()), Ok(4));
    }
}
