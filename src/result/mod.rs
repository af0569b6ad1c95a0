//! Combinators for the binary success/failure container
//!
//! The binary container is `std::result::Result` itself. It is already a closed
//! sum type with exhaustive matching, and its `map`, `map_err` and `and_then`
//! methods have exactly the semantics this crate needs: the untouched branch is
//! passed through, nothing is mutated in place and panics raised by the supplied
//! closure propagate to the caller.
//!
//! This module fills in the rest of the algebra: [`ResultExt`] for per-value
//! combinators, and free functions for collections and fixed-size tuples.
//!
//! # Examples
//!
//! ```
//! use tidemark::result::{self, ResultExt};
//!
//! let parsed = result::traverse(vec!["1", "2", "3"], |s| s.parse::<i32>());
//! assert_eq!(parsed, Ok(vec![1, 2, 3]));
//!
//! let total = parsed.map(|xs| xs.iter().sum::<i32>()).with_default(0);
//! assert_eq!(total, 6);
//! ```
//!
//! Failures short-circuit: the first `Err` in iteration order wins.
//!
//! ```
//! use tidemark::result;
//!
//! let seq = result::sequence(vec![Ok(1), Err("a"), Err("b")]);
//! assert_eq!(seq, Err("a"));
//! ```

pub mod pending;
#[cfg(feature = "serde")]
pub mod tagged;
mod tuple;

pub use tuple::SequenceResults;

use crate::remote::RemoteData;
use crate::Nullable;

/// Extra combinators for `Result`.
///
/// `map`, `map_err` and `and_then` are deliberately not duplicated here: the
/// inherent methods on `Result` already behave as required.
pub trait ResultExt<T, E>: Sized {
    /// Map exactly one branch: `f_err` over `Err`, `f_ok` over `Ok`.
    ///
    /// Equivalent to `self.map(f_ok).map_err(f_err)` but only the relevant
    /// closure is ever invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::ResultExt;
    ///
    /// let ok: Result<i32, String> = Ok(10);
    /// assert_eq!(ok.map_both(|e| e + "!", |v| v + 10), Ok(20));
    ///
    /// let err: Result<i32, String> = Err("error".into());
    /// assert_eq!(err.map_both(|e| e + "!", |v| v + 10), Err("error!".to_string()));
    /// ```
    fn map_both<E2, U, G, F>(self, f_err: G, f_ok: F) -> Result<U, E2>
    where
        G: FnOnce(E) -> E2,
        F: FnOnce(T) -> U;

    /// Apply a function held in another container.
    ///
    /// When `f` is `Err` it is returned as is, without inspecting `self`: the
    /// function container's failure takes precedence even if `self` also
    /// failed. Otherwise this is `self.map(f)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::ResultExt;
    ///
    /// let add_five: Result<fn(i32) -> i32, &str> = Ok(|n| n + 5);
    /// assert_eq!(Ok(5).apply(add_five), Ok(10));
    ///
    /// let missing: Result<fn(i32) -> i32, &str> = Err("e2");
    /// assert_eq!(Err::<i32, _>("e1").apply(missing), Err("e2"));
    /// ```
    fn apply<U, F>(self, f: Result<F, E>) -> Result<U, E>
    where
        F: FnOnce(T) -> U;

    /// Unwrap the success payload or fall back to `default`. Never panics.
    fn with_default(self, default: T) -> T;

    /// Convert into the four-state container: `Ok` to `Success`, `Err` to `Failure`.
    fn into_remote(self) -> RemoteData<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn map_both<E2, U, G, F>(self, f_err: G, f_ok: F) -> Result<U, E2>
    where
        G: FnOnce(E) -> E2,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(value) => Ok(f_ok(value)),
            Err(error) => Err(f_err(error)),
        }
    }

    #[inline]
    fn apply<U, F>(self, f: Result<F, E>) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match f {
            Ok(f) => self.map(f),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn with_default(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn into_remote(self) -> RemoteData<T, E> {
        RemoteData::from_result(self)
    }
}

/// Turn a sequence of results into a result of a sequence.
///
/// Left fold seeded with `Ok(vec![])`: payloads are appended in input order, the
/// first `Err` encountered becomes the outcome and stays sticky for the rest of
/// the fold. The empty input yields `Ok(vec![])`.
///
/// # Examples
///
/// ```
/// use tidemark::result::sequence;
///
/// assert_eq!(sequence(vec![Ok::<_, &str>(5), Ok(4), Ok(3)]), Ok(vec![5, 4, 3]));
/// assert_eq!(sequence(vec![Ok(5), Err("error"), Ok(3)]), Err("error"));
/// assert_eq!(sequence(Vec::<Result<i32, &str>>::new()), Ok(vec![]));
/// ```
pub fn sequence<T, E, I>(iter: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    iter.into_iter().collect()
}

/// Map every element through `f`, then [`sequence`] the outcomes.
///
/// `f` is not called for elements after the first failure.
pub fn traverse<A, T, E, I, F>(iter: I, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Result<T, E>,
{
    iter.into_iter().map(f).collect()
}

/// Keep every success payload, throwing away errors.
///
/// ```
/// use tidemark::result::values;
///
/// assert_eq!(values(vec![Ok(1), Err("x"), Ok(3)]), vec![1, 3]);
/// ```
pub fn values<T, E, I>(iter: I) -> Vec<T>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    iter.into_iter().filter_map(Result::ok).collect()
}

/// Flatten a nested result.
#[inline]
pub fn join<T, E>(nested: Result<Result<T, E>, E>) -> Result<T, E> {
    nested.and_then(|inner| inner)
}

/// Sequence a fixed-size tuple of results, then apply `f` to the payloads.
///
/// The first failing slot, left to right, is returned.
///
/// # Examples
///
/// ```
/// use tidemark::result::map_many;
///
/// let joined = map_many((Ok::<_, &str>("a"), Ok::<_, &str>(1), Ok::<_, &str>(true)), |(s, n, b)| {
///     format!("{s}{n}{b}")
/// });
/// assert_eq!(joined, Ok("a1true".to_string()));
///
/// let failed = map_many((Ok("a"), Err("error"), Ok(true)), |(s, n, b): (&str, i32, bool)| {
///     format!("{s}{n}{b}")
/// });
/// assert_eq!(failed, Err("error"));
/// ```
pub fn map_many<R, E, U, F>(results: R, f: F) -> Result<U, E>
where
    R: SequenceResults<E>,
    F: FnOnce(R::Output) -> U,
{
    results.sequence().map(f)
}

/// Lift an optional value: `None` and in-band absent values (`NaN`) become
/// `Err(error)`.
///
/// Falsy values such as `0` or `""` are present and succeed.
///
/// # Examples
///
/// ```
/// use tidemark::result::from_nullable;
///
/// assert_eq!(from_nullable(Some(0), "e"), Ok(0));
/// assert_eq!(from_nullable(Some(f64::NAN), "e"), Err("e"));
/// assert_eq!(from_nullable(None::<String>, "e"), Err("e"));
/// ```
pub fn from_nullable<T, E>(value: Option<T>, error: E) -> Result<T, E>
where
    T: Nullable,
{
    match value {
        Some(value) if value.is_present() => Ok(value),
        _ => Err(error),
    }
}

/// Lift a value through a narrowing guard.
///
/// The guard both decides acceptance and produces the narrowed payload, so the
/// check and the claimed type can never disagree.
///
/// # Examples
///
/// ```
/// use tidemark::result::from_guarded;
///
/// let even = from_guarded(4, "odd", |n: i32| (n % 2 == 0).then_some(n as u32));
/// assert_eq!(even, Ok(4_u32));
/// ```
pub fn from_guarded<A, B, E, G>(value: A, error: E, guard: G) -> Result<B, E>
where
    G: FnOnce(A) -> Option<B>,
{
    guard(value).ok_or(error)
}
