//! The four-state remote-data container
//!
//! `RemoteData<T, E>` models the lifecycle of a value fetched from somewhere
//! else: nothing requested yet, request in flight, request failed, request
//! succeeded. Callers match exhaustively over all four states to drive what they
//! show, so every combinator in this module passes `NotAsked`, `Loading` and
//! `Failure` through with their own tag. Only `Success` is ever acted upon.
//!
//! # Examples
//!
//! ```
//! use tidemark::RemoteData;
//!
//! let user: RemoteData<&str, String> = RemoteData::success("ada");
//! let greeting = user.map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, RemoteData::Success("hello, ada".to_string()));
//!
//! let pending: RemoteData<&str, String> = RemoteData::loading();
//! assert_eq!(pending.map(|name| name.len()), RemoteData::Loading);
//! ```
//!
//! ## Sequencing
//!
//! ```
//! use tidemark::remote::{self, RemoteData};
//!
//! let all = remote::sequence(vec![
//!     RemoteData::<_, ()>::success(1),
//!     RemoteData::NotAsked,
//!     RemoteData::Loading,
//! ]);
//! assert_eq!(all, RemoteData::NotAsked);
//! ```

#[cfg(feature = "async")]
mod cell;
pub mod pending;
#[cfg(feature = "serde")]
mod serde_impl;
mod tuple;

#[cfg(feature = "async")]
pub use cell::RemoteCell;
pub use tuple::SequenceRemote;

use crate::Nullable;

/// A remote value in one of four lifecycle states.
///
/// The usual progression is `NotAsked -> Loading -> Failure | Success`, but the
/// type is a plain value and does not enforce any ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteData<T, E> {
    /// No request has been made.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request settled with an error.
    Failure(E),
    /// The request settled with a value.
    Success(T),
}

impl<T, E> RemoteData<T, E> {
    /// Create a `NotAsked` value.
    #[inline]
    pub fn not_asked() -> Self {
        RemoteData::NotAsked
    }

    /// Create a `Loading` value.
    #[inline]
    pub fn loading() -> Self {
        RemoteData::Loading
    }

    /// Create a `Failure` value.
    #[inline]
    pub fn failure(error: E) -> Self {
        RemoteData::Failure(error)
    }

    /// Create a `Success` value.
    #[inline]
    pub fn success(value: T) -> Self {
        RemoteData::Success(value)
    }

    /// Returns `true` for `NotAsked`.
    #[inline]
    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    /// Returns `true` for `Loading`.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// Returns `true` once the request has settled, either way.
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, RemoteData::Failure(_) | RemoteData::Success(_))
    }

    /// The name of the current state, for logs and diagnostics.
    #[inline]
    pub fn tag(&self) -> &'static str {
        match self {
            RemoteData::NotAsked => "NotAsked",
            RemoteData::Loading => "Loading",
            RemoteData::Failure(_) => "Failure",
            RemoteData::Success(_) => "Success",
        }
    }

    /// Borrow the payloads.
    #[inline]
    pub fn as_ref(&self) -> RemoteData<&T, &E> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Success(value) => RemoteData::Success(value),
        }
    }

    /// Transform the success payload.
    ///
    /// Every other state is returned with its tag intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::RemoteData;
    ///
    /// let r = RemoteData::<_, ()>::success("value").map(|v| format!("{v}!"));
    /// assert_eq!(r, RemoteData::Success("value!".to_string()));
    ///
    /// let r = RemoteData::<&str, &str>::failure("error").map(|v| v.len());
    /// assert_eq!(r, RemoteData::Failure("error"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            RemoteData::Success(value) => RemoteData::Success(f(value)),
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
        }
    }

    /// Transform the failure payload.
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> RemoteData<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            RemoteData::Failure(error) => RemoteData::Failure(f(error)),
            RemoteData::Success(value) => RemoteData::Success(value),
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
        }
    }

    /// Map `Failure` with `f_err` and `Success` with `f_ok`.
    ///
    /// Only the relevant closure runs; `NotAsked` and `Loading` run neither.
    #[inline]
    pub fn map_both<E2, U, G, F>(self, f_err: G, f_ok: F) -> RemoteData<U, E2>
    where
        G: FnOnce(E) -> E2,
        F: FnOnce(T) -> U,
    {
        match self {
            RemoteData::Failure(error) => RemoteData::Failure(f_err(error)),
            RemoteData::Success(value) => RemoteData::Success(f_ok(value)),
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
        }
    }

    /// Chain a dependent remote step. `f` runs only on `Success`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> RemoteData<U, E>,
    {
        match self.into_success() {
            Ok(value) => f(value),
            Err(other) => other,
        }
    }

    /// Apply a function held in another container.
    ///
    /// If `f` is not `Success` it is returned with its own tag, regardless of
    /// `self`. Otherwise this is `self.map(f)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::RemoteData;
    ///
    /// let f: RemoteData<fn(i32) -> i32, ()> = RemoteData::Loading;
    /// assert_eq!(RemoteData::Success(5).apply(f), RemoteData::Loading);
    /// ```
    #[inline]
    pub fn apply<U, F>(self, f: RemoteData<F, E>) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match f.into_success() {
            Ok(f) => self.map(f),
            Err(other) => other,
        }
    }

    /// Unwrap the success payload or fall back to `default`. Never panics.
    #[inline]
    pub fn with_default(self, default: T) -> T {
        match self {
            RemoteData::Success(value) => value,
            _ => default,
        }
    }

    /// Convert to a `Result`, mapping `NotAsked` and `Loading` to
    /// `Err(default_error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidemark::RemoteData;
    ///
    /// assert_eq!(RemoteData::<i32, _>::Loading.into_result("not ready"), Err("not ready"));
    /// assert_eq!(RemoteData::<_, &str>::Success(1).into_result("not ready"), Ok(1));
    /// ```
    #[inline]
    pub fn into_result(self, default_error: E) -> Result<T, E> {
        match self {
            RemoteData::Success(value) => Ok(value),
            RemoteData::Failure(error) => Err(error),
            RemoteData::NotAsked | RemoteData::Loading => Err(default_error),
        }
    }

    /// Convert a `Result`: `Ok` to `Success`, `Err` to `Failure`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RemoteData::Success(value),
            Err(error) => RemoteData::Failure(error),
        }
    }

    /// Split off the success payload, re-tagging every other state for a new
    /// payload type.
    #[inline]
    pub(crate) fn into_success<U>(self) -> Result<T, RemoteData<U, E>> {
        match self {
            RemoteData::Success(value) => Ok(value),
            RemoteData::Failure(error) => Err(RemoteData::Failure(error)),
            RemoteData::NotAsked => Err(RemoteData::NotAsked),
            RemoteData::Loading => Err(RemoteData::Loading),
        }
    }
}

impl<T, E> RemoteData<RemoteData<T, E>, E> {
    /// Flatten a nested container.
    #[inline]
    pub fn flatten(self) -> RemoteData<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Default for RemoteData<T, E> {
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<T, E> From<Result<T, E>> for RemoteData<T, E> {
    fn from(result: Result<T, E>) -> Self {
        RemoteData::from_result(result)
    }
}

/// Turn a sequence of containers into a container of a sequence.
///
/// Left fold seeded with `Success(vec![])`. The first non-success element in
/// iteration order becomes the outcome with its own tag. Empty input yields
/// `Success(vec![])`.
pub fn sequence<T, E, I>(iter: I) -> RemoteData<Vec<T>, E>
where
    I: IntoIterator<Item = RemoteData<T, E>>,
{
    let mut values = Vec::new();
    for remote in iter {
        match remote.into_success() {
            Ok(value) => values.push(value),
            Err(other) => return other,
        }
    }
    RemoteData::Success(values)
}

/// Map every element through `f`, then [`sequence`].
///
/// `f` is not called for elements after the first non-success outcome.
pub fn traverse<A, T, E, I, F>(iter: I, mut f: F) -> RemoteData<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> RemoteData<T, E>,
{
    let mut values = Vec::new();
    for item in iter {
        match f(item).into_success() {
            Ok(value) => values.push(value),
            Err(other) => return other,
        }
    }
    RemoteData::Success(values)
}

/// Keep every success payload, discarding all other states.
pub fn values<T, E, I>(iter: I) -> Vec<T>
where
    I: IntoIterator<Item = RemoteData<T, E>>,
{
    iter.into_iter()
        .filter_map(|remote| match remote {
            RemoteData::Success(value) => Some(value),
            _ => None,
        })
        .collect()
}

/// Sequence a fixed-size tuple, then apply `f` to the payloads.
///
/// # Examples
///
/// ```
/// use tidemark::remote::{map_many, RemoteData};
///
/// let out = map_many(
///     (
///         RemoteData::<_, ()>::success("a"),
///         RemoteData::<i32, ()>::NotAsked,
///         RemoteData::<_, ()>::success(true),
///     ),
///     |(s, n, b)| format!("{s}{n}{b}"),
/// );
/// assert_eq!(out, RemoteData::NotAsked);
/// ```
pub fn map_many<R, E, U, F>(remotes: R, f: F) -> RemoteData<U, E>
where
    R: SequenceRemote<E>,
    F: FnOnce(R::Output) -> U,
{
    remotes.sequence().map(f)
}

/// Lift an optional value: `None` and `NaN` become `Failure(error)`.
pub fn from_nullable<T, E>(value: Option<T>, error: E) -> RemoteData<T, E>
where
    T: Nullable,
{
    RemoteData::from_result(crate::result::from_nullable(value, error))
}

/// Lift a value through a narrowing guard: `Success` when the guard yields a
/// narrowed payload, `Failure(error)` otherwise.
pub fn from_guarded<A, B, E, G>(value: A, error: E, guard: G) -> RemoteData<B, E>
where
    G: FnOnce(A) -> Option<B>,
{
    RemoteData::from_result(crate::result::from_guarded(value, error, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Remote = RemoteData<i32, &'static str>;

    fn all_states() -> Vec<Remote> {
        vec![
            RemoteData::NotAsked,
            RemoteData::Loading,
            RemoteData::Failure("error"),
            RemoteData::Success(7),
        ]
    }

    #[test]
    fn test_map_identity_on_every_state() {
        for remote in all_states() {
            assert_eq!(remote.map(|v| v), remote);
        }
    }

    #[test]
    fn test_map_failure() {
        let r: Remote = RemoteData::Failure("error");
        assert_eq!(r.map_failure(|e| format!("{e}!")), RemoteData::Failure("error!".to_string()));
        let r: Remote = RemoteData::Success(1);
        assert_eq!(r.map_failure(|e| e.len()), RemoteData::Success(1));
    }

    #[test]
    fn test_map_both_leaves_pending_states() {
        let calls = Cell::new(0);
        let bump = |_: i32| calls.set(calls.get() + 1);
        for remote in [Remote::NotAsked, Remote::Loading] {
            let out = remote.map_both(|e| e.len(), |v| bump(v));
            assert!(!out.is_settled());
        }
        assert_eq!(calls.get(), 0);
        assert_eq!(Remote::Success(10).map_both(|e| e.len(), |v| v + 10), RemoteData::Success(20));
        assert_eq!(Remote::Failure("err").map_both(|e| e.len(), |v| v + 10), RemoteData::Failure(3));
    }

    #[test]
    fn test_and_then_only_on_success() {
        let called = Cell::new(false);
        for remote in [Remote::NotAsked, Remote::Loading, Remote::Failure("e")] {
            let expected = remote;
            let out = remote.and_then(|v| {
                called.set(true);
                RemoteData::Success(v + 1)
            });
            assert_eq!(out, expected);
        }
        assert!(!called.get());
        assert_eq!(Remote::Success(1).and_then(|v| Remote::Success(v + 1)), RemoteData::Success(2));
    }

    #[test]
    fn test_apply_function_state_wins() {
        let f_failed: RemoteData<fn(i32) -> i32, &str> = RemoteData::Failure("e2");
        assert_eq!(Remote::Failure("e1").apply(f_failed), RemoteData::Failure("e2"));

        let f_not_asked: RemoteData<fn(i32) -> i32, &str> = RemoteData::NotAsked;
        assert_eq!(Remote::Success(1).apply(f_not_asked), RemoteData::NotAsked);

        let f_ok: RemoteData<fn(i32) -> i32, &str> = RemoteData::Success(|n| n + 5);
        assert_eq!(Remote::Success(5).apply(f_ok), RemoteData::Success(10));
        assert_eq!(Remote::Loading.apply(f_ok), RemoteData::Loading);
    }

    #[test]
    fn test_with_default() {
        assert_eq!(Remote::Loading.with_default(0), 0);
        assert_eq!(Remote::Failure("e").with_default(0), 0);
        assert_eq!(Remote::Success(3).with_default(0), 3);
    }

    #[test]
    fn test_into_result_covers_every_state() {
        assert_eq!(Remote::NotAsked.into_result("missing"), Err("missing"));
        assert_eq!(Remote::Loading.into_result("missing"), Err("missing"));
        assert_eq!(Remote::Failure("boom").into_result("missing"), Err("boom"));
        assert_eq!(Remote::Success(4).into_result("missing"), Ok(4));
    }

    #[test]
    fn test_from_result() {
        assert_eq!(Remote::from(Ok(1)), RemoteData::Success(1));
        assert_eq!(Remote::from(Err("e")), RemoteData::Failure("e"));
    }

    #[test]
    fn test_sequence_keeps_first_non_success_tag() {
        assert_eq!(
            sequence(vec![Remote::Success(1), Remote::Loading, Remote::NotAsked]),
            RemoteData::Loading
        );
        assert_eq!(
            sequence(vec![Remote::Failure("a"), Remote::Failure("b")]),
            RemoteData::Failure("a")
        );
        assert_eq!(sequence(Vec::<Remote>::new()), RemoteData::Success(vec![]));
        assert_eq!(
            sequence(vec![Remote::Success(5), Remote::Success(4)]),
            RemoteData::Success(vec![5, 4])
        );
    }

    #[test]
    fn test_traverse_stops_at_first_non_success() {
        let calls = Cell::new(0);
        let out = traverse(vec![1, 2, 3], |n| {
            calls.set(calls.get() + 1);
            if n == 2 {
                Remote::Loading
            } else {
                Remote::Success(n)
            }
        });
        assert_eq!(out, RemoteData::Loading);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_values_and_flatten() {
        assert_eq!(values(all_states()), vec![7]);
        let nested: RemoteData<Remote, &str> = RemoteData::Success(RemoteData::Failure("inner"));
        assert_eq!(nested.flatten(), RemoteData::Failure("inner"));
    }

    #[test]
    fn test_from_nullable_and_guarded() {
        assert_eq!(from_nullable(Some(f64::NAN), "e"), RemoteData::Failure("e"));
        assert_eq!(from_nullable(Some(0.0), "e"), RemoteData::Success(0.0));
        assert_eq!(
            from_guarded("42", "not a number", |s: &str| s.parse::<u8>().ok()),
            RemoteData::Success(42)
        );
    }

    #[test]
    fn test_default_is_not_asked() {
        assert!(Remote::default().is_not_asked());
    }
}
