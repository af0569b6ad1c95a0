//! Async-lifted result combinators
//!
//! A *pending result* is any `Future<Output = Result<T, E>>`. Each function here
//! awaits its pending input and then delegates to the synchronous combinator of
//! the same name, so the semantics are identical once the input has settled.
//! The only suspension points are the awaits on inputs (and on `f` for the
//! `*_async_f` variants). Nothing blocks a thread.
//!
//! Collection variants ([`sequence_async`], [`traverse_async_f`]) drive every
//! input concurrently and fold in original input order, regardless of which
//! input settles first.
//!
//! # Examples
//!
//! ```
//! use tidemark::result::pending;
//!
//! # tokio_test::block_on(async {
//! let fetched = async { Ok::<_, String>(20) };
//! let doubled = pending::map_async(fetched, |n| n * 2).await;
//! assert_eq!(doubled, Ok(40));
//! # });
//! ```

use std::future::Future;

use futures::future::join_all;

use super::{ResultExt, SequenceResults};

/// Await `pending`, then `map` its success payload.
pub async fn map_async<T, U, E, P, F>(pending: P, f: F) -> Result<U, E>
where
    P: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> U,
{
    pending.await.map(f)
}

/// Await `pending`, then map its error payload.
pub async fn map_err_async<T, E, E2, P, F>(pending: P, f: F) -> Result<T, E2>
where
    P: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> E2,
{
    pending.await.map_err(f)
}

/// Await `pending`, then [`map_both`](ResultExt::map_both).
pub async fn map_both_async<T, U, E, E2, P, G, F>(pending: P, f_err: G, f_ok: F) -> Result<U, E2>
where
    P: Future<Output = Result<T, E>>,
    G: FnOnce(E) -> E2,
    F: FnOnce(T) -> U,
{
    pending.await.map_both(f_err, f_ok)
}

/// Await `pending`, then chain a synchronous fallible step.
pub async fn and_then_async<T, U, E, P, F>(pending: P, f: F) -> Result<U, E>
where
    P: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> Result<U, E>,
{
    pending.await.and_then(f)
}

/// Map a settled result with an async function.
///
/// `f` runs only on `Ok`; an `Err` is returned as is. The return value is a
/// future in both cases.
pub async fn map_async_f<T, U, E, F, Fut>(result: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    match result {
        Ok(value) => Ok(f(value).await),
        Err(error) => Err(error),
    }
}

/// Chain a settled result into an async fallible step.
pub async fn and_then_async_f<T, U, E, F, Fut>(result: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    match result {
        Ok(value) => f(value).await,
        Err(error) => Err(error),
    }
}

/// Await `pending`, then chain it into an async fallible step.
pub async fn and_then_async_rf<T, U, E, P, F, Fut>(pending: P, f: F) -> Result<U, E>
where
    P: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    and_then_async_f(pending.await, f).await
}

/// Await the value and the function container concurrently, then
/// [`apply`](ResultExt::apply).
pub async fn apply_async<T, U, E, P, PF, F>(pending: P, pending_f: PF) -> Result<U, E>
where
    P: Future<Output = Result<T, E>>,
    PF: Future<Output = Result<F, E>>,
    F: FnOnce(T) -> U,
{
    let (result, f) = futures::join!(pending, pending_f);
    result.apply(f)
}

/// Await every pending result concurrently, then [`sequence`](super::sequence)
/// them in input order.
///
/// # Examples
///
/// ```
/// use futures::future::ready;
/// use tidemark::result::pending::sequence_async;
///
/// # tokio_test::block_on(async {
/// let all = sequence_async(vec![ready(Ok::<_, ()>(1)), ready(Ok(2))]).await;
/// assert_eq!(all, Ok(vec![1, 2]));
///
/// let failed = sequence_async(vec![ready(Ok(1)), ready(Err("a")), ready(Err("b"))]).await;
/// assert_eq!(failed, Err("a"));
/// # });
/// ```
pub async fn sequence_async<T, E, I>(pending: I) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    super::sequence(join_all(pending).await)
}

/// Start `f` for every value at once, then sequence the outcomes in input order.
pub async fn traverse_async_f<A, T, E, I, F, Fut>(values: I, f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    sequence_async(values.into_iter().map(f)).await
}

/// Sequence a tuple of settled results, then map the payloads with an async
/// function.
pub async fn map_many_async_f<R, E, U, F, Fut>(results: R, f: F) -> Result<U, E>
where
    R: SequenceResults<E>,
    F: FnOnce(R::Output) -> Fut,
    Fut: Future<Output = U>,
{
    map_async_f(results.sequence(), f).await
}
