//! Async-lifted remote-data combinators
//!
//! A *pending remote* is any `Future<Output = RemoteData<T, E>>`. These functions
//! await their pending inputs and delegate to the synchronous combinators, so
//! tag preservation carries over unchanged. [`settle`] is the bridge from any
//! fallible future (an HTTP call, a database query) into a pending remote.
//!
//! # Examples
//!
//! ```
//! use tidemark::remote::{pending, RemoteData};
//!
//! # tokio_test::block_on(async {
//! let request = async { Ok::<_, String>(vec!["ada", "grace"]) };
//! let names = pending::map_async(pending::settle(request), |users| users.len()).await;
//! assert_eq!(names, RemoteData::Success(2));
//! # });
//! ```

use std::future::Future;

use futures::future::join_all;

use super::{RemoteData, SequenceRemote};

/// Turn a fallible future into a pending remote: `Ok` settles to `Success`,
/// `Err` to `Failure`.
///
/// The error payload is carried as is and never inspected.
pub async fn settle<T, E, P>(request: P) -> RemoteData<T, E>
where
    P: Future<Output = Result<T, E>>,
{
    let remote = RemoteData::from_result(request.await);
    #[cfg(feature = "tracing")]
    tracing::trace!(state = remote.tag(), "request settled");
    remote
}

/// Await `pending`, then `map` its success payload.
pub async fn map_async<T, U, E, P, F>(pending: P, f: F) -> RemoteData<U, E>
where
    P: Future<Output = RemoteData<T, E>>,
    F: FnOnce(T) -> U,
{
    pending.await.map(f)
}

/// Await `pending`, then map its failure payload.
pub async fn map_failure_async<T, E, E2, P, F>(pending: P, f: F) -> RemoteData<T, E2>
where
    P: Future<Output = RemoteData<T, E>>,
    F: FnOnce(E) -> E2,
{
    pending.await.map_failure(f)
}

/// Await `pending`, then [`map_both`](RemoteData::map_both).
pub async fn map_both_async<T, U, E, E2, P, G, F>(
    pending: P,
    f_err: G,
    f_ok: F,
) -> RemoteData<U, E2>
where
    P: Future<Output = RemoteData<T, E>>,
    G: FnOnce(E) -> E2,
    F: FnOnce(T) -> U,
{
    pending.await.map_both(f_err, f_ok)
}

/// Await `pending`, then chain a synchronous remote step.
pub async fn and_then_async<T, U, E, P, F>(pending: P, f: F) -> RemoteData<U, E>
where
    P: Future<Output = RemoteData<T, E>>,
    F: FnOnce(T) -> RemoteData<U, E>,
{
    pending.await.and_then(f)
}

/// Map a settled remote with an async function. `f` runs only on `Success`.
pub async fn map_async_f<T, U, E, F, Fut>(remote: RemoteData<T, E>, f: F) -> RemoteData<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = U>,
{
    match remote.into_success() {
        Ok(value) => RemoteData::Success(f(value).await),
        Err(other) => other,
    }
}

/// Chain a settled remote into an async remote step.
pub async fn and_then_async_f<T, U, E, F, Fut>(remote: RemoteData<T, E>, f: F) -> RemoteData<U, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = RemoteData<U, E>>,
{
    match remote.into_success() {
        Ok(value) => f(value).await,
        Err(other) => other,
    }
}

/// Await `pending`, then chain it into an async remote step.
pub async fn and_then_async_rf<T, U, E, P, F, Fut>(pending: P, f: F) -> RemoteData<U, E>
where
    P: Future<Output = RemoteData<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = RemoteData<U, E>>,
{
    and_then_async_f(pending.await, f).await
}

/// Await the value and the function container concurrently, then
/// [`apply`](RemoteData::apply).
pub async fn apply_async<T, U, E, P, PF, F>(pending: P, pending_f: PF) -> RemoteData<U, E>
where
    P: Future<Output = RemoteData<T, E>>,
    PF: Future<Output = RemoteData<F, E>>,
    F: FnOnce(T) -> U,
{
    let (remote, f) = futures::join!(pending, pending_f);
    remote.apply(f)
}

/// Await every pending remote concurrently, then [`sequence`](super::sequence)
/// them in input order.
pub async fn sequence_async<T, E, I>(pending: I) -> RemoteData<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = RemoteData<T, E>>,
{
    super::sequence(join_all(pending).await)
}

/// Start `f` for every value at once, then sequence the outcomes in input order.
pub async fn traverse_async_f<A, T, E, I, F, Fut>(values: I, f: F) -> RemoteData<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Fut,
    Fut: Future<Output = RemoteData<T, E>>,
{
    sequence_async(values.into_iter().map(f)).await
}

/// Sequence a tuple of settled remotes, then map the payloads with an async
/// function.
pub async fn map_many_async_f<R, E, U, F, Fut>(remotes: R, f: F) -> RemoteData<U, E>
where
    R: SequenceRemote<E>,
    F: FnOnce(R::Output) -> Fut,
    Fut: Future<Output = U>,
{
    map_async_f(remotes.sequence(), f).await
}
