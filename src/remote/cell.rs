//! A shared slot holding the current state of one remote request.
//!
//! `RemoteCell` is the framework-neutral core of a "fetch on demand" view
//! binding: it owns one [`RemoteData`], refuses to start a second request while
//! one has been issued, and publishes every transition through a
//! `tokio::sync::watch` channel so any number of observers can react.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use super::RemoteData;

/// Holds the current [`RemoteData`] for a single request and drives its
/// `NotAsked -> Loading -> Failure | Success` lifecycle.
///
/// Cloning a cell yields another handle to the same state.
///
/// # Examples
///
/// ```
/// use tidemark::remote::{pending, RemoteCell, RemoteData};
///
/// # tokio_test::block_on(async {
/// let cell = RemoteCell::<u32, String>::new();
///
/// let fetch = cell
///     .trigger(|| pending::settle(async { Ok(7) }))
///     .expect("first trigger starts the request");
/// assert_eq!(cell.current(), RemoteData::Loading);
///
/// // Already issued: ignored.
/// assert!(cell.trigger(|| pending::settle(async { Ok(8) })).is_none());
///
/// fetch.await;
/// assert_eq!(cell.current(), RemoteData::Success(7));
/// # });
/// ```
pub struct RemoteCell<T, E> {
    state: Arc<watch::Sender<RemoteData<T, E>>>,
}

impl<T, E> RemoteCell<T, E> {
    /// Create a cell in the `NotAsked` state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(RemoteData::NotAsked);
        Self {
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> RemoteData<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.state.borrow().clone()
    }

    /// Inspect the current state without cloning it.
    pub fn with_current<R>(&self, f: impl FnOnce(&RemoteData<T, E>) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Receive a notification on every state change.
    pub fn subscribe(&self) -> watch::Receiver<RemoteData<T, E>> {
        self.state.subscribe()
    }

    /// Start a request if none has been issued yet.
    ///
    /// Returns `None` without calling `request` unless the cell is `NotAsked`.
    /// Otherwise the state becomes `Loading` before `request` is called, and
    /// the returned future awaits the request and replaces the state with
    /// whatever it settled to. The caller decides whether to `.await` it or
    /// hand it to an executor.
    pub fn trigger<F, Fut>(&self, request: F) -> Option<impl Future<Output = ()> + 'static>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RemoteData<T, E>> + 'static,
        T: 'static,
        E: 'static,
    {
        let started = self.state.send_if_modified(|state| {
            if state.is_not_asked() {
                *state = RemoteData::Loading;
                true
            } else {
                false
            }
        });

        if !started {
            #[cfg(feature = "tracing")]
            self.with_current(|state| {
                tracing::debug!(state = state.tag(), "trigger ignored, request already issued")
            });
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("request issued, state is Loading");

        let pending = request();
        let state = Arc::clone(&self.state);
        Some(async move {
            let settled = pending.await;
            #[cfg(feature = "tracing")]
            tracing::debug!(state = settled.tag(), "request settled");
            state.send_replace(settled);
        })
    }

    /// Put the cell back to `NotAsked` so the next trigger is accepted.
    ///
    /// A request that is still in flight will overwrite the state when it
    /// settles.
    pub fn reset(&self) {
        self.state.send_replace(RemoteData::NotAsked);
    }
}

impl<T, E> Default for RemoteCell<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for RemoteCell<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for RemoteCell<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCell")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::pending::settle;
    use std::cell::Cell;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_trigger_sets_loading_before_request_runs() {
        let cell = RemoteCell::<i32, String>::new();
        let observed = Cell::new(None);
        let fetch = cell.trigger(|| {
            observed.set(Some(cell.current()));
            settle(async { Ok(1) })
        });
        assert_eq!(observed.take(), Some(RemoteData::Loading));
        fetch.expect("request started").await;
        assert_eq!(cell.current(), RemoteData::Success(1));
    }

    #[tokio::test]
    async fn test_trigger_is_ignored_unless_not_asked() {
        let cell = RemoteCell::<i32, &str>::new();
        let (tx, rx) = oneshot::channel::<Result<i32, &str>>();

        let fetch = cell
            .trigger(|| settle(async move { rx.await.unwrap_or(Err("dropped")) }))
            .expect("first trigger accepted");

        let called = Cell::new(false);
        let second = cell.trigger(|| {
            called.set(true);
            settle(async { Ok(2) })
        });
        assert!(second.is_none());
        assert!(!called.get());

        tx.send(Err("timeout")).expect("receiver alive");
        fetch.await;
        assert_eq!(cell.current(), RemoteData::Failure("timeout"));

        assert!(cell.trigger(|| settle(async { Ok(3) })).is_none());
    }

    #[tokio::test]
    async fn test_reset_allows_another_request() {
        let cell = RemoteCell::<&str, ()>::new();
        cell.trigger(|| settle(async { Ok("first") }))
            .expect("accepted")
            .await;
        cell.reset();
        assert!(cell.current().is_not_asked());

        cell.trigger(|| settle(async { Ok("second") }))
            .expect("accepted after reset")
            .await;
        assert_eq!(cell.current(), RemoteData::Success("second"));
    }

    #[tokio::test]
    async fn test_subscribers_see_every_transition() {
        let cell = RemoteCell::<u8, ()>::new();
        let mut rx = cell.subscribe();
        let handle = cell.clone();

        let fetch = cell
            .trigger(|| settle(async { Ok(9) }))
            .expect("accepted");
        rx.changed().await.expect("sender alive");
        assert!(rx.borrow_and_update().is_loading());

        tokio::spawn(fetch).await.expect("task completed");
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), RemoteData::Success(9));
        assert_eq!(handle.current(), RemoteData::Success(9));
    }

    #[cfg(feature = "tracing")]
    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_ignored_trigger_is_logged() {
        let cell = RemoteCell::<u8, ()>::new();
        let fetch = cell.trigger(|| settle(async { Ok(1) })).expect("accepted");
        let _ = cell.trigger(|| settle(async { Ok(2) }));
        fetch.await;
        assert!(logs_contain("trigger ignored"));
        assert!(logs_contain("request settled"));
    }
}
