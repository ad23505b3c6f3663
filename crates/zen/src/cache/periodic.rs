use core::{fmt, time::Duration};
use std::future::Future;

use tokio::{sync::watch, time::sleep};
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

type Slot<T, E> = Option<Result<T, E>>;

/// A value recomputed on a fixed interval by a background task.
///
/// The task computes immediately, publishes the value/error pair, sleeps for
/// `interval`, and repeats until cancelled. Readers take a snapshot of the
/// latest published result and never wait on the computation.
///
/// Dropping a `Periodic` stops its task. Cancellation never touches a parent
/// token passed to [`Periodic::spawn_with_token`]; the cache always runs
/// under its own child token.
///
/// ```
/// use std::time::Duration;
/// use zen::Periodic;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> zen::Result<()> {
/// let cache = Periodic::<u64>::spawn(Duration::from_secs(60), || async { Ok(42) });
/// cache.ready().await?;
/// assert_eq!(cache.get()?, 42);
/// # Ok(())
/// # }
/// ```
pub struct Periodic<T, E = Error> {
    rx: watch::Receiver<Slot<T, E>>,
    token: CancellationToken,
}

impl<T, E> Periodic<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Starts refreshing `f` every `interval` on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F, Fut>(interval: Duration, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::spawn_with_token(&CancellationToken::new(), interval, f)
    }

    /// Like [`Periodic::spawn`], stopping when `parent` is cancelled.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_with_token<F, Fut>(parent: &CancellationToken, interval: Duration, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let token = parent.child_token();
        let (tx, rx) = watch::channel(None);
        tokio::spawn(refresh_loop(tx, token.clone(), interval, f));
        Self { rx, token }
    }
}

impl<T, E> Periodic<T, E> {
    /// Returns a clone of the latest result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotReady`] before the first computation completes,
    /// otherwise whatever the last computation returned.
    pub fn get(&self) -> Result<T, E>
    where
        T: Clone,
        E: Clone + From<Error>,
    {
        match &*self.rx.borrow() {
            Some(result) => result.clone(),
            None => Err(Error::NotReady.into()),
        }
    }

    /// Returns `true` once a first result has been published.
    pub fn is_ready(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Waits for the first computation to complete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the task stopped before publishing
    /// anything.
    pub async fn ready(&self) -> Result<()> {
        let mut rx = self.rx.clone();
        rx.wait_for(Option::is_some)
            .await
            .map(|_| ())
            .map_err(|_| Error::Cancelled)
    }

    /// Waits for the next computation to complete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the task stops first.
    pub async fn changed(&self) -> Result<()> {
        let mut rx = self.rx.clone();
        rx.mark_unchanged();
        rx.changed().await.map_err(|_| Error::Cancelled)
    }

    /// Stops further recomputation. The last result stays readable.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<T, E> Drop for Periodic<T, E> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Periodic<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Periodic")
            .field("latest", &*self.rx.borrow())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

async fn refresh_loop<T, E, F, Fut>(
    tx: watch::Sender<Slot<T, E>>,
    token: CancellationToken,
    interval: Duration,
    mut f: F,
) where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(?interval, "periodic refresh started");

    loop {
        let result = tokio::select! {
            biased;
            () = token.cancelled() => break,
            result = f() => result,
        };

        #[cfg(feature = "tracing")]
        if result.is_err() {
            tracing::debug!("periodic refresh produced an error, caching it");
        }
        tx.send_replace(Some(result));

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            () = sleep(interval) => {}
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("periodic refresh cancelled");
}
