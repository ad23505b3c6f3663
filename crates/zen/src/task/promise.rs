use core::{fmt, future::IntoFuture};
use std::{
    future::Future,
    sync::{Arc, OnceLock},
};

use futures::future::BoxFuture;
use tokio::sync::Notify;

use crate::{Error, Result};

struct Shared<T, E> {
    slot: OnceLock<Result<T, E>>,
    notify: Notify,
}

impl<T, E> Shared<T, E> {
    fn resolve(&self, result: Result<T, E>) {
        // A slot is only ever written by its single completer.
        let _ = self.slot.set(result);
        self.notify.notify_waiters();
    }
}

/// A single-assignment result produced asynchronously.
///
/// The producer runs once and its value/error pair is stored once. Every
/// clone of a `Promise` observes the same slot, and every read after
/// resolution returns the same result.
///
/// ```
/// use zen::Promise;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let promise = Promise::<u32>::spawn(async { Ok(21 * 2) });
/// promise
///     .then(|v| assert_eq!(*v, 42))
///     .await
///     .catch(|e| panic!("unexpected error: {e}"))
///     .await;
/// assert_eq!(promise.await, Ok(42));
/// # }
/// ```
pub struct Promise<T, E = Error> {
    shared: Arc<Shared<T, E>>,
}

/// The producing half of a [`Promise::pending`] pair.
///
/// Dropping a completer without calling [`Completer::complete`] resolves the
/// promise with [`Error::Abandoned`]; this also covers a producer that
/// panics.
pub struct Completer<T, E: From<Error> = Error> {
    shared: Option<Arc<Shared<T, E>>>,
}

impl<T, E: From<Error>> Completer<T, E> {
    /// Resolves the paired promise.
    pub fn complete(mut self, result: Result<T, E>) {
        if let Some(shared) = self.shared.take() {
            shared.resolve(result);
        }
    }
}

impl<T, E: From<Error>> Drop for Completer<T, E> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!("promise completer dropped without a result");
            shared.resolve(Err(Error::Abandoned.into()));
        }
    }
}

impl<T, E: From<Error>> fmt::Debug for Completer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completer").finish_non_exhaustive()
    }
}

impl<T, E: From<Error>> Promise<T, E> {
    /// Returns an unresolved promise and the handle that resolves it.
    pub fn pending() -> (Completer<T, E>, Self) {
        let shared = Arc::new(Shared {
            slot: OnceLock::new(),
            notify: Notify::new(),
        });
        let completer = Completer {
            shared: Some(Arc::clone(&shared)),
        };
        (completer, Self { shared })
    }

    /// Runs `fut` on the current Tokio runtime and returns immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        let (completer, promise) = Self::pending();
        tokio::spawn(async move { completer.complete(fut.await) });
        promise
    }

    /// Runs the synchronous `f` on Tokio's blocking pool.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn_blocking<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        let (completer, promise) = Self::pending();
        tokio::task::spawn_blocking(move || completer.complete(f()));
        promise
    }
}

impl<T, E> Promise<T, E> {
    fn settled(result: Result<T, E>) -> Self {
        let slot = OnceLock::new();
        let _ = slot.set(result);
        Self {
            shared: Arc::new(Shared {
                slot,
                notify: Notify::new(),
            }),
        }
    }

    pub fn resolved(value: T) -> Self {
        Self::settled(Ok(value))
    }

    pub fn rejected(err: E) -> Self {
        Self::settled(Err(err))
    }

    pub fn is_resolved(&self) -> bool {
        self.shared.slot.get().is_some()
    }

    /// Waits for resolution and borrows the stored result.
    pub async fn wait(&self) -> &Result<T, E> {
        loop {
            // Registered before the check so a resolution in between is not
            // missed.
            let notified = self.shared.notify.notified();
            if let Some(result) = self.shared.slot.get() {
                return result;
            }
            notified.await;
        }
    }

    /// Waits for resolution and returns a clone of the result.
    pub async fn get(&self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.wait().await.clone()
    }

    /// Returns the result if already resolved, without waiting.
    pub fn try_get(&self) -> Option<Result<T, E>>
    where
        T: Clone,
        E: Clone,
    {
        self.shared.slot.get().cloned()
    }

    /// Waits, then runs `f` on the value if the promise succeeded.
    pub async fn then(&self, f: impl FnOnce(&T)) -> &Self {
        if let Ok(value) = self.wait().await {
            f(value);
        }
        self
    }

    /// Waits, then runs `f` on the error if the promise failed.
    pub async fn catch(&self, f: impl FnOnce(&E)) -> &Self {
        if let Err(err) = self.wait().await {
            f(err);
        }
        self
    }

    /// Waits for every promise in order and collects their values.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed promise by index.
    pub async fn all(promises: &[Self]) -> Result<Vec<T>, E>
    where
        T: Clone,
        E: Clone,
    {
        let mut values = Vec::with_capacity(promises.len());
        for promise in promises {
            values.push(promise.get().await?);
        }
        Ok(values)
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> IntoFuture for Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.get().await })
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shared.slot.get() {
            Some(result) => f.debug_tuple("Promise").field(result).finish(),
            None => f.write_str("Promise(<pending>)"),
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use super::Promise;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

    /// Serializes the resolved value. Pending and rejected promises are
    /// serialization errors.
    impl<T: Serialize, E> Serialize for Promise<T, E> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self.shared.slot.get() {
                Some(Ok(value)) => value.serialize(serializer),
                Some(Err(_)) => Err(S::Error::custom("promise was rejected")),
                None => Err(S::Error::custom("promise is still pending")),
            }
        }
    }

    /// Deserializes into an already resolved promise.
    impl<'de, T: Deserialize<'de>, E> Deserialize<'de> for Promise<T, E> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            T::deserialize(deserializer).map(Self::resolved)
        }
    }
}
