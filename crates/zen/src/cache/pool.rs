use core::{borrow::Borrow, fmt, hash::Hash, time::Duration};
use std::{collections::HashMap, future::Future};

use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;

use crate::{Error, Periodic, Result};

/// A keyed set of [`Periodic`] caches sharing one cancellation token.
///
/// Cancelling the pool (or its parent token) stops every entry, including
/// entries inserted afterwards. Replacing or removing an entry stops that
/// entry's refresh task.
///
/// ```
/// use std::time::Duration;
/// use zen::{Error, PeriodicPool};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pool = PeriodicPool::<&str, String>::new();
/// assert_eq!(pool.get("greeting"), Err(Error::MissingKey));
/// pool.insert("greeting", Duration::from_secs(60), || async { Ok("hello".to_string()) });
/// assert!(pool.contains_key("greeting"));
/// # }
/// ```
pub struct PeriodicPool<K, T, E = Error> {
    entries: RwLock<HashMap<K, Periodic<T, E>>>,
    token: CancellationToken,
}

impl<K, T, E> PeriodicPool<K, T, E>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_token(&CancellationToken::new())
    }

    /// Creates a pool whose entries also stop when `parent` is cancelled.
    pub fn with_token(parent: &CancellationToken) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            token: parent.child_token(),
        }
    }

    /// Starts a periodic cache under `key`, stopping any previous entry.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn insert<F, Fut>(&self, key: K, interval: Duration, f: F)
    where
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let periodic = Periodic::spawn_with_token(&self.token, interval, f);
        // The replaced entry is dropped here, which cancels its task.
        self.entries.write().insert(key, periodic);
    }

    /// Returns the latest result cached under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is not in the pool, otherwise
    /// the same as [`Periodic::get`].
    pub fn get<Q>(&self, key: &Q) -> Result<T, E>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        T: Clone,
        E: Clone + From<Error>,
    {
        self.entries
            .read()
            .get(key)
            .map_or_else(|| Err(Error::MissingKey.into()), Periodic::get)
    }

    /// Removes and stops the entry under `key`. Returns whether it existed.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.write().remove(key).is_some()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Stops every entry. Cached results stay readable.
    pub fn cancel(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.len(), "cancelling periodic pool");
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<K, T, E> Default for PeriodicPool<K, T, E>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T, E> Drop for PeriodicPool<K, T, E> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl<K, T, E> fmt::Debug for PeriodicPool<K, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodicPool")
            .field("entries", &self.entries.read().len())
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}
