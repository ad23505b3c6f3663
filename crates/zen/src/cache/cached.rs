use core::{fmt, time::Duration};
use std::time::Instant;

use parking_lot::Mutex;

use crate::{Error, Result, SystemClock, TimeSource};

type Getter<T, E> = Box<dyn Fn() -> Result<T, E> + Send + Sync>;

struct Entry<T, E> {
    fetched_at: Instant,
    result: Result<T, E>,
}

/// A lazily refreshed function cache.
///
/// The wrapped function runs on the first [`get`](Cached::get) and again on
/// the first `get` after strictly more than `expire` has passed since the
/// last fetch. The value/error pair is cached as returned, so a failed fetch
/// is also served until it expires.
///
/// Concurrent callers serialize on an internal mutex: when the value has
/// expired exactly one caller recomputes it and the others observe the fresh
/// result.
///
/// ```
/// use std::{sync::atomic::{AtomicU32, Ordering}, time::Duration};
/// use zen::Cached;
///
/// let calls = AtomicU32::new(0);
/// let cached = Cached::<u32>::new(Duration::from_secs(60), move || {
///     Ok(calls.fetch_add(1, Ordering::Relaxed))
/// });
/// assert_eq!(cached.get(), Ok(0));
/// assert_eq!(cached.get(), Ok(0));
/// cached.invalidate();
/// assert_eq!(cached.get(), Ok(1));
/// ```
pub struct Cached<T, E = Error, C = SystemClock> {
    expire: Duration,
    getter: Getter<T, E>,
    clock: C,
    entry: Mutex<Option<Entry<T, E>>>,
}

impl<T, E> Cached<T, E, SystemClock> {
    pub fn new<F>(expire: Duration, f: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::with_clock(expire, f, SystemClock)
    }
}

impl<T, E, C> Cached<T, E, C>
where
    C: TimeSource,
{
    /// Creates a cache that reads time from `clock`.
    pub fn with_clock<F>(expire: Duration, f: F, clock: C) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            expire,
            getter: Box::new(f),
            clock,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached result, recomputing it first if it is missing or
    /// expired.
    pub fn get(&self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        let mut entry = self.entry.lock();
        if let Some(entry) = entry.as_ref() {
            if self.clock.now().saturating_duration_since(entry.fetched_at) <= self.expire {
                return entry.result.clone();
            }
        }

        let result = (self.getter)();
        *entry = Some(Entry {
            fetched_at: self.clock.now(),
            result: result.clone(),
        });
        result
    }

    /// Drops the cached result so the next [`get`](Cached::get) recomputes.
    pub fn invalidate(&self) {
        *self.entry.lock() = None;
    }

    pub const fn expire(&self) -> Duration {
        self.expire
    }
}

impl<T, E, C> fmt::Debug for Cached<T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cached")
            .field("expire", &self.expire)
            .field("cached", &self.entry.lock().is_some())
            .finish_non_exhaustive()
    }
}
