//! Time sources used by the expiring caches.

use std::time::Instant;

/// A trait for time sources that return a monotonic instant.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use zen::TimeSource;
///
/// struct Frozen(Instant);
/// impl TimeSource for Frozen {
///     fn now(&self) -> Instant {
///         self.0
///     }
/// }
///
/// let clock = Frozen(Instant::now());
/// assert_eq!(clock.now().duration_since(clock.now()), Duration::ZERO);
/// ```
pub trait TimeSource {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The process's monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
