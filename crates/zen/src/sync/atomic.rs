use core::fmt;

use parking_lot::RwLock;

/// A value guarded by a reader/writer lock.
///
/// Reads take a shared lock and clone; writes take the exclusive lock. Use
/// [`Atomic::context`] when a read-modify-write must not interleave with other
/// writers.
///
/// ```
/// use zen::Atomic;
///
/// let counter = Atomic::new(0u32);
/// counter.context(|n| *n += 1);
/// assert_eq!(counter.replace(10), 1);
/// assert_eq!(counter.get(), 10);
/// ```
#[derive(Default)]
pub struct Atomic<T> {
    value: RwLock<T>,
}

impl<T> Atomic<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Stores `value` and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        core::mem::replace(&mut *self.value.write(), value)
    }

    /// Runs `f` with exclusive access to the value.
    pub fn context<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.value.write())
    }

    /// Runs `f` with shared access to the value.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Clone> Atomic<T> {
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&*self.value.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn default_and_debug() {
        let value: Atomic<Vec<u8>> = Atomic::default();
        assert!(value.read(Vec::is_empty));
        value.set(vec![1]);
        assert_eq!(format!("{value:?}"), "Atomic([1])");
        assert_eq!(value.into_inner(), [1]);
    }

    #[test]
    fn concurrent_context_updates_are_not_lost() {
        let counter = Arc::new(Atomic::new(0usize));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.context(|n| *n += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.get(), 8000);
    }
}
