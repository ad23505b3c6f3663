//! Synchronization helpers.

mod atomic;

pub use atomic::*;
