//! Function caches.
//!
//! - [`Cached`] recomputes lazily on read once its value has expired.
//! - [`Periodic`] recomputes on a timer in a background task; reads never
//!   wait on the computation.
//! - [`PeriodicPool`] keys a set of [`Periodic`] caches under one shared
//!   cancellation token.

mod cached;
#[cfg(feature = "async-tokio")]
mod periodic;
#[cfg(feature = "async-tokio")]
mod pool;

pub use cached::*;
#[cfg(feature = "async-tokio")]
pub use periodic::*;
#[cfg(feature = "async-tokio")]
pub use pool::*;
