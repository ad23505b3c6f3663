//! Asynchronous building blocks on top of Tokio.
//!
//! - [`Promise`]: a single-assignment result shared by any number of readers.
//! - [`pool`]: a fixed set of workers draining an input queue into one output
//!   channel.
//! - [`map`], [`try_map`] and [`filter`]: bounded concurrent transforms that
//!   keep input order.

mod map;
mod pool;
mod promise;

pub use map::*;
pub use pool::*;
pub use promise::*;
