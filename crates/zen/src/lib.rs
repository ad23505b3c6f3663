#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod agg;
#[cfg(feature = "b64")]
pub mod b64;
pub mod cache;
#[cfg(feature = "json")]
pub mod cast;
#[cfg(feature = "json")]
pub mod conv;
mod error;
#[cfg(feature = "json")]
pub mod jsonx;
pub mod logic;
pub mod mapx;
pub mod mathx;
mod number;
#[cfg(feature = "regex")]
pub mod regexpx;
pub mod slice;
pub mod sync;
#[cfg(feature = "async-tokio")]
pub mod task;
pub mod time;

pub use crate::cache::Cached;
#[cfg(feature = "async-tokio")]
pub use crate::cache::{Periodic, PeriodicPool};
pub use crate::error::*;
pub use crate::number::*;
pub use crate::sync::Atomic;
#[cfg(feature = "async-tokio")]
pub use crate::task::{Completer, PoolConfig, PoolSender, Promise};
pub use crate::time::{SystemClock, TimeSource};
