//! Fixed-size pool of asynchronous workers.
//!
//! [`pool`] spawns `workers` Tokio tasks that all take input from one bounded
//! queue, so whichever worker is idle takes the next item. Every worker
//! publishes into one shared output channel. The output channel closes once
//! every sender is gone and the queue has been drained.

use core::future::Future;
use std::sync::Arc;

use tokio::{
    runtime::Handle,
    sync::{Mutex, mpsc},
};
use tokio_util::sync::CancellationToken;

use super::worker::worker_loop;
use crate::{Error, Result};

/// Sizing of a worker [`pool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of worker tasks.
    pub workers: usize,
    /// Capacity of the shared input queue.
    pub queue_depth: usize,
    /// Capacity of the shared output channel.
    pub output_buffer: usize,
}

impl PoolConfig {
    /// A config with `workers` workers and default buffers.
    pub const fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            queue_depth: 1,
            output_buffer: if workers == 0 { 1 } else { workers },
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("workers", self.workers),
            ("queue_depth", self.queue_depth),
            ("output_buffer", self.output_buffer),
        ] {
            if value == 0 {
                return Err(Error::InvalidArgument {
                    reason: format!("pool {name} must be greater than 0"),
                });
            }
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    /// One worker per logical CPU.
    fn default() -> Self {
        Self::with_workers(num_cpus::get())
    }
}

struct Dispatcher<I> {
    input: mpsc::Sender<I>,
    workers: usize,
    shutdown_token: CancellationToken,
}

/// The input side of a worker [`pool`].
///
/// Clones share the same queue and workers. Input closes when every
/// `PoolSender` has been dropped (or [`closed`](PoolSender::close)).
pub struct PoolSender<I> {
    inner: Arc<Dispatcher<I>>,
}

impl<I> Clone for PoolSender<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I> core::fmt::Debug for PoolSender<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PoolSender")
            .field("workers", &self.inner.workers)
            .field("cancelled", &self.inner.shutdown_token.is_cancelled())
            .finish()
    }
}

impl<I: Send> PoolSender<I> {
    /// Queues `item` for the next idle worker.
    ///
    /// Waits while the shared queue is full. Cancelling the pool releases a
    /// waiting call.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pool was cancelled ([`Error::Cancelled`]).
    /// - Every worker has stopped ([`Error::ChannelError`]).
    pub async fn send(&self, item: I) -> Result<()> {
        let inner = &*self.inner;
        if inner.shutdown_token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            biased;
            () = inner.shutdown_token.cancelled() => Err(Error::Cancelled),
            sent = inner.input.send(item) => sent.map_err(|_| input_closed()),
        }
    }

    /// Closes this handle's side of the input.
    pub fn close(self) {}

    /// Stops every worker after its current item. Queued items are dropped.
    pub fn cancel(&self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Cancelling worker pool");
        self.inner.shutdown_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.shutdown_token.is_cancelled()
    }

    pub fn workers(&self) -> usize {
        self.inner.workers
    }
}

fn input_closed() -> Error {
    #[cfg(feature = "tracing")]
    tracing::error!("Worker pool input closed");
    Error::ChannelError {
        context: "Worker pool input closed".to_string(),
    }
}

/// Spawns a pool of workers that apply `worker` to every input item.
///
/// Results arrive on the returned receiver in completion order, which need
/// not match input order. The receiver yields `None` once all senders are
/// dropped and every accepted item has been processed.
///
/// ```
/// use zen::{PoolConfig, task};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> zen::Result<()> {
/// let (tx, mut rx) = task::pool(PoolConfig::with_workers(4), |n: u64| async move { n * n })?;
/// tokio::spawn(async move {
///     for n in 1..=3 {
///         tx.send(n).await?;
///     }
///     Ok::<_, zen::Error>(())
/// });
///
/// let mut total = 0;
/// while let Some(square) = rx.recv().await {
///     total += square;
/// }
/// assert_eq!(total, 14);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if any [`PoolConfig`] field is zero or
/// if called outside a Tokio runtime.
pub fn pool<I, O, F, Fut>(config: PoolConfig, worker: F) -> Result<(PoolSender<I>, mpsc::Receiver<O>)>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = O> + Send + 'static,
{
    config.validate()?;
    let handle = Handle::try_current().map_err(|e| Error::InvalidArgument {
        reason: e.to_string(),
    })?;

    let shutdown_token = CancellationToken::new();
    let worker = Arc::new(worker);
    let (out_tx, out_rx) = mpsc::channel(config.output_buffer);

    let (input, rx) = mpsc::channel(config.queue_depth);
    let rx = Arc::new(Mutex::new(rx));

    for worker_id in 0..config.workers {
        handle.spawn(worker_loop(
            worker_id,
            Arc::clone(&rx),
            out_tx.clone(),
            Arc::clone(&worker),
            shutdown_token.clone(),
        ));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(workers = config.workers, "Worker pool started");

    let sender = PoolSender {
        inner: Arc::new(Dispatcher {
            input,
            workers: config.workers,
            shutdown_token,
        }),
    };
    Ok((sender, out_rx))
}
