use core::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

/// Input queue shared by every worker of a pool.
pub(super) type SharedReceiver<I> = Arc<Mutex<mpsc::Receiver<I>>>;

/// Worker task that applies `worker` to each item taken from `rx`.
///
/// The lock on `rx` is held only while waiting for the next item, so an idle
/// worker never queues behind a busy one.
///
/// Runs until the input closes or the pool is cancelled. An item already being
/// processed always finishes. If the pool is cancelled while the output is
/// full, that last result is published only if there is room for it right
/// away; otherwise it is dropped.
pub(super) async fn worker_loop<I, O, F, Fut>(
    worker_id: usize,
    rx: SharedReceiver<I>,
    output: mpsc::Sender<O>,
    worker: Arc<F>,
    shutdown_token: CancellationToken,
) where
    F: Fn(I) -> Fut,
    Fut: Future<Output = O>,
{
    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} started");
    #[cfg(not(feature = "tracing"))]
    let _ = worker_id;

    loop {
        let item = tokio::select! {
            biased;
            () = shutdown_token.cancelled() => break,
            item = async { rx.lock().await.recv().await } => match item {
                Some(item) => item,
                None => break,
            },
        };

        let result = worker(item).await;

        tokio::select! {
            biased;
            permit = output.reserve() => match permit {
                Ok(permit) => permit.send(result),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Worker {worker_id} output receiver dropped");
                    break;
                }
            },
            () = shutdown_token.cancelled() => {
                if output.try_send(result).is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Worker {worker_id} dropped a result on cancellation");
                }
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} stopped");
}
