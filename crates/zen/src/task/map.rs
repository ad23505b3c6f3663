use core::future::Future;

use futures::{StreamExt, TryStreamExt, stream};

/// `0` means no bound on concurrency.
const fn concurrency(limit: usize) -> usize {
    if limit == 0 { usize::MAX } else { limit }
}

/// Applies the async `f` to every item with at most `limit` calls in flight.
///
/// The output order matches the input order regardless of completion order.
/// A `limit` of `0` runs every call concurrently.
///
/// ```
/// use zen::task;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let lengths = task::map(["a", "bb", "ccc"], 2, |s| async move { s.len() }).await;
/// assert_eq!(lengths, [1, 2, 3]);
/// # }
/// ```
pub async fn map<I, U, F, Fut>(items: I, limit: usize, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = U>,
{
    stream::iter(items)
        .map(f)
        .buffered(concurrency(limit))
        .collect()
        .await
}

/// Like [`map`] for a fallible `f`. Stops at the first error in input order.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub async fn try_map<I, U, E, F, Fut>(items: I, limit: usize, f: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    stream::iter(items)
        .map(f)
        .buffered(concurrency(limit))
        .try_collect()
        .await
}

/// Keeps the items for which the async `pred` returns `true`, in input order.
pub async fn filter<I, F, Fut>(items: I, limit: usize, mut pred: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    stream::iter(items)
        .map(|item| {
            let keep = pred(&item);
            async move { (keep.await, item) }
        })
        .buffered(concurrency(limit))
        .filter_map(|(keep, item)| async move { keep.then_some(item) })
        .collect()
        .await
}
