use core::{hint::black_box, time::Duration};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use tokio::runtime::{Builder, Runtime};
use zen::{Atomic, Cached, PoolConfig, Promise, slice, task};

// Number of items processed per benchmark iteration.
const TOTAL_ITEMS: usize = 4096;

fn runtime(workers: usize) -> Runtime {
    Builder::new_multi_thread()
        .enable_all()
        .worker_threads(workers)
        .build()
        .unwrap()
}

/// Benchmarks pushing items through a worker pool and draining the output.
fn benchmark_pool_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("task/pool");
    group.throughput(Throughput::Elements(TOTAL_ITEMS as u64));

    for workers in [1, 4, 8] {
        let rt = runtime(workers);
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &workers| {
            b.to_async(&rt).iter_custom(|iters| async move {
                let start = Instant::now();
                for _ in 0..iters {
                    let (tx, mut rx) =
                        task::pool(PoolConfig::with_workers(workers), |n: u64| async move {
                            black_box(n.wrapping_mul(31))
                        })
                        .unwrap();
                    tokio::spawn(async move {
                        for n in 0..TOTAL_ITEMS as u64 {
                            tx.send(n).await.unwrap();
                        }
                    });
                    while let Some(out) = rx.recv().await {
                        black_box(out);
                    }
                }
                start.elapsed()
            });
        });
    }

    group.finish();
}

/// Benchmarks ordered bounded-concurrency mapping.
fn benchmark_task_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("task/map");
    group.throughput(Throughput::Elements(TOTAL_ITEMS as u64));
    let rt = runtime(4);

    for limit in [0, 16, 256] {
        group.bench_with_input(BenchmarkId::new("limit", limit), &limit, |b, &limit| {
            b.to_async(&rt).iter(|| async move {
                let out = task::map(0..TOTAL_ITEMS, limit, |n| async move { n * 2 }).await;
                black_box(out);
            });
        });
    }

    group.finish();
}

/// Benchmarks many readers awaiting the same resolved promise.
fn benchmark_promise_readers(c: &mut Criterion) {
    let mut group = c.benchmark_group("task/promise");
    group.throughput(Throughput::Elements(TOTAL_ITEMS as u64));
    let rt = runtime(4);

    group.bench_function(format!("readers/{TOTAL_ITEMS}"), |b| {
        b.to_async(&rt).iter(|| async {
            let promise = Promise::<u64>::spawn(async { Ok(42) });
            for _ in 0..TOTAL_ITEMS {
                black_box(promise.wait().await.as_ref().ok());
            }
        });
    });

    group.finish();
}

/// Benchmarks cache hits with several threads contending on the lock.
fn benchmark_cached_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache/cached");
    let threads = 4;
    group.throughput(Throughput::Elements((TOTAL_ITEMS * threads) as u64));

    group.bench_function(format!("threads/{threads}"), |b| {
        let cached = Cached::<u64>::new(Duration::from_secs(3600), || Ok(7));
        b.iter_custom(|iters| {
            let start = Instant::now();
            for _ in 0..iters {
                let barrier = Arc::new(Barrier::new(threads));
                scope(|s| {
                    for _ in 0..threads {
                        let barrier = Arc::clone(&barrier);
                        let cached = &cached;
                        s.spawn(move || {
                            barrier.wait();
                            for _ in 0..TOTAL_ITEMS {
                                black_box(cached.get().ok());
                            }
                        });
                    }
                });
            }
            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks read-modify-write through the lock-guarded value.
fn benchmark_atomic_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/atomic");
    group.throughput(Throughput::Elements(TOTAL_ITEMS as u64));

    group.bench_function(format!("context/{TOTAL_ITEMS}"), |b| {
        let counter = Atomic::new(0u64);
        b.iter(|| {
            for _ in 0..TOTAL_ITEMS {
                counter.context(|n| *n = n.wrapping_add(1));
            }
            black_box(counter.get());
        });
    });

    group.finish();
}

fn benchmark_slice_unique(c: &mut Criterion) {
    let values: Vec<usize> = (0..TOTAL_ITEMS).map(|n| n % 97).collect();
    let mut group = c.benchmark_group("slice");
    group.throughput(Throughput::Elements(TOTAL_ITEMS as u64));
    group.bench_function("unique", |b| b.iter(|| black_box(slice::unique(&values))));
    group.finish();
}

criterion_group!(
    benches,
    // Concurrency primitives
    benchmark_pool_throughput,
    benchmark_task_map,
    benchmark_promise_readers,
    // Locks
    benchmark_cached_contended,
    benchmark_atomic_context,
    // Plain helpers
    benchmark_slice_unique,
);
criterion_main!(benches);
