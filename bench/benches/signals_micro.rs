//! Signals microbenchmarks using Criterion.
//!
//! These benchmarks measure individual operations in isolation:
//! - Fan-out cost as receiver count grows
//! - Typed-validation overhead relative to untyped emission
//! - Deferred queue throughput

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use signals::{EventQueue, Value};
use signals_bench::{event_with_receivers, random_int_args, typed_with_receivers};

// =============================================================================
// Fan-out Benchmarks
// =============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for count in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("emit", count), &count, |b, &n| {
            let (mut event, hits) = event_with_receivers(n);
            let args = random_int_args(2, 7);
            b.iter(|| {
                event.emit(black_box(&args)).unwrap();
            });
            black_box(hits);
        });
    }

    group.finish();
}

// =============================================================================
// Typed Validation Benchmarks
// =============================================================================

fn bench_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed");

    for count in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("valid_emit", count), &count, |b, &n| {
            let (mut event, hits) = typed_with_receivers(n);
            let args = [Value::from("Bye"), Value::from(9.0)];
            b.iter(|| {
                event.emit(black_box(&args)).unwrap();
            });
            black_box(hits);
        });

        group.bench_with_input(BenchmarkId::new("rejected_emit", count), &count, |b, &n| {
            let (mut event, hits) = typed_with_receivers(n);
            let args = [Value::from("Bye"), Value::from("nine")];
            b.iter(|| {
                black_box(event.emit(black_box(&args))).ok();
            });
            black_box(hits);
        });
    }

    group.finish();
}

// =============================================================================
// Queue Benchmarks
// =============================================================================

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for pending in [16usize, 256] {
        group.throughput(Throughput::Elements(pending as u64));

        group.bench_with_input(
            BenchmarkId::new("enqueue_execute_all", pending),
            &pending,
            |b, &n| {
                let (mut event, hits) = event_with_receivers(4);
                let args = random_int_args(2, 11);
                b.iter(|| {
                    let mut queue = EventQueue::new();
                    for _ in 0..n {
                        queue.enqueue(&mut event, args.clone());
                    }
                    queue.execute_all().unwrap();
                });
                black_box(hits);
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fan_out, bench_typed, bench_queue);
criterion_main!(benches);
