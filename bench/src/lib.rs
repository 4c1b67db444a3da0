//! Benchmark utilities for the signals library.
//!
//! Provides scenario builders shared by the criterion benches: events
//! pre-populated with counting receivers and deterministic argument data.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p signals_bench
//!
//! # Run a specific benchmark group
//! cargo bench -p signals_bench -- fan_out
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use signals::{Event, Kind, Receiver, TypedEvent, Value};

/// A receiver that bumps a shared counter on every invocation.
pub fn counting_receiver(hits: &Arc<AtomicU64>) -> Receiver {
    let hits = Arc::clone(hits);
    Event::receiver(move |_| {
        hits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    })
}

/// An event with `count` counting receivers connected, plus the counter.
pub fn event_with_receivers(count: usize) -> (Event, Arc<AtomicU64>) {
    let hits = Arc::new(AtomicU64::new(0));
    let mut event = Event::new();
    for _ in 0..count {
        let receiver = counting_receiver(&hits);
        event.connect(&receiver);
    }
    (event, hits)
}

/// A `(str, float)` typed event with `count` counting receivers connected.
pub fn typed_with_receivers(count: usize) -> (TypedEvent, Arc<AtomicU64>) {
    let hits = Arc::new(AtomicU64::new(0));
    let mut event = TypedEvent::new([Kind::Str, Kind::Float]);
    for _ in 0..count {
        let receiver = counting_receiver(&hits);
        event.connect(&receiver);
    }
    (event, hits)
}

/// Deterministic integer argument lists, seeded so runs are comparable.
pub fn random_int_args(len: usize, seed: u64) -> Vec<Value> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| Value::Int(rng.gen_range(0..1_000_000))).collect()
}
