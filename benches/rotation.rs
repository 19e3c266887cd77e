// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the showcase rotation controller.
//!
//! Measures the performance of:
//! - Tick processing at the UI poll cadence
//! - Manual selection
//! - A full simulated rotation cycle

use criterion::{criterion_group, criterion_main, Criterion};
use qrs_landing::showcase::RotationController;
use std::hint::black_box;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(3000);
const TRANSITION: Duration = Duration::from_millis(300);

fn controller(now: Instant) -> RotationController<u32> {
    RotationController::new((0..8).collect(), INTERVAL, TRANSITION, now)
        .expect("valid configuration")
}

/// Benchmark a single idle tick, the common case at the 100ms poll cadence.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let now = Instant::now();
    let mut ctrl = controller(now);

    group.bench_function("idle_tick", |b| {
        b.iter(|| {
            ctrl.tick(black_box(now + Duration::from_millis(50)));
            black_box(ctrl.active_index());
        });
    });

    group.finish();
}

/// Benchmark manual selection, which re-arms the rotation deadline.
fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let now = Instant::now();
    let mut ctrl = controller(now);

    group.bench_function("select", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % ctrl.len();
            ctrl.select(black_box(index), now).expect("index in range");
            black_box(ctrl.active_index());
        });
    });

    group.finish();
}

/// Benchmark a full cycle through all items with ticks every 100ms,
/// approximating the subscription-driven runtime behavior.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            let now = Instant::now();
            let mut ctrl = controller(now);
            let total = INTERVAL.as_millis() as u64 * 8;
            for ms in (0..=total).step_by(100) {
                ctrl.tick(now + Duration::from_millis(ms));
            }
            black_box(ctrl.active_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_select, bench_full_cycle);
criterion_main!(benches);
