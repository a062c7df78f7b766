// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel operations.
//!
//! Measures the performance of:
//! - Pagination (wraparound index arithmetic)
//! - Swipe interpretation (the confidence decision)
//! - Label derivation (identifier to display name)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::num::NonZeroUsize;
use vitrine::deck::display_name;
use vitrine::ui::carousel::engine::Engine;
use vitrine::ui::carousel::swipe::interpret_release;

/// Benchmark a full forward loop through a deck.
fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    group.bench_function("paginate_loop", |b| {
        b.iter(|| {
            let mut engine = Engine::new(NonZeroUsize::new(12).unwrap());
            for _ in 0..1000 {
                engine.paginate(1);
            }
            black_box(engine.current());
        });
    });

    group.bench_function("go_to", |b| {
        let mut engine = Engine::new(NonZeroUsize::new(12).unwrap());
        b.iter(|| {
            for index in [3usize, 7, 0, 11, 5] {
                engine.go_to(black_box(index));
            }
            black_box(engine.current());
        });
    });

    group.finish();
}

/// Benchmark the swipe-confidence decision.
fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    group.bench_function("interpret_release", |b| {
        b.iter(|| {
            black_box(interpret_release(black_box(-1200.0), black_box(10.0)));
            black_box(interpret_release(black_box(50.0), black_box(2.0)));
        });
    });

    group.finish();
}

/// Benchmark label derivation from slide identifiers.
fn bench_display_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    group.bench_function("display_name", |b| {
        b.iter(|| {
            black_box(display_name(black_box(
                "assets/slides/grilled-salmon-with-citrus.png",
            )));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_paginate, bench_swipe, bench_display_name);
criterion_main!(benches);
