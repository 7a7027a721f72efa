//! Benchmarks for the shelter allocator.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_round
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

use animal_shelter::types::catalog;
use animal_shelter::Allocator;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a valid round with long owned-toy lists
fn generate_round(rng: &mut ChaCha8Rng, owned_len: usize) -> [Vec<&'static str>; 3] {
    let vocabulary: Vec<&'static str> = catalog::valid_toys().iter().copied().collect();

    let toys_a = (0..owned_len).filter_map(|_| vocabulary.choose(rng).copied()).collect();
    let toys_b = (0..owned_len).filter_map(|_| vocabulary.choose(rng).copied()).collect();

    let mut animals: Vec<&'static str> = catalog::animal_names().collect();
    animals.shuffle(rng);
    animals.truncate(rng.gen_range(1..=animals.len()));

    [toys_a, toys_b, animals]
}

// ============================================================================
// BENCHMARK: Eligibility
// ============================================================================

fn bench_qualifies(c: &mut Criterion) {
    let mut group = c.benchmark_group("qualifies");

    let owned = ["LASER", "CAIXA", "RATO", "NOVELO", "SKATE", "BOLA"];

    group.bench_function("subsequence_match", |b| {
        b.iter(|| black_box(Allocator::qualifies(black_box("Bebe"), black_box(&owned))))
    });

    group.bench_function("subsequence_miss", |b| {
        b.iter(|| black_box(Allocator::qualifies(black_box("Fofo"), black_box(&owned))))
    });

    group.bench_function("any_order", |b| {
        b.iter(|| black_box(Allocator::qualifies(black_box("Loco"), black_box(&owned))))
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Full Round
// ============================================================================

fn bench_full_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_round");
    group.measurement_time(Duration::from_secs(5));

    let allocator = Allocator::new();

    for owned_len in [4usize, 32, 256] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        group.bench_function(format!("owned_{owned_len}"), |b| {
            b.iter_batched(
                || generate_round(&mut rng, owned_len),
                |[toys_a, toys_b, animals]| {
                    black_box(allocator.allocate_with_receipt(&toys_a, &toys_b, &animals))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_qualifies, bench_full_round);
criterion_main!(benches);
